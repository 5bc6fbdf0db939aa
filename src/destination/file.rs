use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::destination::LogDestination;
use crate::error::{LogvarkResult, LogvarkWrap};
use crate::level::LogLevel;

// Appends messages to a log file, one per line. When the live log
// grows to max_size bytes or more it is renamed to the backup path and
// reopened empty; at most one backup generation is kept.
pub struct FileDestination {
    id: u32,
    writer: Mutex<FileWriter>,
}

struct FileWriter {
    active: PathBuf,
    backup: PathBuf,
    max_size: u64,
    writer: BufWriter<std::fs::File>,
}

impl FileDestination {
    // Open (or create) the live log file at `active` for appending.
    // File destinations are user-configured sinks, the caller picks an
    // id above constants::RESERVED_ID_MAX and the registry checks it
    // at registration time.
    pub fn new<T: AsRef<Path>>(
        id: u32,
        active: T,
        backup: T,
        max_size: u64,
    ) -> LogvarkResult<Self> {
        let file = open_append(active.as_ref())?;
        Ok(Self {
            id,
            writer: Mutex::new(FileWriter {
                active: active.as_ref().to_owned(),
                backup: backup.as_ref().to_owned(),
                max_size,
                writer: BufWriter::new(file),
            }),
        })
    }
}

impl LogDestination for FileDestination {
    fn id(&self) -> u32 {
        self.id
    }

    fn write_log(&self, _level: LogLevel, message: &str) -> LogvarkResult<()> {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        writer.write_line(message)
    }
}

impl FileWriter {
    fn write_line(&mut self, message: &str) -> LogvarkResult<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        self.rotate()
    }

    // current size of the live log in bytes
    fn size(&self) -> LogvarkResult<u64> {
        Ok(self.writer.get_ref().metadata()?.len())
    }

    // Rotate the live log file if it reached the size cap.
    fn rotate(&mut self) -> LogvarkResult<()> {
        if self.size()? < self.max_size {
            return Ok(());
        }
        // rename the open file, then reopen the live path empty
        std::fs::rename(&self.active, &self.backup)?;
        let file = open_append(&self.active)?;
        self.writer = BufWriter::new(file);
        Ok(())
    }
}

fn open_append(path: &Path) -> LogvarkResult<std::fs::File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap(format!("open log file {}", path.display()))
}
