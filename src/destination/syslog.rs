use std::io::Write;
use std::sync::Mutex;

use syslog::{Facility, Formatter3164, Logger, LoggerBackend};

use crate::destination::constants::SYSLOG_DESTINATION_ID;
use crate::destination::LogDestination;
use crate::error::LogvarkResult;
use crate::level::LogLevel;

// Writes to the local syslog daemon. The connection is opened at
// construction under the given program id, held for the lifetime of
// the destination and closed on drop. Records are framed per RFC 3164
// with the user facility.
// Only one syslog destination should exist per process. The type does
// not police that on its own; the registry rejects a second
// registration under the syslog id.
pub struct SyslogDestination {
    // the writer's severity methods take &mut, the lock lets write_log
    // take &self from any thread
    writer: Mutex<Logger<LoggerBackend, Formatter3164>>,
}

impl SyslogDestination {
    /// Connects to the local syslog daemon, tagging emitted records with the given program id.
    pub fn new(program_id: &str) -> LogvarkResult<Self> {
        let formatter = Formatter3164 {
            facility: Facility::LOG_USER,
            hostname: None,
            process: program_id.to_string(),
            pid: std::process::id(),
        };
        let writer = syslog::unix(formatter)?;
        Ok(Self {
            writer: Mutex::new(writer),
        })
    }

    // The id assigned to the syslog destination type. At most one
    // syslog destination exists per process, so callers can deregister
    // it without holding the instance.
    pub fn syslog_id() -> u32 {
        SYSLOG_DESTINATION_ID
    }
}

impl LogDestination for SyslogDestination {
    fn id(&self) -> u32 {
        Self::syslog_id()
    }

    fn write_log(&self, level: LogLevel, message: &str) -> LogvarkResult<()> {
        let mut writer = match self.writer.lock() {
            Ok(guard) => guard,
            // the only state behind the lock is the daemon socket,
            // which stays usable after a panicked writer
            Err(poisoned) => poisoned.into_inner(),
        };
        emit(&mut writer, level, message)
    }
}

// Submit message at the native severity for level: ERROR maps to
// LOG_ERR, WARNING to LOG_WARNING, INFO to LOG_INFO and DEBUG to
// LOG_DEBUG. Syslog defines nothing more verbose than debug, so TRACE
// and OFF also map to LOG_DEBUG; a message carrying them was already
// accepted by the caller's filter and must still be written.
pub(crate) fn emit<W: Write>(
    writer: &mut Logger<W, Formatter3164>,
    level: LogLevel,
    message: &str,
) -> LogvarkResult<()> {
    match level {
        LogLevel::Error => writer.err(message)?,
        LogLevel::Warning => writer.warning(message)?,
        LogLevel::Info => writer.info(message)?,
        LogLevel::Off | LogLevel::Debug | LogLevel::Trace => writer.debug(message)?,
    }
    Ok(())
}
