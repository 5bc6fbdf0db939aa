use std::io::Write;

use crate::destination::constants::STDERR_DESTINATION_ID;
use crate::destination::LogDestination;
use crate::error::LogvarkResult;
use crate::level::LogLevel;

// Writes to the process stderr stream.
pub struct StderrDestination {}

impl StderrDestination {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for StderrDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl LogDestination for StderrDestination {
    fn id(&self) -> u32 {
        STDERR_DESTINATION_ID
    }

    // stderr carries no native severity channel, so the message is
    // written as-is, one per line
    fn write_log(&self, _level: LogLevel, message: &str) -> LogvarkResult<()> {
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        writeln!(handle, "{message}")?;
        Ok(())
    }
}
