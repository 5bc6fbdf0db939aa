use crate::error::LogvarkResult;
use crate::level::LogLevel;

pub mod constants;
pub mod file;
pub mod stderr;
pub mod syslog;

// A destination is a place a log message can be written: syslog, a
// file, a console stream, a remote collector. Destinations are owned
// exclusively, none of them implement Clone since a duplicated handle
// to an OS logging resource is leaked or torn state. Dropping a
// destination releases the underlying resource.
//
// Destinations may be written from several threads at once; a
// destination carries its own lock when the underlying resource needs
// serialized access. Callers get no ordering guarantee between writes
// racing on different threads, only that no single write is torn.
pub trait LogDestination: Send + Sync {
    // Unique id of this destination, stable for its entire lifetime
    // and free of side effects. Ids at or below
    // constants::RESERVED_ID_MAX belong to the destination types this
    // crate provides.
    fn id(&self) -> u32;

    // Write an already-filtered message to the underlying sink.
    // Level filtering happened before dispatch: the write is attempted
    // no matter which level it is handed, the level only tags the
    // record where the sink has a native channel for it, such as the
    // syslog severity. There is no retry, a failed write is reported
    // once and the message dropped.
    fn write_log(&self, level: LogLevel, message: &str) -> LogvarkResult<()>;
}
