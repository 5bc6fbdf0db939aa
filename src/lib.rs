// Log destinations used by our daemons: a common LogDestination trait
// for places a log message can be written, concrete sinks for syslog,
// stderr and size-rotated files, and a DestinationRegistry that owns
// the active sinks keyed by id and fans already-filtered messages out
// to all of them. Level filtering is the dispatching logger's job and
// happens before a message reaches this crate.

pub mod destination;
pub mod error;
pub mod level;
pub mod registry;

pub use crate::destination::file::FileDestination;
pub use crate::destination::stderr::StderrDestination;
pub use crate::destination::syslog::SyslogDestination;
pub use crate::destination::LogDestination;
pub use crate::level::LogLevel;
pub use crate::registry::DestinationRegistry;

#[cfg(test)]
mod test;
