use std::collections::HashMap;

use log::{debug, warn};

use crate::destination::constants::{BUILTIN_IDS, RESERVED_ID_MAX};
use crate::destination::LogDestination;
use crate::error::{LogvarkError, LogvarkErrorList, LogvarkResult};
use crate::level::LogLevel;

// Owns the active log destinations of a process, keyed by destination
// id. The registry never filters: whoever dispatches a message decides
// beforehand which levels are enabled, write_to_all hands the message
// to every destination unconditionally.
pub struct DestinationRegistry {
    destinations: HashMap<u32, Box<dyn LogDestination>>,
}

impl DestinationRegistry {
    pub fn new() -> Self {
        Self {
            destinations: HashMap::new(),
        }
    }

    // Register a destination under its own id and take ownership of it.
    // Ids 0 through RESERVED_ID_MAX are partitioned off for the
    // destination types this crate provides; registering under a
    // reserved id that no built-in type claims is rejected, as is any
    // id that is already present. In particular, a second syslog
    // destination fails here with a duplicate id error.
    pub fn register(&mut self, destination: Box<dyn LogDestination>) -> LogvarkResult<()> {
        let id = destination.id();
        if id <= RESERVED_ID_MAX && !BUILTIN_IDS.contains(&id) {
            return Err(LogvarkError::ReservedId(id));
        }
        if self.destinations.contains_key(&id) {
            return Err(LogvarkError::DuplicateDestination(id));
        }
        debug!("registered log destination {}", id);
        self.destinations.insert(id, destination);
        Ok(())
    }

    // Remove and return the destination registered under id, or None
    // when there is none. Dropping the returned box closes the
    // underlying sink.
    pub fn deregister(&mut self, id: u32) -> Option<Box<dyn LogDestination>> {
        let removed = self.destinations.remove(&id);
        match removed {
            Some(_) => debug!("deregistered log destination {}", id),
            None => warn!("no log destination registered under id {}", id),
        }
        removed
    }

    pub fn contains(&self, id: u32) -> bool {
        self.destinations.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    // Write an already-filtered message to every registered
    // destination. Every destination is attempted even when some fail,
    // failures are collected and handed back once the fan-out is
    // complete so the caller can count or drop them. Nothing here
    // retries, blocks on a failed sink, or panics.
    pub fn write_to_all(&self, level: LogLevel, message: &str) -> LogvarkResult<()> {
        let mut errors = LogvarkErrorList::new();
        for (id, destination) in self.destinations.iter() {
            if let Err(err) = destination.write_log(level, message) {
                errors.push(LogvarkError::wrap(
                    format!("write to log destination {id}"),
                    err,
                ));
            }
        }
        if errors.is_empty() {
            return Ok(());
        }
        Err(LogvarkError::List(errors))
    }
}

impl Default for DestinationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
