// Destination ids 0 through RESERVED_ID_MAX are reserved for the
// built-in destination types provided by this crate. User-defined
// destinations must pick ids above this value; the registry rejects
// anything else.
pub const RESERVED_ID_MAX: u32 = 100;

// Id of the syslog destination. Only one syslog destination may exist
// per process, so the id belongs to the type rather than an instance.
pub const SYSLOG_DESTINATION_ID: u32 = 0;

// Id of the stderr destination.
pub const STDERR_DESTINATION_ID: u32 = 1;

// Reserved ids actually claimed by a built-in destination type. The
// rest of the reserved range is held back for future sinks.
pub(crate) const BUILTIN_IDS: [u32; 2] = [SYSLOG_DESTINATION_ID, STDERR_DESTINATION_ID];
