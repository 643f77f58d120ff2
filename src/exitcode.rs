//! Standard exit codes (BSD sysexits.h compatible)

/// Command line usage error (includes invalid tree dimensions)
pub const USAGE: i32 = 64;

/// Internal software error
pub const SOFTWARE: i32 = 70;

/// System error (e.g., no entropy source)
pub const OSERR: i32 = 71;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
