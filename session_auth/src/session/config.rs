/// Name of the cookie carrying the signed session token
pub const SESSION_COOKIE_NAME: &str = "session";

/// Token lifetime and cookie Max-Age when none is configured: 30 days
pub const DEFAULT_SESSION_TTL: u64 = 60 * 60 * 24 * 30;
