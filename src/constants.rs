/// Points-per-kg rate applied to materials missing from the rate table
pub const DEFAULT_RATE: i64 = 1;

/// Maximum number of rows returned by the user search endpoint
pub const SEARCH_RESULT_LIMIT: i64 = 20;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a registration with missing fields
pub const ERR_REGISTER_FIELDS: &str = "name, email and secret are required";

/// Error message for a login with missing fields
pub const ERR_LOGIN_FIELDS: &str = "email and secret are required";

/// Error message for a recycling submission with missing fields
pub const ERR_RECORD_FIELDS: &str = "user_id, material and quantity are required";
