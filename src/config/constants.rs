//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5050;

// =============================================================================
// Storage (MongoDB)
// =============================================================================

/// Default MongoDB connection URL (for development)
pub const DEFAULT_MONGO_URL: &str = "mongodb://localhost:27017/signup-service";

/// Database used when neither `MONGO_DATABASE` nor the URL names one
pub const DEFAULT_DATABASE_NAME: &str = "signup-service";

/// Collection holding registered accounts
pub const ACCOUNTS_COLLECTION: &str = "accounts";

/// Collection holding server faults recorded by the error-logging decorator
pub const ERRORS_COLLECTION: &str = "errors";

// =============================================================================
// Password Hashing (Argon2id)
// =============================================================================

/// Memory cost in KiB
pub const HASH_MEMORY_COST_KIB: u32 = 19_456;

/// Number of iterations
pub const HASH_ITERATIONS: u32 = 2;

/// Degree of parallelism
pub const HASH_PARALLELISM: u32 = 1;

// =============================================================================
// HTTP
// =============================================================================

/// Prefix every API route is nested under
pub const API_PREFIX: &str = "/api";

/// Signup route, relative to [`API_PREFIX`]
pub const SIGNUP_ROUTE: &str = "/signup";
