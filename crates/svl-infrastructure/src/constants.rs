//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "svl.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "svl";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "SVL";

/// Separator between nested keys in environment variables
/// (`SVL_REGISTRY__DETECT_CYCLES`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "SVL_LOG";

/// File stem used when a log directory is configured without a file name
pub const DEFAULT_LOG_FILE_STEM: &str = "svl";
