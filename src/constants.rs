pub const DEFAULT_API_URL: &str = "https://api.travel-catalog.dev/v1";
pub const CONFIG_FILE: &str = ".voyage-cli-config.json";

/// Country code that triggers the travel warning.
pub const WARNING_COUNTRY: &str = "KP";
pub const WARNING_MESSAGE: &str = "Are you sure you want to go this country?";

/// Trigger label when neither a selection nor a placeholder exists.
pub const SELECT_FALLBACK: &str = "Select";

/// Quiet period after the last selection before the outward
/// change notification fires, in milliseconds.
pub const SETTLE_MS: u64 = 150;

/// Event poll tick rate for the interactive loop, in milliseconds.
pub const TICK_RATE_MS: u64 = 50;
