//! Platform-specific configuration

/// Submit shortcut display for form help text
/// Same on every platform
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Reset shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";
