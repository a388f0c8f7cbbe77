//! Constants used throughout the scaffolder

/// Extension appended to template names that have none, and used for generated files.
pub const DEFAULT_EXTENSION: &str = "py";

/// Name of the template store directory next to the executable.
pub const TEMPLATES_DIR_NAME: &str = "templates";

/// Reserved variable injected with the generation date when the caller omits it.
pub const DATE_VARIABLE: &str = "date";

/// `strftime` format of the injected date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Author used by `create-package` when none is given.
pub const DEFAULT_AUTHOR: &str = "Developer";

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// Constructor body used by `create-class` when none is given.
pub const DEFAULT_CONSTRUCTOR_BODY: &str = "        pass";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Names of the built-in templates the generators rely on.
pub mod templates {
    pub const PACKAGE: &str = "python/package";
    pub const CLASS: &str = "python/class";
    pub const TEST: &str = "python/test";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    pub const USAGE: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
