use crate::constants::{
    exit_codes, verbosity, DEFAULT_AUTHOR, DEFAULT_CONSTRUCTOR_BODY, DEFAULT_OUTPUT_DIR,
};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// Scaffolder - generate boilerplate source files from templates.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Template store directory (defaults to `templates/` next to the executable).
    #[arg(long = "templates-dir", value_name = "DIR", global = true)]
    pub templates_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available templates.
    #[command(visible_alias = "ls")]
    List,

    /// Create a package with an initializer and a main module.
    CreatePackage(CreatePackageArgs),

    /// Create a class module.
    CreateClass(CreateClassArgs),

    /// Create a test module for a class.
    CreateTest(CreateTestArgs),

    /// Render any template with explicit variables.
    Render(RenderArgs),

    /// Show the resolved path and placeholders of a template.
    Info(InfoArgs),
}

/// Arguments for the create-package command.
#[derive(Parser, Debug)]
pub struct CreatePackageArgs {
    /// Name of the package.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Author recorded in the package.
    #[arg(long, default_value = DEFAULT_AUTHOR)]
    pub author: String,

    /// Directory the package directory is created in.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments for the create-class command.
#[derive(Parser, Debug)]
pub struct CreateClassArgs {
    /// Name of the class.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Module name (defaults to the class name in snake_case).
    #[arg(short, long)]
    pub module: Option<String>,

    /// Directory the module is created in.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Text inserted after `self` in the constructor signature, e.g. `, name, size=0`.
    #[arg(long = "constructor-params", default_value = "", allow_hyphen_values = true)]
    pub constructor_params: String,

    /// Constructor body, inserted verbatim.
    #[arg(
        long = "constructor-body",
        default_value = DEFAULT_CONSTRUCTOR_BODY,
        allow_hyphen_values = true
    )]
    pub constructor_body: String,
}

/// Arguments for the create-test command.
#[derive(Parser, Debug)]
pub struct CreateTestArgs {
    /// Name of the class under test.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Module containing the class (defaults to the class name in snake_case).
    #[arg(short, long)]
    pub module: Option<String>,

    /// Directory the test module is created in.
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

/// Arguments for the render command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Template name, e.g. `python/class`.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,

    /// File to write; the result is printed to stdout when omitted.
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Variables as a JSON object string, or `-` to read it from stdin.
    #[arg(short, long)]
    pub answers: Option<String>,

    /// Path to a JSON file containing variables.
    #[arg(long = "answers-file", value_name = "FILE")]
    pub answers_file: Option<PathBuf>,

    /// A single variable; repeatable and applied after the JSON answers.
    #[arg(long = "var", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub vars: Vec<(String, String)>,
}

/// Arguments for the info command.
#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Template name, e.g. `python/class`.
    #[arg(value_name = "TEMPLATE")]
    pub template: String,
}

/// Parses a `KEY=VALUE` pair; the value may itself contain `=`.
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn print_help_and_exit() -> ! {
    let mut command = Cli::command().help_template(HELP_TEMPLATE);
    if let Err(print_err) = command.print_help() {
        eprintln!("Failed to display help information: {print_err}");
    } else {
        println!();
    }
    std::process::exit(exit_codes::FAILURE);
}

/// Parse command line arguments with custom handling for missing inputs.
///
/// A missing subcommand or positional argument prints the error and the help
/// text to stdout and exits with a failure code. Unknown commands and
/// options print clap's message to stdout and exit with the usage code;
/// `--help` and `--version` keep clap's behavior.
pub fn get_cli() -> Cli {
    let cli = Cli::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            println!("{}", e.render());
            print_help_and_exit();
        } else if e.use_stderr() {
            println!("{}", e.render());
            std::process::exit(exit_codes::USAGE);
        } else {
            e.exit();
        }
    });
    if cli.command.is_none() {
        print_help_and_exit();
    }
    cli
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
