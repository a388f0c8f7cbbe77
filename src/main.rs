use scaffolder::{
    cli::{get_cli, get_log_level_from_verbose, run},
    error::default_error_handler,
};

fn main() {
    let cli = get_cli();
    let log_level = get_log_level_from_verbose(cli.verbose);
    env_logger::Builder::new().filter_level(log_level).init();

    // get_cli exits when no subcommand was given
    let Some(command) = cli.command else { return };

    if let Err(err) = run(cli.templates_dir, command) {
        default_error_handler(err);
    }
}
