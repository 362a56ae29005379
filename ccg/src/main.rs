use std::process::ExitCode;

use ccg::{build_registry, report, run, Cli};
use ccg_cli::TerminalPrompter;
use ccg_core::logging::setup_logging;
use ccg_core::settings_loader;
use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match settings_loader::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(error) => return exit_code(report(&error, &mut std::io::stderr())),
    };
    setup_logging(&settings);
    tracing::debug!(?settings, "settings loaded");

    let registry = build_registry(&settings);
    let mut prompter = TerminalPrompter::stdio().with_color(settings.color);
    let code = run(
        &cli.name,
        &registry,
        &mut prompter,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr(),
    );
    exit_code(code)
}

fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from)
}
