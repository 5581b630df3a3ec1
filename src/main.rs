//! `classpilot` 바이너리 진입점.

use classpilot::interface::cli::script::run_script;
use classpilot::interface::cli::{AppComposition, Cli, CliAction, run_repl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let composition = AppComposition::default();

    match Cli::parse_action() {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::RunScript(path) => {
            if let Err(err) = run_script(&composition, &path) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
        CliAction::Interactive => {
            if let Err(err) = run_repl(&composition) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
