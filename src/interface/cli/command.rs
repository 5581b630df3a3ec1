//! CLI 명령 파싱 모듈.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "classpilot")]
#[command(about = "Command-driven in-memory registry for virtual classrooms")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Command script to run line by line
    script: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config
    Config,
}

pub enum CliAction {
    Interactive,
    InspectConfig,
    RunScript(PathBuf),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        let cli = Cli::parse();

        match cli.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => match cli.script {
                Some(path) => CliAction::RunScript(path),
                None => CliAction::Interactive,
            },
        }
    }
}
