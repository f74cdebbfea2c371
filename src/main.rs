//! Iron Instruction command-line viewer

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use iron_instruction::config::AppConfig;
use iron_instruction::loader;
use iron_instruction::model::UserType;
use iron_instruction::{ProgramViewer, Result};

#[derive(Parser)]
#[command(name = "iron-instruction")]
#[command(author, version, about = "Render a training program as nested collapsible sections")]
struct Cli {
    /// Program JSON file
    program: PathBuf,

    /// Athlete JSON file with one-rep maxes, used for percentage-based sets
    #[arg(short, long)]
    athlete: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View as the coach instead of the athlete
    #[arg(long)]
    coach: bool,

    /// Show coach editing controls
    #[arg(short, long)]
    edit: bool,

    /// Section path to click open, e.g. `1/2` for week 1, day 2. Repeatable.
    #[arg(short, long)]
    open: Vec<String>,

    /// Viewport width in pixels
    #[arg(short, long)]
    width: Option<f32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match AppConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                init_logging(log::LevelFilter::Info);
                log::error!("Failed to load configuration {:?}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };
    init_logging(config.preferences.log_level.to_level_filter());

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Configured level, overridable through `RUST_LOG`.
fn init_logging(level: log::LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}

fn run(cli: &Cli, mut config: AppConfig) -> Result<()> {
    if let Some(width) = cli.width {
        config.preferences.viewport_width = width;
        config.validate()?;
    }

    let program = loader::load_program(&cli.program)?;
    let athlete = cli
        .athlete
        .as_deref()
        .map(loader::load_athlete)
        .transpose()?;
    let user_type = if cli.coach {
        UserType::Coach
    } else {
        UserType::Athlete
    };

    let mut viewer = ProgramViewer::new(program, athlete, user_type, cli.edit, &config.preferences);
    for path in &cli.open {
        viewer.open_path(path)?;
    }
    viewer.settle();

    print!("{}", viewer.render().outline());
    match viewer.container_width() {
        Some(width) => println!("container width: {} ({:?})", width.width, width.policy),
        None => println!("container width: unset"),
    }
    Ok(())
}
