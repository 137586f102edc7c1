use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use u_assign::config::{Config, OutputFormat};
use u_assign::records::Project;
use u_assign::report::render_table;
use u_assign::scheduler::GreedyAssigner;
use u_assign::Result;

/// Assign dated tasks to the cheapest qualified, available employees
#[derive(Parser, Debug)]
#[command(name = "u-assign")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug  Log every assignment decision")]
struct Cli {
    /// Project snapshot with `employees` and `tasks` (.json or .toml)
    input: PathBuf,

    /// Config file (TOML); missing file means defaults
    #[arg(short, long, default_value = "u-assign.toml")]
    config: PathBuf,

    /// Reject invalid input (duplicate names, reversed dates, cycles, ...)
    #[arg(short, long)]
    strict: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Separator between predecessor names
    #[arg(short, long)]
    delimiter: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load(&cli.config)?;
    if cli.strict {
        config.strict = true;
    }
    if let Some(format) = cli.format {
        config.output = format;
    }
    if let Some(delimiter) = cli.delimiter {
        config.predecessor_delimiter = delimiter;
    }

    let project = Project::load(&cli.input)?;
    let employees = project.employees();
    let tasks = project.tasks(&config.predecessor_delimiter)?;

    let result = GreedyAssigner::new()
        .with_validation(config.strict)
        .try_assign(&employees, &tasks)?;

    match config.output {
        OutputFormat::Table => print!("{}", render_table(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    Ok(())
}
