use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use gradebook::verbose_eprintln;

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Enter marks (or load --class) and explore them from the menu (default)
    Session,
    /// Print every analysis for a class file without prompting
    Report {
        /// Subject weights in percent, comma separated (e.g. 60,40)
        #[arg(short, long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Print only the ranking, as tab-separated rank, name, total
        #[arg(long)]
        tsv: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gradebook")]
#[command(about = "Student marks analyzer: statistics, rankings and queries", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/gradebook/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Load students, subjects and marks from a YAML class file
    #[arg(long, global = true)]
    class: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    gradebook::diagnostics::set_verbose(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Session);
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match gradebook::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = gradebook::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    verbose_eprintln!(
        "Config: pass mark {}, distinction {} in {:?}, {} decimals",
        config.pass_mark,
        config.distinction.mark,
        config.distinction.subjects,
        config.decimals
    );

    let use_colors = gradebook::output::should_use_colors(config.color);
    let width = gradebook::output::terminal_width();

    let result = match command {
        Commands::Session => run_interactive(cli.class, &config, use_colors, width),
        Commands::Report { weights, tsv } => {
            run_report(cli.class, &config, weights, tsv, use_colors, width)
        }
    };

    if let Err(e) = result {
        eprintln!("Input error: {:#}", e);
        std::process::exit(EXIT_INPUT);
    }

    verbose_eprintln!("Finished in {:?}", start_time.elapsed());
    std::process::exit(EXIT_SUCCESS);
}

fn run_interactive(
    class: Option<PathBuf>,
    config: &gradebook::config::Config,
    use_colors: bool,
    width: Option<usize>,
) -> Result<()> {
    let mut console = gradebook::input::Console::stdio();

    let book = match class {
        Some(path) => {
            verbose_eprintln!("Loading class from {}", path.display());
            gradebook::input::load_class(&path)?
        }
        None => gradebook::input::collect_gradebook(&mut console)?,
    };

    let report = gradebook::report::Report::new(&book, config, use_colors, width);
    gradebook::session::run_session(&mut console, &report, config)
}

fn run_report(
    class: Option<PathBuf>,
    config: &gradebook::config::Config,
    weights: Option<Vec<f64>>,
    tsv: bool,
    use_colors: bool,
    width: Option<usize>,
) -> Result<()> {
    let path = class.context("The report command needs --class <FILE>")?;
    let book = gradebook::input::load_class(&path)?;
    verbose_eprintln!(
        "Loaded {} students x {} subjects from {}",
        book.students().len(),
        book.subjects().len(),
        path.display()
    );

    if tsv {
        let report = gradebook::report::Report::new(&book, config, false, None);
        println!("{}", report.ranking_tsv());
        return Ok(());
    }

    let report = gradebook::report::Report::new(&book, config, use_colors, width);
    // configured weights apply only when there is one per subject
    let weights = weights.or_else(|| {
        config
            .weights
            .clone()
            .filter(|w| w.len() == book.subjects().len())
    });
    println!("{}", report.full(weights.as_deref())?);
    Ok(())
}
