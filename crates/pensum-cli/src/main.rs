mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pensum",
    version,
    about = "Homework problem analyzer: segments a PDF into problems and writes study notes"
)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a homework document (PDF, text, or pre-segmented JSON)
    Analyze {
        /// Path to a PDF, a text file, or a JSON array of problems
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Write the report to a JSON file
        #[arg(short = 'O', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,

        /// Analyzer settings (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print every solution step, not just the step titles
        #[arg(long)]
        steps: bool,
    },
    /// Split a document into problems without formatting solutions
    Segment {
        /// Path to a PDF or a text file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        output: OutputFormat,

        /// Analyzer settings (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Show how text is classified by the subject and solution rule sets
    Classify {
        /// Text to classify (each argument separately)
        text: Vec<String>,

        /// Classify the contents of a file instead
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Analyzer settings (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Inspect keyword rule sets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
    /// Inspect the theory, template and formula catalogs
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rule sets
    List,
    /// Show a rule set's labels and keywords in priority order
    Explain {
        /// Preset name (e.g., "subjects")
        preset: String,
    },
    /// Print the JSON schema with field descriptions and example
    Schema,
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List subject domains and their theory counts
    List,
    /// Show the theories for one subject domain
    Explain {
        /// Domain key (e.g., "calculus")
        domain: String,
    },
    /// List solution templates
    Templates,
    /// Validate a custom catalog file
    Validate {
        /// Path to JSON catalog file
        file: PathBuf,

        /// Which catalog the file replaces
        #[arg(short, long, value_enum)]
        kind: CatalogKind,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Theories,
    Templates,
    Formulas,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Analyze {
            input_file,
            output,
            out,
            config,
            steps,
        } => commands::analyze::run(&input_file, output, out, config.as_deref(), steps),
        Commands::Segment {
            input_file,
            output,
            config,
        } => commands::segment::run(&input_file, output, config.as_deref()),
        Commands::Classify { text, file, config } => {
            commands::classify::run(text, file, config.as_deref())
        }
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Schema => commands::rules::schema(),
            RulesAction::Validate { file } => commands::rules::validate(&file),
        },
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(),
            CatalogAction::Explain { domain } => commands::catalog::explain(&domain),
            CatalogAction::Templates => commands::catalog::templates(),
            CatalogAction::Validate { file, kind } => commands::catalog::validate(&file, kind),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
