use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shelfsort::AppError;

#[derive(Parser)]
#[command(name = "shelfsort")]
#[command(version)]
#[command(
    about = "Sort product catalogs and print tabular reports",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog and print one sorted report per criterion
    #[clap(visible_alias = "r")]
    Report {
        /// Path to the product catalog (defaults to products.json)
        file: Option<PathBuf>,
        /// Criterion to report on; repeat to select several, in order
        /// (defaults to Price, Date, Conversion)
        #[arg(long = "by", value_name = "NAME")]
        by: Vec<String>,
    },
    /// List the registered sorting strategies
    #[clap(visible_alias = "s")]
    Strategies,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Some(Commands::Report { file, by }) => shelfsort::report(file.as_deref(), &by),
        Some(Commands::Strategies) => shelfsort::list_strategies(),
        None => shelfsort::report(None, &[]),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
