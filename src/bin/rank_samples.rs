use clap::Parser;
use std::path::PathBuf;

/// Rank samples by their number of distinct ICGC mutation ids, ties broken by sample id.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mutation table with a header line. `-` reads stdin.
    #[arg(short, long)]
    input: PathBuf,
    /// Field delimiter of the input.
    #[arg(short, long, default_value = "tab", value_parser = mutation_stats::io::parse_delimiter)]
    delimiter: u8,
    /// Only print the first N samples.
    #[arg(short, long)]
    top: Option<usize>,
    /// Increase logging verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> std::process::ExitCode {
    let args = Args::parse();
    mutation_stats::logging::init_logging(args.verbose);
    match run(&args) {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            std::process::ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> mutation_stats::Result<()> {
    let table = mutation_stats::io::open_table(&args.input, args.delimiter)?;
    let mut ranked = mutation_stats::get_sorted_mutation_count(&table)?;
    if let Some(top) = args.top {
        ranked.truncate(top);
    }
    let stdout = std::io::stdout();
    mutation_stats::io::write_records(stdout.lock(), &ranked)
}
