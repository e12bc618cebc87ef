use clap::Parser;
use std::path::PathBuf;

/// Count distinct ICGC mutation ids for each (mutated_from_allele, mutated_to_allele) pair.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mutation table with a header line. `-` reads stdin.
    #[arg(short, long)]
    input: PathBuf,
    /// Field delimiter of the input.
    #[arg(short, long, default_value = "tab", value_parser = mutation_stats::io::parse_delimiter)]
    delimiter: u8,
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
    let counts = mutation_stats::count_unique_icgc_mutations(&table)?;
    let stdout = std::io::stdout();
    mutation_stats::io::write_records(stdout.lock(), &counts)
}
