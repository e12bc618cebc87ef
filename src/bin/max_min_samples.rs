use clap::Parser;
use std::path::PathBuf;

/// Report the samples with the most and the fewest distinct ICGC mutation ids.
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

#[derive(serde::Serialize)]
struct Labelled<'a> {
    extremum: &'a str,
    icgc_sample_id: &'a str,
    mutation_count: usize,
}

impl<'a> Labelled<'a> {
    fn new(extremum: &'a str, result: &'a mutation_stats::ExtremumResult) -> Self {
        Self {
            extremum,
            icgc_sample_id: &result.icgc_sample_id,
            mutation_count: result.mutation_count,
        }
    }
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
    let (max, min) = mutation_stats::get_max_and_min_icgc_mutation_count(&table)?;
    let rows = [Labelled::new("max", &max), Labelled::new("min", &min)];
    let stdout = std::io::stdout();
    mutation_stats::io::write_records(stdout.lock(), &rows)
}
