use bridge_cli::logging::init_logging;
use bridge_core::{score_for_contract, Contract, Position, Vulnerability};
use clap::Parser;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about = "Duplicate score for a played contract (NS-signed)", long_about = None)]
struct Args {
    /// The contract, e.g. 4S, 3NX, 6HXX
    contract: String,

    /// Vulnerability (None, NS, EW, Both)
    #[arg(long, default_value = "None")]
    vulnerability: String,

    /// Declarer (N, E, S, W)
    #[arg(short, long)]
    declarer: String,

    /// Tricks taken by declarer
    #[arg(short, long)]
    tricks: u8,

    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), String> {
    let contract: Contract = args.contract.parse().map_err(|e| format!("{}", e))?;
    let vulnerability: Vulnerability = args.vulnerability.parse().map_err(|e| format!("{}", e))?;
    let declarer: Position = args.declarer.parse().map_err(|e| format!("{}", e))?;

    let score = score_for_contract(&contract, vulnerability, declarer, args.tricks)
        .map_err(|e| format!("{}", e))?;
    tracing::debug!(%contract, %vulnerability, %declarer, tricks = args.tricks, score, "scored");
    println!("{}", score);
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
