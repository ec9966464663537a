use bridge_cli::logging::init_logging;
use bridge_cli::par_utils::*;
use bridge_core::{Position, Vulnerability};
use bridge_par::{par_with_trace, DoubleDummyTable};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Par score and contracts from a double-dummy table", long_about = None)]
struct Args {
    /// Double-dummy table file (.json, .yaml or .yml)
    table_file: Option<PathBuf>,

    /// The table as inline JSON: '{"N": {"S": 10, "H": 8, ...}, ...}'
    #[arg(long, conflicts_with = "table_file")]
    table: Option<String>,

    /// Dealer (N, E, S, W); derived from --board when omitted
    #[arg(short, long)]
    dealer: Option<String>,

    /// Vulnerability (None, NS, EW, Both); derived from --board when omitted
    #[arg(long)]
    vulnerability: Option<String>,

    /// Board number, giving dealer and vulnerability by the usual rotation
    #[arg(short, long)]
    board: Option<u32>,

    /// File with a list of boards, each with a table and board/dealer/vulnerability
    #[arg(long, conflicts_with_all = ["table_file", "table"])]
    batch: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text", env = "BRIDGE_PAR_FORMAT")]
    format: Format,

    /// Show the simulated auction rung by rung
    #[arg(long)]
    trace: bool,

    /// Log the auction at debug level to stderr
    #[arg(short, long)]
    verbose: bool,
}

struct Job {
    board: Option<u32>,
    dealer: Position,
    vulnerability: Vulnerability,
    table: DoubleDummyTable,
}

fn resolve_jobs(args: &Args) -> Result<Vec<Job>, String> {
    if let Some(path) = &args.batch {
        return load_batch(path)?
            .into_iter()
            .map(|input| {
                let (dealer, vulnerability) = input.deal()?;
                Ok(Job {
                    board: input.board,
                    dealer,
                    vulnerability,
                    table: input.table,
                })
            })
            .collect();
    }

    let table = if let Some(json) = &args.table {
        parse_table_json(json)?
    } else if let Some(path) = &args.table_file {
        load_table(path)?
    } else {
        return Err("Must provide a table file, --table or --batch.".to_string());
    };
    let (dealer, vulnerability) = resolve_deal(
        args.board,
        args.dealer.as_deref(),
        args.vulnerability.as_deref(),
    )?;
    Ok(vec![Job {
        board: args.board,
        dealer,
        vulnerability,
        table,
    }])
}

fn run(args: &Args) -> Result<(), String> {
    let jobs = resolve_jobs(args)?;

    let mut outputs = Vec::new();
    for job in &jobs {
        let (result, trace) = par_with_trace(&job.table, job.vulnerability, job.dealer);
        match args.format {
            Format::Text => {
                if jobs.len() > 1 || job.board.is_some() {
                    println!(
                        "{}",
                        format_board_header(job.board, job.dealer, job.vulnerability)
                    );
                }
                if args.trace {
                    print!("{}", job.table);
                    print!("{}", format_trace(&trace));
                }
                println!("{}", result);
            }
            Format::Json => outputs.push((job, result, trace)),
        }
    }

    if args.format == Format::Json {
        let rendered: Vec<BoardOutput> = outputs
            .iter()
            .map(|(job, result, trace)| BoardOutput {
                board: job.board,
                dealer: job.dealer,
                vulnerability: job.vulnerability,
                score: result.score,
                par: result.par_string(),
                result,
                trace: args.trace.then_some(trace),
            })
            .collect();
        let json = if args.batch.is_some() {
            serde_json::to_string_pretty(&rendered)
        } else {
            serde_json::to_string_pretty(&rendered[0])
        }
        .map_err(|e| e.to_string())?;
        println!("{}", json);
    }
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
