use std::{
    error::Error,
    fs::File,
    io::{self, BufReader, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use settle_up::{SettlementPlan, format_currency, parse_participants_csv};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    /// One sentence per payment.
    Text,
    /// The settlement plan as JSON.
    Json,
}

/// Work out who should pay whom to split a group expense evenly.
///
/// Reads CSV with the header `name,spent` and one row per participant.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The CSV file to read participants from (default: stdin).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// How to print the settlement plan.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let result = open_input(args.input.as_deref()).and_then(|reader| {
        let mut stdout = io::stdout().lock();
        run(reader, &mut stdout, args.format)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn Read>, Box<dyn Error>> {
    match path {
        Some(path) => Ok(Box::new(File::open(path)?)),
        None => Ok(Box::new(io::stdin())),
    }
}

/// Read participants as CSV from `reader` and write their settlement plan to `writer`.
fn run(
    reader: impl Read,
    writer: &mut impl Write,
    format: OutputFormat,
) -> Result<(), Box<dyn Error>> {
    let participants = parse_participants_csv(BufReader::new(reader))?;
    let plan = SettlementPlan::new(&participants)?;

    match format {
        OutputFormat::Text => write_text(writer, &plan, participants.len())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &plan)?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}

fn write_text(
    writer: &mut impl Write,
    plan: &SettlementPlan,
    participant_count: usize,
) -> io::Result<()> {
    writeln!(writer, "Total: {}", format_currency(plan.total_amount))?;
    writeln!(
        writer,
        "Fair share: {} each ({participant_count} participants)",
        format_currency(plan.fair_share)
    )?;
    writeln!(writer)?;

    if plan.settlements.is_empty() {
        writeln!(writer, "Everyone is settled up.")?;
    }

    for settlement in &plan.settlements {
        writeln!(writer, "{settlement}")?;
    }

    Ok(())
}
