use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use puremap_demo::fizzbuzz_prefix;

/// Print the overlaid fizzbuzz pattern, one element per line.
#[derive(Parser)]
struct Args {
    /// How many elements of the infinite pattern to print.
    #[arg(long, default_value_t = 100)]
    count: usize,

    /// Emit a JSON report instead of plain lines.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    count: usize,
    lines: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    tracing::debug!(count = args.count, "rendering pattern prefix");
    let lines = fizzbuzz_prefix(args.count);

    if args.json {
        let report = Report {
            count: lines.len(),
            lines,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in &lines {
            println!("{line}");
        }
    }

    Ok(())
}
