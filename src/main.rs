use anyhow::{bail, Context, Result};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use sales_tally::{process, Catalog};

/// Run configuration, built explicitly from argv. No global lookups.
struct Config {
    input_path: PathBuf,
    catalog_path: PathBuf,
}

impl Config {
    fn from_args() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        if args.len() != 3 {
            bail!(
                "usage: {} <input.txt> <catalog.json|catalog.csv>",
                args.first().map(String::as_str).unwrap_or("sales-tally")
            );
        }
        Ok(Config {
            input_path: PathBuf::from(&args[1]),
            catalog_path: PathBuf::from(&args[2]),
        })
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("ERROR: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let config = Config::from_args()?;

    let catalog = Catalog::from_file(&config.catalog_path)
        .with_context(|| format!("Cannot load product catalog {:?}", config.catalog_path))?;

    let input = fs::read_to_string(&config.input_path)
        .with_context(|| format!("Cannot read input file {:?}", config.input_path))?;

    let receipt = process(&input, &catalog);

    for rejected in &receipt.rejected {
        eprintln!("ERROR: {}", rejected);
    }

    for line in &receipt.lines {
        println!("{}", line);
    }
    println!("{}", receipt.totals_line());

    if receipt.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "Results could not be fully produced: {} invalid line(s) skipped",
            receipt.rejected.len()
        );
        Ok(ExitCode::FAILURE)
    }
}
