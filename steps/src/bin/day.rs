use std::{io::Write, path::PathBuf};

use calorie_burnt::Biometrics;
use steps::{DayOutcome, DayReport, day_summary};

#[derive(Debug, serde::Serialize)]
pub struct Row {
    line: usize,
    steps: u64,
    distance_km: f64,
    calories: f64,
}

#[derive(Debug, clap::Parser)]
pub struct Args {
    /// Input file with one `<steps>,<duration>` record per line
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("input.txt"), required = false)]
    pub input: PathBuf,
    /// Output csv file. _Note_: will truncate old file if exists
    #[arg(default_value_os_t = std::env::current_dir().unwrap_or_default().join("output.csv"), required = false)]
    pub output: PathBuf,
    /// Weight of person in kilograms
    #[arg(short, long)]
    pub weight: f64,
    /// Height of person in centimeters
    #[arg(long)]
    pub height: f64,
    /// Don't save changes
    #[arg(short, long, default_value_t = false, required = false)]
    pub dry: bool,
    /// Print reports to stdout
    #[arg(short, long, default_value_t = false, required = false)]
    pub print: bool,
    /// Debug logs
    #[arg(short, long, default_value_t = false, required = false)]
    pub verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Args {
        input,
        output,
        weight,
        height,
        dry,
        print,
        verbose,
    } = <Args as clap::Parser>::parse();

    calorie_burnt::logger::init(verbose);

    let data = std::fs::read_to_string(&input)
        .map_err(|e| format!("Failed to read input file. Reason: {e}"))?;

    let biometrics = Biometrics::new(weight, height);

    let mut wrt = match dry {
        true => None,
        false => Some(
            csv::Writer::from_path(&output)
                .map_err(|e| format!("Failed to create output file. Reason: {e}"))?,
        ),
    };

    let mut io = std::io::stdout().lock();

    let mut total = 0;
    let mut empty = 0;

    for (index, record) in data
        .lines()
        .enumerate()
        .filter(|(_, record)| !record.trim().is_empty())
    {
        total += 1;

        // Failed records are already logged by `day_summary`
        let report = match day_summary(record, biometrics) {
            DayOutcome::Report(report) => report,
            DayOutcome::Empty(_) => {
                empty += 1;
                continue;
            }
        };

        if print {
            write!(io, "{report}")?;
        }

        if let Some(wrt) = &mut wrt {
            let DayReport {
                steps,
                distance_km,
                calories,
            } = report;

            wrt.serialize(Row {
                line: index + 1,
                steps,
                distance_km,
                calories,
            })?;
        }
    }

    println!("Total: {total} records | empty: {empty}");

    if let Some(mut wrt) = wrt {
        println!("Saving to {}", output.to_string_lossy());
        wrt.flush()?;
    }

    println!("Done!");

    Ok(())
}
