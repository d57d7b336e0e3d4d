//! CLI entry point for the grade recorder.
//!
//! Provides subcommands for submitting a student's scores to the results
//! log, exporting a row to an externally chosen CSV file, and summarizing
//! a results file.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use grade_recorder::{
    output::{append_comma_record, append_tab_record, print_json, print_pretty},
    parser::{lenient_scores, parse_entries},
    record::build_record,
    report::summarize,
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "grade_recorder")]
#[command(about = "A tool to record student grades", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a student's scores in the results log and show the grade
    Submit {
        /// Raw score entries, one per attempt; pass "" for a skipped attempt
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        scores: Vec<String>,

        /// Student name as it should appear in the results log
        #[arg(short, long, default_value = "")]
        name: String,

        /// Results log to append to
        #[arg(short, long, default_value = "grades.txt")]
        log: String,

        /// Also print the full record as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Append the row to an externally chosen CSV file
    Export {
        /// Raw score entries, one per attempt; unreadable entries become 0
        #[arg(value_name = "SCORE", allow_negative_numbers = true)]
        scores: Vec<String>,

        /// Student name for the exported row
        #[arg(short, long, default_value = "")]
        name: String,

        /// CSV file to append to (must end in .csv)
        #[arg(short, long)]
        output: String,
    },
    /// Summarize a results file
    Summary {
        /// Results file to read
        #[arg(value_name = "FILE", default_value = "grades.txt")]
        file: String,

        /// Treat the file as comma-delimited instead of tab-delimited
        #[arg(long, default_value_t = false)]
        comma: bool,

        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/grade_recorder.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("grade_recorder.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse().unwrap()));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse().unwrap()));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Submit {
            scores,
            name,
            log,
            json,
        } => {
            let parsed = parse_entries(&scores)?;
            let record = build_record(&name, parsed);
            print_pretty(&record);

            append_tab_record(&log, &record)?;
            info!(
                student = %record.name,
                final_score = record.final_score,
                grade = %record.grade,
                "Submission recorded"
            );

            println!("{}", record.message());
            if json {
                print_json(&record)?;
            }
        }
        Commands::Export {
            scores,
            name,
            output,
        } => {
            let is_csv = Path::new(&output)
                .extension()
                .and_then(OsStr::to_str)
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if !is_csv {
                bail!("export target {output} is not a .csv file");
            }

            let record = build_record(&name, lenient_scores(&scores));
            append_comma_record(&output, &record)?;
            info!(student = %record.name, path = %output, "Row exported");
        }
        Commands::Summary { file, comma, json } => {
            let delimiter = if comma { b',' } else { b'\t' };
            let summary = summarize(&file, delimiter)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{summary}");
            }
        }
    }

    Ok(())
}
