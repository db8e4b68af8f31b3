//! Shiftlog CLI - shift-report extraction and ledger maintenance.
//!
//! Two subcommands: `extract` prints the rows recovered from one or more
//! report documents; `merge` folds those rows into a running master
//! ledger with deduplication.

mod batch;
mod config;

use anyhow::{Context, Result};
use chrono::{Datelike, SecondsFormat, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use config::Config;
use indicatif::{ProgressBar, ProgressStyle};
use shiftlog_core::LedgerRecord;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "shiftlog",
    version,
    about = "Extract equipment-code/work-item rows from shift reports and maintain a master ledger"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress and summary output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract rows from shift reports and print or save them
    #[command(long_about = "Extract rows from DOCX shift reports.\n\
                      \n\
                      Each row is one (equipment code, work item) pair annotated with the\n\
                      report's work date and signatories. Zero rows from a document is a\n\
                      warning, not an error; a document naming an impossible date is\n\
                      skipped with an error and the rest of the batch continues.\n\
                      \n\
                      Defaults can be set via .shiftlog.toml configuration file.")]
    Extract {
        /// Input shift-report files (.docx)
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Output format (default: from config, or inferred from the
        /// output extension, or csv)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Assumed year for reports without an explicit year
        /// (default: from config, or the current UTC year)
        #[arg(short = 'y', long, value_name = "YEAR")]
        year: Option<i32>,
    },

    /// Merge shift-report rows into a master ledger (append + dedup)
    #[command(long_about = "Merge DOCX shift reports into a master ledger.\n\
                      \n\
                      The existing ledger (if any) is read first; new rows are appended,\n\
                      duplicates on (full code, work date) keep the first occurrence, and\n\
                      the result is sorted by (work date, full code).\n\
                      \n\
                      Defaults can be set via .shiftlog.toml configuration file.")]
    Merge {
        /// Input shift-report files (.docx)
        #[arg(value_name = "INPUTS", required = true)]
        inputs: Vec<PathBuf>,

        /// Existing master ledger to merge into (missing file: start empty)
        #[arg(short, long, value_name = "MASTER")]
        master: Option<PathBuf>,

        /// Output file for the updated ledger
        #[arg(short, long, value_name = "OUTPUT")]
        output: PathBuf,

        /// Ledger format (default: from config, or inferred from the
        /// output extension, or csv)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Assumed year for reports without an explicit year
        /// (default: from config, or the current UTC year)
        #[arg(short = 'y', long, value_name = "YEAR")]
        year: Option<i32>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::discover();

    match cli.command {
        Commands::Extract {
            inputs,
            output,
            format,
            year,
        } => run_extract(&inputs, output.as_deref(), format, year, &config, cli.quiet),
        Commands::Merge {
            inputs,
            master,
            output,
            format,
            year,
        } => run_merge(
            &inputs,
            master.as_deref(),
            &output,
            format,
            year,
            &config,
            cli.quiet,
        ),
    }
}

fn run_extract(
    inputs: &[PathBuf],
    output: Option<&Path>,
    format: Option<OutputFormat>,
    year: Option<i32>,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let assumed_year = resolve_year(year, config);
    let format = resolve_format(format, config, output);

    let records = collect_records(inputs, assumed_year, quiet)?;

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            write_records(file, &records, format)?;
            if !quiet {
                eprintln!(
                    "{} Wrote {} row(s) to {}",
                    "Info:".blue().bold(),
                    records.len().to_string().cyan(),
                    path.display()
                );
            }
        }
        None => write_records(io::stdout().lock(), &records, format)?,
    }

    Ok(())
}

fn run_merge(
    inputs: &[PathBuf],
    master: Option<&Path>,
    output: &Path,
    format: Option<OutputFormat>,
    year: Option<i32>,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let assumed_year = resolve_year(year, config);
    let format = resolve_format(format, config, Some(output));

    let existing = match master {
        Some(path) if path.exists() => read_ledger(path)?,
        Some(path) => {
            if !quiet {
                eprintln!(
                    "{} Master ledger {} not found, starting empty",
                    "Info:".blue().bold(),
                    path.display()
                );
            }
            Vec::new()
        }
        None => Vec::new(),
    };

    let new_records = collect_records(inputs, assumed_year, quiet)?;
    if new_records.is_empty() {
        eprintln!(
            "{} no rows could be extracted from the selected files, ledger untouched",
            "Warning:".yellow().bold()
        );
        return Ok(());
    }

    let before = existing.len();
    let merged = shiftlog_ledger::merge(existing, new_records);
    let after = merged.len();

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    write_records(file, &merged, format)?;

    if !quiet {
        // A pre-existing ledger with internal duplicates can shrink, so
        // the net change is signed.
        let net = after as i64 - before as i64;
        eprintln!(
            "{} Ledger updated. Rows before: {} | after: {} | net added: {}",
            "Done:".green().bold(),
            before.to_string().cyan(),
            after.to_string().cyan(),
            net.to_string().cyan()
        );
    }

    Ok(())
}

/// Process every input document and build ledger records, isolating
/// per-document failures as warnings on stderr.
fn collect_records(inputs: &[PathBuf], assumed_year: i32, quiet: bool) -> Result<Vec<LedgerRecord>> {
    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(inputs.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .expect("template is compile-time constant")
                .progress_chars("█▓▒░  "),
        );
        pb
    };

    let outcomes = batch::process_files(inputs, assumed_year, &progress);
    progress.finish_and_clear();

    let ingested_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut records = Vec::new();

    for outcome in &outcomes {
        let name = outcome.display_name();
        match &outcome.result {
            Ok(report) if report.is_empty() => {
                eprintln!(
                    "{} {name}: no equipment-code rows found",
                    "Warning:".yellow().bold()
                );
            }
            Ok(report) => {
                records.extend(shiftlog_ledger::build_records(
                    &report.rows,
                    &report.metadata,
                    Some(&name),
                    Some(&ingested_at),
                ));
            }
            Err(e) => {
                eprintln!("{} {name}: {e}", "Error:".red().bold());
            }
        }
    }

    Ok(records)
}

fn resolve_year(cli: Option<i32>, config: &Config) -> i32 {
    cli.or(config.assumed_year)
        .unwrap_or_else(|| Utc::now().year())
}

/// Resolve the output format: CLI flag > config > output extension > csv.
fn resolve_format(
    cli: Option<OutputFormat>,
    config: &Config,
    output: Option<&Path>,
) -> OutputFormat {
    if let Some(format) = cli {
        return format;
    }

    if let Some(name) = config.format.as_deref() {
        match name.to_lowercase().as_str() {
            "csv" => return OutputFormat::Csv,
            "json" => return OutputFormat::Json,
            other => log::warn!("unknown format {other:?} in config, ignoring"),
        }
    }

    match output.and_then(|p| p.extension()).and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Csv,
    }
}

fn read_ledger(path: &Path) -> Result<Vec<LedgerRecord>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open ledger: {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let records = if is_json {
        shiftlog_ledger::read_json(file)
    } else {
        shiftlog_ledger::read_csv(file)
    }
    .with_context(|| format!("Failed to read ledger: {}", path.display()))?;

    Ok(records)
}

fn write_records<W: Write>(writer: W, records: &[LedgerRecord], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => shiftlog_ledger::write_csv(writer, records)?,
        OutputFormat::Json => shiftlog_ledger::write_json(writer, records)?,
    }
    Ok(())
}
