//! Batch command - summarize many OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use acsum_core::{DocumentSummarizer, Summarizer, SummaryRecord};

use super::load_config;
use super::summarize::{format_record, read_input, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching OCR text files
    #[arg(required = true)]
    input: String,

    /// Output directory (default: next to each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also write a summary CSV with one row per file
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,
}

/// Result of summarizing a single file.
struct FileResult {
    path: PathBuf,
    record: Option<SummaryRecord>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            ext.eq_ignore_ascii_case("txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to summarize",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let summarizer = DocumentSummarizer::from_config(&config);
    let pretty = config.output.pretty && !args.compact;
    let mut results = Vec::with_capacity(files.len());

    for path in files {
        match summarize_file(&path, &summarizer, &args, pretty) {
            Ok(record) => results.push(FileResult {
                path,
                record: Some(record),
                error: None,
            }),
            Err(e) => {
                let error_msg = format!("{:#}", e);
                if args.continue_on_error {
                    warn!("Failed to summarize {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        record: None,
                        error: Some(error_msg),
                    });
                } else {
                    error!("Failed to summarize {}: {}", path.display(), error_msg);
                    pb.abandon();
                    return Err(e);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let succeeded: Vec<&SummaryRecord> = results.iter().filter_map(|r| r.record.as_ref()).collect();
    let imbalanced = succeeded.iter().filter(|r| !r.balance_ok).count();
    let failed: Vec<&FileResult> = results.iter().filter(|r| r.error.is_some()).collect();

    println!();
    println!(
        "{} Summarized {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful ({} imbalanced), {} failed",
        style(succeeded.len()).green(),
        style(imbalanced).yellow(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn summarize_file(
    path: &Path,
    summarizer: &DocumentSummarizer,
    args: &BatchArgs,
    pretty: bool,
) -> anyhow::Result<SummaryRecord> {
    let text = read_input(path)?;
    let record = summarizer.summarize(&text);

    let output_path = output_path_for(path, args.output_dir.as_deref(), args.format);
    fs::write(&output_path, format_record(&record, args.format, pretty)?)?;
    debug!("Wrote output to {}", output_path.display());

    Ok(record)
}

/// `<stem>.<ext>` in the output directory, or beside the input.
fn output_path_for(input: &Path, output_dir: Option<&Path>, format: OutputFormat) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("voucher");
    let file_name = match format {
        // Keep text summaries from overwriting their .txt inputs.
        OutputFormat::Text => format!("{}.summary.txt", stem),
        _ => format!("{}.{}", stem, format.extension()),
    };

    match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    }
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "doc_no",
        "date",
        "company",
        "payee",
        "total",
        "debit_total",
        "credit_total",
        "balance_ok",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        if let Some(record) = &result.record {
            wtr.write_record([
                filename,
                "success",
                &record.doc_no,
                &record.date,
                &record.company,
                &record.payee,
                &record.total,
                &record.debit_total.to_string(),
                &record.credit_total.to_string(),
                if record.balance_ok { "true" } else { "false" },
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                "",
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
