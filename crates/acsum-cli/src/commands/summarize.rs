//! Summarize command - extract a summary from a single OCR text file.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::Args;
use console::style;
use tracing::{debug, info};

use acsum_core::{DocumentSummarizer, Summarizer, SummaryRecord};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{load_config, MissingInput};

/// Arguments for the summarize command.
#[derive(Args)]
pub struct SummarizeArgs {
    /// OCR text file ("-" reads stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Write JSON on a single line
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON summary
    Json,
    /// CSV of table rows
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn run(args: SummarizeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let input = args.input.as_deref().ok_or(MissingInput)?;
    let config = load_config(config_path)?;

    info!("Summarizing {}", input.display());
    let text = read_input(input)?;

    let summarizer = DocumentSummarizer::from_config(&config);
    let record = summarizer.summarize(&text);

    let pretty = config.output.pretty && !args.compact;
    let output = format_record(&record, args.format, pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)
            .with_context(|| format!("cannot write {}", output_path.display()))?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read UTF-8 text from a file, or from stdin when the path is "-".
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("cannot read stdin")?;
        return Ok(text);
    }

    fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

/// Render a summary in the requested format.
pub fn format_record(
    record: &SummaryRecord,
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(record.to_json(pretty)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &SummaryRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["line", "account_code", "description", "note", "amount"])?;

    for entry in &record.entries {
        wtr.write_record([
            &entry.line,
            &entry.account_code,
            &entry.description,
            &entry.note,
            &entry.amount.to_string(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &SummaryRecord) -> String {
    let balance = if record.balance_ok {
        "✅ สมดุล"
    } else {
        "❌ ไม่สมดุล"
    };

    let mut output = String::from("📊 สรุปบัญชีอัจฉริยะ:\n");
    output.push_str(&format!("- บริษัท: {}\n", record.company));
    output.push_str(&format!("- ผู้รับเงิน: {}\n", record.payee));
    output.push_str(&format!("- วันที่: {}\n", record.date));
    output.push_str(&format!("- เอกสาร: {}\n", record.doc_no));
    output.push_str(&format!("- รวมเดบิต: {} บาท\n", group_thousands(record.debit_total)));
    output.push_str(&format!("- รวมเครดิต: {} บาท\n", group_thousands(record.credit_total)));
    output.push_str(&format!("- สมดุล: {}\n", balance));

    output.push_str("\n🔍 วิเคราะห์:\n");
    for insight in &record.insights {
        output.push_str(&format!("- {}\n", insight));
    }

    output
}

/// Comma-group the integer part, keeping at most three fraction digits
/// without trailing zeros ("1234.50" -> "1,234.5").
fn group_thousands(amount: Decimal) -> String {
    let plain = amount
        .round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, fraction) = match unsigned.split_once('.') {
        Some((int_part, fraction)) => (int_part, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{}{}.{}", sign, grouped, fraction),
        None => format!("{}{}", sign, grouped),
    }
}
