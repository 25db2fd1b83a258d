use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const VOUCHER: &str = "บริษัท ไทยออยล์ จำกัด (มหาชน)
Pay to  Siam Instrument Co., Ltd.
Document No.  PV6701-0042
Date Printed: 15/01/2024
| 1 | 2154001 | Freight | Instrumentation job | 1,234.56 |
| 2 | 2111002 | Tax | | 1,234.56 |
TOTALS  1,234.56
";

fn acsum(config_home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("acsum").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home).env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn summarize_file_prints_json() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("voucher.txt");
    fs::write(&input, VOUCHER).unwrap();

    let output = acsum(dir.path())
        .arg("summarize")
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["company"], "ไทยออยล์");
    assert_eq!(json["doc_no"], "PV6701-0042");
    assert_eq!(json["total"], "1,234.56");
    assert_eq!(json["debit_total"], 1234.56);
    assert_eq!(json["credit_total"], 1234.56);
    assert_eq!(json["balance_ok"], true);
    assert_eq!(json["entries"].as_array().unwrap().len(), 2);
    assert_eq!(json["insights"][0], "✅ บัญชีสมดุล เดบิตและเครดิตตรงกัน");
}

#[test]
fn summarize_reads_stdin() {
    let dir = TempDir::new().unwrap();

    let output = acsum(dir.path())
        .args(["summarize", "-"])
        .write_stdin("TOTALS 5,000.00 ADV")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["company"], "ไม่พบ");
    assert_eq!(json["total"], "5,000.00");
    assert_eq!(json["balance_ok"], true);
    assert_eq!(
        json["insights"][1],
        "📌 รายการเกี่ยวกับการคืนเงินค่าใช้จ่ายส่วนเกิน (Advance)"
    );
}

#[test]
fn summarize_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("voucher.txt");
    fs::write(&input, VOUCHER).unwrap();

    let first = acsum(dir.path()).arg("summarize").arg(&input).output().unwrap();
    let second = acsum(dir.path()).arg("summarize").arg(&input).output().unwrap();

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_input_path_reports_error_json() {
    let dir = TempDir::new().unwrap();

    acsum(dir.path())
        .arg("summarize")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            r#"{"error":"กรุณาระบุ path ของไฟล์ข้อความ OCR"}"#,
        ));
}

#[test]
fn unreadable_input_reports_error_json() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");

    let output = acsum(dir.path())
        .arg("summarize")
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json = stdout_json(&output);
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("เกิดข้อผิดพลาด: "));
    assert_eq!(json.as_object().unwrap().len(), 1);
}

#[test]
fn summarize_writes_csv_to_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("voucher.txt");
    let output = dir.path().join("entries.csv");
    fs::write(&input, VOUCHER).unwrap();

    acsum(dir.path())
        .arg("summarize")
        .arg(&input)
        .args(["--format", "csv", "--output"])
        .arg(&output)
        .assert()
        .success();

    let csv = fs::read_to_string(&output).unwrap();
    assert!(csv.starts_with("line,account_code,description,note,amount\n"));
    assert!(csv.contains("2,2111002,Tax,,1234.56"));
}

#[test]
fn batch_writes_one_summary_per_file() {
    let dir = TempDir::new().unwrap();
    let scans = dir.path().join("scans");
    let out = dir.path().join("out");
    fs::create_dir_all(&scans).unwrap();
    fs::write(scans.join("a.txt"), VOUCHER).unwrap();
    fs::write(scans.join("b.txt"), "| 1 | 2154001 | Freight | | 10.00 |").unwrap();

    acsum(dir.path())
        .arg("batch")
        .arg(format!("{}/*.txt", scans.display()))
        .arg("--output-dir")
        .arg(&out)
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful (1 imbalanced), 0 failed"));

    let a: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("a.json")).unwrap()).unwrap();
    assert_eq!(a["balance_ok"], true);

    let b: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("b.json")).unwrap()).unwrap();
    assert_eq!(b["balance_ok"], false);

    let summary = fs::read_to_string(out.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3);
}

#[test]
fn config_init_then_get() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("acsum.json");

    acsum(dir.path())
        .args(["config", "init", "--output"])
        .arg(&config)
        .assert()
        .success();

    acsum(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["config", "get", "ledger.debit_prefix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"2154\""));
}

#[test]
fn custom_sentinel_from_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("acsum.json");
    fs::write(&config, r#"{"extraction": {"not_found": "N/A"}, "output": {"pretty": false}}"#)
        .unwrap();

    acsum(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["summarize", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(r#"{"company":"N/A","payee":"N/A""#));
}

#[test]
fn missing_input_wins_over_broken_default_config() {
    let dir = TempDir::new().unwrap();
    let default_dir = dir.path().join("acsum");
    fs::create_dir_all(&default_dir).unwrap();
    fs::write(default_dir.join("config.json"), "{ not json").unwrap();

    acsum(dir.path())
        .arg("summarize")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            r#"{"error":"กรุณาระบุ path ของไฟล์ข้อความ OCR"}"#,
        ));
}

#[test]
fn config_init_rejects_prefix_outside_group() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("acsum.json");

    acsum(dir.path())
        .args(["config", "init", "--debit-prefix", "3154", "--output"])
        .arg(&config)
        .assert()
        .failure();

    assert!(!config.exists());
}

#[test]
fn config_init_with_overrides_then_check() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("acsum.json");

    acsum(dir.path())
        .args(["config", "init", "--credit-prefix", "2112", "--output"])
        .arg(&config)
        .assert()
        .success();

    acsum(dir.path())
        .args(["config", "check"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("credit: 2112*"));

    fs::write(&config, r#"{"ledger": {"credit_prefix": "2154"}}"#).unwrap();
    acsum(dir.path())
        .args(["config", "check"])
        .arg(&config)
        .assert()
        .failure();
}

#[test]
fn summarize_text_uses_thai_labels() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("voucher.txt");
    fs::write(&input, VOUCHER).unwrap();

    acsum(dir.path())
        .arg("summarize")
        .arg(&input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- บริษัท: ไทยออยล์"))
        .stdout(predicate::str::contains("- รวมเดบิต: 1,234.56 บาท"))
        .stdout(predicate::str::contains("🔍 วิเคราะห์:"));
}
