use regex::Regex;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    rates_path: PathBuf,
    windows_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let rates_path = dir.path().join("rates.csv");
        let windows_path = dir.path().join("windows.csv");

        // Rate store export, hardware left to defaults
        let mut rates = File::create(&rates_path).unwrap();
        writeln!(rates, "key,value,label").unwrap();
        writeln!(rates, "alu_color,410,Aluminum Color (Rs/kg)").unwrap();
        writeln!(rates, "alu_silver,360,Aluminum Silver (Rs/kg)").unwrap();
        writeln!(rates, "glass,45,Glass (Rs/sqft)").unwrap();
        writeln!(rates, "glass_rubber,10,Glass Rubber (Rs/ft)").unwrap();
        writeln!(rates, "mosquito_net,20,Mosquito Net (Rs/sqft)").unwrap();
        writeln!(rates, "labour_min,350,Minimum Labour").unwrap();
        writeln!(rates, "labour_sqft,24,Labour (Rs/sqft)").unwrap();

        let mut windows = File::create(&windows_path).unwrap();
        writeln!(windows, "label,width,height,finish").unwrap();
        writeln!(windows, "Kitchen,1,1,color").unwrap();
        writeln!(windows, "Bedroom,1,1,silver").unwrap();
        writeln!(windows, "Broken,0,1,color").unwrap();

        Self {
            _dir: dir,
            rates_path,
            windows_path,
        }
    }

    fn rates(&self) -> &str {
        self.rates_path.to_str().unwrap()
    }
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_alu-quote"))
        .args(args)
        .output()
        .expect("Failed to execute binary")
}

fn grand_total(stdout: &str) -> f64 {
    let re = Regex::new(r#""grandTotal":\s*(-?[\d.]+)"#).unwrap();
    re.captures(stdout)
        .and_then(|c| c[1].parse().ok())
        .expect("grandTotal in output")
}

#[test]
fn test_cli_quote_json_worked_example() {
    let ctx = TestContext::new();
    let output = run(&["quote", "-W", "1", "-H", "1", "--json", "--rates", ctx.rates()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(grand_total(&stdout), 2023.0);
    assert!(stdout.contains(r#""weight": "2.80""#));
}

#[test]
fn test_cli_quote_exclude_and_items() {
    let ctx = TestContext::new();
    let output = run(&[
        "quote",
        "-W",
        "1",
        "-H",
        "1",
        "--exclude",
        "labour",
        "--item",
        "Discount=-200",
        "--json",
        "-r",
        ctx.rates(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(grand_total(&stdout), 1673.0 - 200.0);
}

#[test]
fn test_cli_quote_table_output() {
    let ctx = TestContext::new();
    let output = run(&["quote", "-W", "1", "-H", "1", "-f", "silver", "-r", ctx.rates()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("U-Channel & Screws"));
    let total_row = Regex::new(r"Grand Total\s*\|\s*1883").unwrap();
    assert!(total_row.is_match(&stdout), "{stdout}");
}

#[test]
fn test_cli_default_flags_change_hardware() {
    let ctx = TestContext::new();
    let output = run(&[
        "quote",
        "-W",
        "1",
        "-H",
        "1",
        "--json",
        "-r",
        ctx.rates(),
        "--default-lock",
        "200",
    ]);
    assert!(output.status.success());
    assert_eq!(grand_total(&String::from_utf8_lossy(&output.stdout)), 2053.0);
}

#[test]
fn test_cli_seed_rates_without_store() {
    let output = run(&["quote", "-W", "1", "-H", "1", "--json"]);
    assert!(output.status.success());
    assert_eq!(grand_total(&String::from_utf8_lossy(&output.stdout)), 2023.0);
    assert!(String::from_utf8_lossy(&output.stderr).contains("seed rates"));
}

#[test]
fn test_cli_rates_marks_defaults() {
    let ctx = TestContext::new();
    let output = run(&["rates", "-r", ctx.rates()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lock_row = Regex::new(r"lock\s*\|[^\n]*\|\s*170\s*\|\s*default").unwrap();
    assert!(lock_row.is_match(&stdout), "{stdout}");
    let glass_row = Regex::new(r"glass\s*\|[^\n]*\|\s*45\s*\|\s*store").unwrap();
    assert!(glass_row.is_match(&stdout), "{stdout}");
}

#[test]
fn test_cli_batch_reports_each_window() {
    let ctx = TestContext::new();
    let output = run(&[
        "batch",
        "--input",
        ctx.windows_path.to_str().unwrap(),
        "-r",
        ctx.rates(),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kitchen"));
    assert!(stdout.contains("Bedroom"));
    assert!(stdout.contains("Invalid dimensions"));
    let total_row = Regex::new(r"TOTAL[^\n]*\|\s*3906\s*\|").unwrap();
    assert!(total_row.is_match(&stdout), "{stdout}");
}

#[test]
fn test_cli_invalid_width_fails() {
    let ctx = TestContext::new();
    let output = run(&["quote", "-W", "0", "-H", "1", "-r", ctx.rates()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid dimensions"));
}

#[test]
fn test_cli_unknown_finish_fails() {
    let ctx = TestContext::new();
    let output = run(&["quote", "-W", "1", "-H", "1", "-f", "bronze", "-r", ctx.rates()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("bronze"));
}

#[test]
fn test_cli_non_finite_item_cost_fails() {
    let ctx = TestContext::new();
    for item in ["Odd=NaN", "Odd=inf"] {
        let output = run(&["quote", "-W", "1", "-H", "1", "--item", item, "-r", ctx.rates()]);
        assert!(!output.status.success(), "accepted {item}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("is not a number"));
    }
}
