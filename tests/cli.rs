//! End-to-end tests for the costsplit binary
//!
//! Each test points `COSTSPLIT_DATA_DIR` at a fresh temp directory and seeds
//! it with a small reference file and distribution source, so nothing touches
//! the real user configuration.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn costsplit(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("costsplit").unwrap();
    cmd.env("COSTSPLIT_DATA_DIR", data_dir);
    cmd
}

fn seed(dir: &TempDir) {
    fs::write(
        dir.path().join("reference.yaml"),
        "projects:\n  - Alpha\n  - Beta\n",
    )
    .unwrap();

    fs::create_dir_all(dir.path().join("data")).unwrap();
    fs::write(
        dir.path().join("data").join("distribution.csv"),
        "Monthly Expense Distribution,,,\n\
         Month,Total,Alpha,Beta\n\
         June 2025,2000,1200,600\n\
         July 2025,3000,1500,900\n",
    )
    .unwrap();
}

#[test]
fn distribute_rescales_baseline_proportionally() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["distribute", "June 2025", "--total", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected month's total value: ₹1000.00"))
        .stdout(predicate::str::contains("₹600.00")) // Alpha: 1200 * 0.5
        .stdout(predicate::str::contains("₹300.00")) // Beta: 600 * 0.5
        .stdout(predicate::str::contains("LSGB (Balance)"))
        .stdout(predicate::str::contains("₹100.00")); // residual: 200 * 0.5
}

#[test]
fn distribute_defaults_to_recorded_total() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["distribute", "July 2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selected month's total value: ₹3000.00"))
        .stdout(predicate::str::contains("₹1500.00"));
}

#[test]
fn distribute_unknown_month_reports_unavailable() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["distribute", "March 2026", "--total", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cannot calculate distribution"));
}

#[test]
fn distribute_canonicalizes_date_period() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    // 2025-06-15 falls in June 2025
    costsplit(dir.path())
        .args(["distribute", "2025-06-15", "--total", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹1200.00"));
}

#[test]
fn allocate_reports_balance_and_over_allocation() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["allocate", "1000", "--amount", "Alpha=700"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹700.00"))
        .stdout(predicate::str::contains("₹300.00"));

    costsplit(dir.path())
        .args(["allocate", "1000", "--amount", "Alpha=1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("₹200.00"));
}

#[test]
fn allocate_rejects_unknown_project() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["allocate", "1000", "--amount", "Gamma=100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown project"));
}

#[test]
fn calc_breaks_down_project_value() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["calc", "100000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Core Team Salary (5%)"))
        .stdout(predicate::str::contains("₹5000.00"))
        .stdout(predicate::str::contains("Total (15%)"))
        .stdout(predicate::str::contains("₹15000.00"))
        .stdout(predicate::str::contains("Project Direct Expenses (85%)"))
        .stdout(predicate::str::contains("₹85000.00"));
}

#[test]
fn calc_save_appends_to_project_ledger() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["calc", "50000", "--name", "My City", "--type", "CSR", "--save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to"));

    let ledger = fs::read_to_string(dir.path().join("data").join("project_expenses.csv")).unwrap();
    assert!(ledger.contains("My City"));
    assert!(ledger.contains("42500.00"));
}

#[test]
fn salary_prorates_by_attendance() {
    let dir = TempDir::new().unwrap();

    costsplit(dir.path())
        .args(["salary", "30000", "--attendance", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹15000.00"));

    costsplit(dir.path())
        .args(["salary", "30000", "--attendance", "40"])
        .assert()
        .failure();
}

#[test]
fn record_hr_appends_entry() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "hr",
            "--vendor", "BSNL",
            "--service", "Land Line",
            "--frequency", "Monthly",
            "--annual", "12000",
            "--monthly", "1000",
            "--actual", "950",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded HR expense for BSNL"));

    let ledger = fs::read_to_string(dir.path().join("data").join("hr_expenses.csv")).unwrap();
    assert!(ledger.contains("BSNL"));
    assert!(ledger.contains("LSGB (Balance)"));
}

#[test]
fn record_hr_rejects_blank_vendor() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "hr",
            "--vendor", "  ",
            "--service", "Land Line",
            "--frequency", "Monthly",
            "--actual", "950",
        ])
        .assert()
        .failure();

    assert!(!dir.path().join("data").join("hr_expenses.csv").exists());
}

#[test]
fn record_csr_persists_allocation() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "csr",
            "--period", "June 2025",
            "--vendor", "Asianet",
            "--type", "Internet Services",
            "--frequency", "Monthly",
            "--annual", "24000",
            "--monthly", "2000",
            "--actual", "1900",
            "--amount", "Alpha=600",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded CSR expense for Asianet"));

    let ledger = fs::read_to_string(dir.path().join("data").join("csr_admin_expenses.csv")).unwrap();
    assert!(ledger.contains("June 2025"));
    assert!(ledger.contains("1400.00")); // balance: 2000 - 600
}

#[test]
fn record_csr_rejects_free_form_vendor() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "csr",
            "--period", "June 2025",
            "--vendor", "Some Vendor",
            "--type", "Internet Services",
            "--frequency", "Monthly",
            "--monthly", "2000",
            "--actual", "1900",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not one of the configured options"));

    assert!(!dir.path().join("data").join("csr_admin_expenses.csv").exists());
}

#[test]
fn record_csr_blocks_over_allocation() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "csr",
            "--period", "June 2025",
            "--vendor", "Asianet",
            "--type", "Internet Services",
            "--frequency", "Monthly",
            "--monthly", "2000",
            "--actual", "1900",
            "--amount", "Alpha=3000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceed"));

    assert!(!dir.path().join("data").join("csr_admin_expenses.csv").exists());
}

#[test]
fn record_intern_appends_entry() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args([
            "record", "intern",
            "--name", "A Student",
            "--qualification", "MSW",
            "--phone", "9999999999",
            "--amount", "5000",
        ])
        .assert()
        .success();

    let ledger =
        fs::read_to_string(dir.path().join("data").join("internship_revenue.csv")).unwrap();
    assert!(ledger.contains("A Student"));
    assert!(ledger.contains("5000.00"));
}

#[test]
fn baseline_list_and_show() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .args(["baseline", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2025"))
        .stdout(predicate::str::contains("July 2025"));

    costsplit(dir.path())
        .args(["baseline", "show", "June 2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹2000.00"))
        .stdout(predicate::str::contains("Alpha"))
        .stdout(predicate::str::contains("Residual"));
}

#[test]
fn baseline_list_missing_source_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("reference.yaml"),
        "projects:\n  - Alpha\n  - Beta\n",
    )
    .unwrap();

    costsplit(dir.path()).args(["baseline", "list"]).assert().failure();
}

#[test]
fn config_shows_paths_and_settings() {
    let dir = TempDir::new().unwrap();
    seed(&dir);

    costsplit(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Month"))
        .stdout(predicate::str::contains("LSGB (Balance)"))
        .stdout(predicate::str::contains("Alpha, Beta"));
}
