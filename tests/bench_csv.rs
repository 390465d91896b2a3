use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use cnfdecide::bench::{BenchConfig, BenchRow, Case, RunStatus, run_case, run_suite};
use cnfdecide::instances::catalog;
use cnfdecide::oracle::Oracle;
use cnfdecide::sat::{SolverKind, Verdict};

#[test]
fn benchmark_csv_has_expected_shape() {
    let root = temp_dir("bench_csv_shape");
    fs::create_dir_all(&root).expect("mkdir");
    let csv_path = root.join("results.csv");

    let cases = catalog::hand_crafted()
        .expect("catalog")
        .into_iter()
        .map(|e| Case::new(e.name, e.formula, Some(e.expected)))
        .collect::<Vec<_>>();
    let cfg = BenchConfig {
        solvers: SolverKind::ALL.to_vec(),
        oracle: Some(Oracle::TruthTable),
        timeout: Duration::from_millis(10_000),
    };
    let reports = run_suite(&cases, &cfg, Some(csv_path.as_path())).expect("run suite");
    assert_eq!(reports.len(), 4);
    assert!(reports.iter().all(|r| r.agreed()));

    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    assert_eq!(lines.next().unwrap_or(""), BenchRow::csv_header());
    let data = lines.collect::<Vec<_>>();
    assert_eq!(data.len(), 12);

    for line in &data {
        let cols = line.split(',').collect::<Vec<_>>();
        assert_eq!(cols.len(), 14);
        assert!(["resolution", "dp", "dpll"].contains(&cols[1]));
        assert_eq!(cols[2], "ok");
        assert!(cols[3] == "SAT" || cols[3] == "UNSAT");
        cols[4].parse::<u128>().expect("wall_us");
    }

    let _ = fs::remove_dir_all(&root);
}

#[test]
fn case_report_flags_wrong_expectation() {
    let example = catalog::hand_crafted()
        .expect("catalog")
        .into_iter()
        .next()
        .expect("first example");
    let case = Case::new("mislabelled", example.formula, Some(Verdict::Unsat));
    let report = run_case(&case, &BenchConfig::default());
    assert!(!report.agreed());
    assert_eq!(report.verdicts().len(), 3);
    assert!(report.verdicts().values().all(|&v| v == Verdict::Sat));
}

#[test]
fn summary_line_names_solver_and_verdict() {
    let example = catalog::hand_crafted()
        .expect("catalog")
        .into_iter()
        .nth(1)
        .expect("second example");
    let case = Case::new(example.name, example.formula, Some(example.expected));
    let report = run_case(&case, &BenchConfig::default());
    let row = &report.rows[0];
    assert_eq!(row.status, RunStatus::Ok);
    let line = row.summary_line();
    assert!(line.contains("resolution"));
    assert!(line.contains("-> UNSAT in "));
}

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("cnfdecide_{}_{}", name, std::process::id()))
}
