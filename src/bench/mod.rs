use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::{info, warn};

use crate::cnf::formula::Formula;
use crate::oracle::Oracle;
use crate::sat::{SolveStats, SolverKind, Verdict};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub solvers: Vec<SolverKind>,
    pub oracle: Option<Oracle>,
    pub timeout: Duration,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            solvers: SolverKind::ALL.to_vec(),
            oracle: None,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub name: String,
    pub formula: Formula,
    pub expected: Option<Verdict>,
}

impl Case {
    pub fn new(name: impl Into<String>, formula: Formula, expected: Option<Verdict>) -> Self {
        Self {
            name: name.into(),
            formula,
            expected,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Ok,
    Timeout,
    InternalError,
}

impl RunStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Ok => "ok",
            RunStatus::Timeout => "timeout",
            RunStatus::InternalError => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchRow {
    pub case: String,
    pub solver: &'static str,
    pub status: RunStatus,
    pub verdict: Option<Verdict>,
    pub wall: Duration,
    pub vars: usize,
    pub clauses: usize,
    pub stats: Option<SolveStats>,
}

impl BenchRow {
    pub fn csv_header() -> &'static str {
        "case,solver,status,verdict,wall_us,vars,clauses,rounds,resolvents,eliminations,decisions,propagations,pure_literals,peak_clauses"
    }

    pub fn to_csv_line(&self) -> String {
        let s = self.stats.as_ref();
        format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{}",
            esc_csv(&self.case),
            self.solver,
            self.status.as_str(),
            self.verdict.map(|v| v.to_string()).unwrap_or_default(),
            self.wall.as_micros(),
            self.vars,
            self.clauses,
            opt_usize(s.map(|s| s.rounds)),
            opt_usize(s.map(|s| s.resolvents)),
            opt_usize(s.map(|s| s.eliminations)),
            opt_usize(s.map(|s| s.decisions)),
            opt_usize(s.map(|s| s.propagations)),
            opt_usize(s.map(|s| s.pure_literals)),
            opt_usize(s.map(|s| s.peak_clauses)),
        )
    }

    pub fn summary_line(&self) -> String {
        let label = match (self.status, self.verdict) {
            (RunStatus::Ok, Some(v)) => v.to_string(),
            (status, _) => status.as_str().to_uppercase(),
        };
        format!(
            "  {:<10} -> {} in {:.6}s",
            self.solver,
            label,
            self.wall.as_secs_f64()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub name: String,
    pub rows: Vec<BenchRow>,
    pub expected: Option<Verdict>,
    pub oracle: Option<(Oracle, Verdict)>,
}

impl CaseReport {
    /// Verdicts of the solvers that finished, in run order.
    pub fn verdicts(&self) -> IndexMap<&'static str, Verdict> {
        self.rows
            .iter()
            .filter_map(|r| r.verdict.map(|v| (r.solver, v)))
            .collect()
    }

    /// True when every finished solver, the expectation and the oracle (if
    /// any) give the same verdict.
    pub fn agreed(&self) -> bool {
        let mut all = self.verdicts().into_values().collect::<Vec<_>>();
        all.extend(self.expected);
        all.extend(self.oracle.map(|(_, v)| v));
        all.windows(2).all(|w| w[0] == w[1])
    }
}

pub fn run_solver(kind: SolverKind, case: &Case, timeout: Duration) -> BenchRow {
    let start = Instant::now();
    let formula = case.formula.clone();
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let solver = kind.build();
        let began = Instant::now();
        let solution = solver.solve(&formula);
        let _ = tx.send((solution, began.elapsed()));
    });

    let base = BenchRow {
        case: case.name.clone(),
        solver: kind.name(),
        status: RunStatus::Ok,
        verdict: None,
        wall: Duration::ZERO,
        vars: case.formula.variables().len(),
        clauses: case.formula.len(),
        stats: None,
    };

    match rx.recv_timeout(timeout) {
        Ok((solution, wall)) => BenchRow {
            verdict: Some(solution.verdict),
            wall,
            stats: Some(solution.stats),
            ..base
        },
        Err(mpsc::RecvTimeoutError::Timeout) => {
            warn!(case = %case.name, solver = kind.name(), ?timeout, "solver timed out");
            BenchRow {
                status: RunStatus::Timeout,
                wall: start.elapsed(),
                ..base
            }
        }
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            warn!(case = %case.name, solver = kind.name(), "solver thread died");
            BenchRow {
                status: RunStatus::InternalError,
                wall: start.elapsed(),
                ..base
            }
        }
    }
}

pub fn run_case(case: &Case, cfg: &BenchConfig) -> CaseReport {
    let rows = cfg
        .solvers
        .iter()
        .map(|&kind| run_solver(kind, case, cfg.timeout))
        .collect::<Vec<_>>();

    let oracle = cfg.oracle.and_then(|o| match o.check(&case.formula) {
        Ok(v) => Some((o, v)),
        Err(e) => {
            warn!(case = %case.name, oracle = o.name(), "oracle skipped: {:#}", e);
            None
        }
    });

    let report = CaseReport {
        name: case.name.clone(),
        rows,
        expected: case.expected,
        oracle,
    };
    if !report.agreed() {
        warn!(
            case = %report.name,
            verdicts = ?report.verdicts(),
            expected = ?report.expected,
            oracle = ?report.oracle,
            "verdicts disagree"
        );
    }
    report
}

/// Runs every case and, when `csv_path` is given, streams one CSV line per
/// solver run.
pub fn run_suite(cases: &[Case], cfg: &BenchConfig, csv_path: Option<&Path>) -> Result<Vec<CaseReport>> {
    let mut csv = match csv_path {
        Some(p) => {
            let mut f = File::create(p).with_context(|| format!("creating {}", p.display()))?;
            writeln!(f, "{}", BenchRow::csv_header())?;
            Some(f)
        }
        None => None,
    };

    let mut reports = Vec::with_capacity(cases.len());
    for case in cases {
        info!(case = %case.name, clauses = case.formula.len(), "running case");
        let report = run_case(case, cfg);
        if let Some(f) = csv.as_mut() {
            for row in &report.rows {
                writeln!(f, "{}", row.to_csv_line())?;
            }
            f.flush()?;
        }
        reports.push(report);
    }
    Ok(reports)
}

fn opt_usize(v: Option<usize>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn esc_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
