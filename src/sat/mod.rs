pub mod dp;
pub mod dpll;
pub mod resolution;
pub mod truth_table;

use std::fmt;
use std::str::FromStr;

use anyhow::bail;

use crate::cnf::formula::{Formula, Lit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Sat,
    Unsat,
}

impl Verdict {
    pub fn is_sat(self) -> bool {
        matches!(self, Verdict::Sat)
    }
}

impl From<bool> for Verdict {
    fn from(sat: bool) -> Self {
        if sat { Verdict::Sat } else { Verdict::Unsat }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Sat => f.write_str("SAT"),
            Verdict::Unsat => f.write_str("UNSAT"),
        }
    }
}

/// Counters filled in by whichever solver ran; fields a solver has no use
/// for stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    pub rounds: usize,
    pub resolvents: usize,
    pub eliminations: usize,
    pub decisions: usize,
    pub propagations: usize,
    pub pure_literals: usize,
    pub peak_clauses: usize,
    /// Branch literals in the order DPLL tried them.
    pub trace: Vec<Lit>,
}

impl SolveStats {
    pub(crate) fn observe_clauses(&mut self, n: usize) {
        self.peak_clauses = self.peak_clauses.max(n);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub verdict: Verdict,
    pub stats: SolveStats,
}

pub trait Solver {
    fn name(&self) -> &'static str;
    fn solve(&self, formula: &Formula) -> Solution;

    fn decide(&self, formula: &Formula) -> Verdict {
        self.solve(formula).verdict
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverKind {
    Resolution,
    Dp,
    Dpll,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [SolverKind::Resolution, SolverKind::Dp, SolverKind::Dpll];

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Resolution => "resolution",
            SolverKind::Dp => "dp",
            SolverKind::Dpll => "dpll",
        }
    }

    pub fn build(self) -> Box<dyn Solver + Send> {
        match self {
            SolverKind::Resolution => Box::new(resolution::ResolutionSolver),
            SolverKind::Dp => Box::new(dp::DpSolver),
            SolverKind::Dpll => Box::new(dpll::DpllSolver),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "resolution" => Ok(SolverKind::Resolution),
            "dp" => Ok(SolverKind::Dp),
            "dpll" => Ok(SolverKind::Dpll),
            _ => bail!("unknown solver '{}', expected resolution|dp|dpll", s),
        }
    }
}
