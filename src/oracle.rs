use std::fmt;
use std::str::FromStr;

use anyhow::{Result, anyhow, bail};
use varisat::ExtendFormula;

use crate::cnf::formula::Formula;
use crate::sat::{Verdict, truth_table};

// keeps dimacs indices well inside varisat's variable range
const VARISAT_MAX_VAR: u32 = 1 << 26;

/// Independent checkers used to validate the three decision procedures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Oracle {
    TruthTable,
    Varisat,
}

impl Oracle {
    pub fn name(self) -> &'static str {
        match self {
            Oracle::TruthTable => "truth-table",
            Oracle::Varisat => "varisat",
        }
    }

    pub fn check(self, formula: &Formula) -> Result<Verdict> {
        match self {
            Oracle::TruthTable => Ok(truth_table::decide(formula)?),
            Oracle::Varisat => varisat_decide(formula),
        }
    }
}

impl fmt::Display for Oracle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Oracle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "truth-table" => Ok(Oracle::TruthTable),
            "varisat" => Ok(Oracle::Varisat),
            _ => bail!("unknown oracle '{}', expected truth-table|varisat", s),
        }
    }
}

pub fn varisat_decide(formula: &Formula) -> Result<Verdict> {
    if formula.max_var() > VARISAT_MAX_VAR {
        bail!(
            "variable {} exceeds the varisat oracle limit {}",
            formula.max_var(),
            VARISAT_MAX_VAR
        );
    }

    let mut solver = varisat::Solver::new();
    for clause in formula {
        let lits = clause
            .iter()
            .map(|l| varisat::Lit::from_dimacs(l.to_dimacs() as isize))
            .collect::<Vec<_>>();
        solver.add_clause(&lits);
    }
    let sat = solver
        .solve()
        .map_err(|e| anyhow!("varisat failed: {:?}", e))?;
    Ok(sat.into())
}
