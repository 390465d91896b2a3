use crate::cnf::formula::{Clause, Formula};
use crate::error::FormulaError;
use crate::sat::Verdict;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub name: &'static str,
    pub formula: Formula,
    pub expected: Verdict,
}

pub fn hand_crafted() -> Result<Vec<Example>, FormulaError> {
    Ok(vec![
        Example {
            name: "Simple SAT",
            formula: Formula::from_dimacs(&[vec![1, -2], vec![2, 3], vec![-1, -3]])?,
            expected: Verdict::Sat,
        },
        Example {
            name: "Simple UNSAT",
            formula: Formula::from_dimacs(&[[1], [-1]])?,
            expected: Verdict::Unsat,
        },
        Example {
            name: "XOR (unsat by 2-SAT)",
            formula: Formula::from_dimacs(&[[1, 2], [-1, -2], [1, -2], [-1, 2]])?,
            expected: Verdict::Unsat,
        },
        // pigeons 1 and 2 each take hole A or B, never the same one
        Example {
            name: "Pigeonhole 2 pigeons -> 1 hole UNSAT",
            formula: Formula::from_dimacs(&[[1, 2], [3, 4], [-1, -3], [-2, -4]])?,
            expected: Verdict::Unsat,
        },
    ])
}

/// Degenerate shapes every solver has to get right.
pub fn edge_cases() -> Result<Vec<Example>, FormulaError> {
    Ok(vec![
        Example {
            name: "Empty formula",
            formula: Formula::empty(),
            expected: Verdict::Sat,
        },
        Example {
            name: "Empty clause",
            formula: Formula::new([Clause::empty()]),
            expected: Verdict::Unsat,
        },
        Example {
            name: "Tautology only",
            formula: Formula::from_dimacs(&[[1, -1]])?,
            expected: Verdict::Sat,
        },
        Example {
            name: "Tautology beside its own unit",
            formula: Formula::from_dimacs(&[vec![1, -1], vec![1]])?,
            expected: Verdict::Sat,
        },
        Example {
            name: "Tautology with forced units",
            formula: Formula::from_dimacs(&[vec![1, -1, 2], vec![1], vec![-2]])?,
            expected: Verdict::Sat,
        },
        Example {
            name: "Tautology beside a contradiction",
            formula: Formula::from_dimacs(&[vec![1, -1, 2], vec![2], vec![-2]])?,
            expected: Verdict::Unsat,
        },
    ])
}

pub fn all() -> Result<Vec<Example>, FormulaError> {
    let mut out = hand_crafted()?;
    out.extend(edge_cases()?);
    Ok(out)
}
