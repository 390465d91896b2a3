use std::fmt::Write;

use super::formula::Formula;

pub fn to_dimacs(formula: &Formula) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "p cnf {} {}", formula.max_var(), formula.len());
    for clause in formula {
        for lit in clause.iter() {
            let _ = write!(out, "{} ", lit.to_dimacs());
        }
        out.push_str("0\n");
    }
    out
}
