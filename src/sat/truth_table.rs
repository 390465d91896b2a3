use crate::cnf::formula::{Assignment, Formula};
use crate::error::FormulaError;
use crate::sat::Verdict;

pub const MAX_VARS: usize = 20;

/// Ground truth by enumerating every assignment of the formula's variables.
pub fn decide(formula: &Formula) -> Result<Verdict, FormulaError> {
    let vars = formula.variables().into_iter().collect::<Vec<_>>();
    if vars.len() > MAX_VARS {
        return Err(FormulaError::TooManyVariables {
            vars: vars.len(),
            cap: MAX_VARS,
        });
    }

    let mut assignment = Assignment::new();
    for bits in 0u32..(1u32 << vars.len()) {
        for (i, &var) in vars.iter().enumerate() {
            assignment.insert(var, (bits >> i) & 1 == 1);
        }
        if formula.eval(&assignment) == Some(true) {
            return Ok(Verdict::Sat);
        }
    }
    Ok(Verdict::Unsat)
}
