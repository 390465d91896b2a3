use tracing::{debug, trace};

use crate::cnf::formula::{Clause, Formula, Lit};
use crate::sat::{Solution, SolveStats, Solver, Verdict};

#[derive(Debug, Clone, Copy, Default)]
pub struct DpSolver;

impl Solver for DpSolver {
    fn name(&self) -> &'static str {
        "dp"
    }

    fn solve(&self, formula: &Formula) -> Solution {
        eliminate(formula)
    }
}

pub fn decide(formula: &Formula) -> Verdict {
    eliminate(formula).verdict
}

/// Davis-Putnam: eliminates one variable per step by resolving its positive
/// occurrences against its negative ones. Each step removes a variable, so
/// the loop runs at most once per variable.
pub fn eliminate(formula: &Formula) -> Solution {
    let mut stats = SolveStats::default();
    let mut current = formula.clone();

    loop {
        stats.observe_clauses(current.len());
        if current.has_empty_clause() {
            debug!(eliminated = stats.eliminations, "dp reached the empty clause");
            return Solution {
                verdict: Verdict::Unsat,
                stats,
            };
        }
        let Some(lit) = current.first_literal() else {
            debug!(eliminated = stats.eliminations, "dp emptied the formula");
            return Solution {
                verdict: Verdict::Sat,
                stats,
            };
        };

        let (next, resolvents) = eliminate_var(&current, lit.var);
        stats.eliminations += 1;
        stats.resolvents += resolvents;
        debug!(
            var = lit.var,
            before = current.len(),
            after = next.len(),
            resolvents,
            "dp eliminated variable"
        );
        current = next;
    }
}

/// Replaces every clause mentioning `var` by the resolvents on `var`.
/// Tautological resolvents are always true and are not kept. Returns the new
/// formula and the number of resolvents computed.
pub fn eliminate_var(formula: &Formula, var: u32) -> (Formula, usize) {
    let pos_lit = Lit::new(var, true);
    let neg_lit = pos_lit.neg();

    let mut pos = Vec::<&Clause>::new();
    let mut neg = Vec::<&Clause>::new();
    let mut others = Vec::<Clause>::new();
    for clause in formula {
        match (clause.contains(pos_lit), clause.contains(neg_lit)) {
            // satisfied either way; resolving it with itself would be unsound
            (true, true) => trace!(%clause, var, "dropping tautology on pivot"),
            (true, false) => pos.push(clause),
            (false, true) => neg.push(clause),
            (false, false) => others.push(clause.clone()),
        }
    }

    let mut count = 0usize;
    let mut clauses = others;
    for p in &pos {
        for n in &neg {
            let resolvent = p.resolve(n, pos_lit);
            count += 1;
            if !resolvent.is_tautology() {
                clauses.push(resolvent);
            }
        }
    }
    (Formula::new(clauses), count)
}
