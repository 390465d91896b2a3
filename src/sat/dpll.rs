use tracing::{debug, trace};

use crate::cnf::formula::{Assignment, Formula, Lit};
use crate::sat::{Solution, SolveStats, Solver, Verdict};

#[derive(Debug, Clone, Copy, Default)]
pub struct DpllSolver;

impl Solver for DpllSolver {
    fn name(&self) -> &'static str {
        "dpll"
    }

    fn solve(&self, formula: &Formula) -> Solution {
        search(formula)
    }
}

pub fn decide(formula: &Formula) -> Verdict {
    search(formula).verdict
}

pub fn search(formula: &Formula) -> Solution {
    let mut stats = SolveStats::default();
    let sat = branch(formula, formula.clone(), Assignment::new(), &mut stats);
    debug!(
        sat,
        decisions = stats.decisions,
        propagations = stats.propagations,
        pure = stats.pure_literals,
        "dpll finished"
    );
    Solution {
        verdict: sat.into(),
        stats,
    }
}

fn branch(
    root: &Formula,
    mut formula: Formula,
    mut assignment: Assignment,
    stats: &mut SolveStats,
) -> bool {
    stats.observe_clauses(formula.len());
    if let Some(done) = terminal(&formula) {
        return finish(root, &assignment, done);
    }

    while let Some(lit) = formula.first_unit() {
        assign(&mut assignment, lit);
        formula = formula.simplify(lit);
        stats.propagations += 1;
        trace!(%lit, clauses = formula.len(), "unit");
        if let Some(done) = terminal(&formula) {
            return finish(root, &assignment, done);
        }
    }

    for lit in pure_literals(&formula) {
        assign(&mut assignment, lit);
        formula = formula.simplify(lit);
        stats.pure_literals += 1;
        trace!(%lit, clauses = formula.len(), "pure");
    }
    if let Some(done) = terminal(&formula) {
        return finish(root, &assignment, done);
    }

    // terminal() has ruled out formulas without literals
    let Some(var) = formula.first_literal().map(|l| l.var) else {
        return finish(root, &assignment, true);
    };

    for lit in [Lit::new(var, true), Lit::new(var, false)] {
        stats.decisions += 1;
        stats.trace.push(lit);
        trace!(%lit, depth = assignment.len(), "decide");
        let mut next = assignment.clone();
        assign(&mut next, lit);
        if branch(root, formula.simplify(lit), next, stats) {
            return true;
        }
    }
    false
}

/// `Some(false)` on a falsified clause, `Some(true)` when nothing is left.
fn terminal(formula: &Formula) -> Option<bool> {
    if formula.has_empty_clause() {
        Some(false)
    } else if formula.is_empty() {
        Some(true)
    } else {
        None
    }
}

fn finish(root: &Formula, assignment: &Assignment, sat: bool) -> bool {
    debug_assert!(
        !sat || root.eval(assignment) == Some(true),
        "dpll reported SAT under an assignment that does not satisfy the input"
    );
    sat
}

fn assign(assignment: &mut Assignment, lit: Lit) {
    assignment.insert(lit.var, lit.sign);
}

/// Literals whose negation occurs nowhere in the formula.
pub fn pure_literals(formula: &Formula) -> Vec<Lit> {
    let lits = formula.literals();
    lits.iter()
        .copied()
        .filter(|l| !lits.contains(&l.neg()))
        .collect()
}
