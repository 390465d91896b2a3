use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::cnf::formula::{Clause, Formula};
use crate::sat::{Solution, SolveStats, Solver, Verdict};

#[derive(Debug, Clone, Copy, Default)]
pub struct ResolutionSolver;

impl Solver for ResolutionSolver {
    fn name(&self) -> &'static str {
        "resolution"
    }

    fn solve(&self, formula: &Formula) -> Solution {
        saturate(formula)
    }
}

pub fn decide(formula: &Formula) -> Verdict {
    saturate(formula).verdict
}

/// Resolves every complementary pair among the known clauses, round after
/// round, until the empty clause appears or a round adds nothing new.
pub fn saturate(formula: &Formula) -> Solution {
    let mut stats = SolveStats::default();
    // no pair can ever produce the empty clause that is already there
    if formula.has_empty_clause() {
        return Solution {
            verdict: Verdict::Unsat,
            stats,
        };
    }

    let mut known = formula.clauses().cloned().collect::<BTreeSet<Clause>>();
    stats.observe_clauses(known.len());

    loop {
        stats.rounds += 1;
        let Some(new) = resolve_round(&known, &mut stats) else {
            debug!(
                round = stats.rounds,
                clauses = known.len(),
                "resolution derived the empty clause"
            );
            return Solution {
                verdict: Verdict::Unsat,
                stats,
            };
        };

        if new.is_subset(&known) {
            debug!(
                round = stats.rounds,
                clauses = known.len(),
                "resolution saturated"
            );
            return Solution {
                verdict: Verdict::Sat,
                stats,
            };
        }

        let before = known.len();
        known.extend(new);
        stats.observe_clauses(known.len());
        debug!(
            round = stats.rounds,
            added = known.len() - before,
            clauses = known.len(),
            "resolution round"
        );
    }
}

/// All resolvents over unordered pairs of distinct known clauses, or `None`
/// as soon as one of them is empty.
fn resolve_round(known: &BTreeSet<Clause>, stats: &mut SolveStats) -> Option<BTreeSet<Clause>> {
    let clauses = known.iter().collect::<Vec<_>>();
    let mut new = BTreeSet::new();

    for (i, ci) in clauses.iter().enumerate() {
        for cj in &clauses[i + 1..] {
            for lit in ci.iter() {
                if !cj.contains(lit.neg()) {
                    continue;
                }
                let resolvent = ci.resolve(cj, lit);
                stats.resolvents += 1;
                if resolvent.is_empty() {
                    return None;
                }
                trace!(%ci, %cj, pivot = %lit, %resolvent, "resolvent");
                new.insert(resolvent);
            }
        }
    }
    Some(new)
}
