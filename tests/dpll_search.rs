use cnfdecide::cnf::formula::{Formula, Lit};
use cnfdecide::sat::{Verdict, dpll};

fn cnf(clauses: &[Vec<i64>]) -> Formula {
    Formula::from_dimacs(clauses).expect("formula")
}

#[test]
fn units_alone_decide_without_branching() {
    let f = cnf(&[vec![1], vec![-1, 2], vec![-2, 3], vec![-3, -1]]);
    let solution = dpll::search(&f);
    assert_eq!(solution.verdict, Verdict::Unsat);
    assert_eq!(solution.stats.decisions, 0);
    assert!(solution.stats.propagations >= 3);
}

#[test]
fn pure_literals_finish_the_search() {
    let f = cnf(&[vec![1, 2], vec![1, -3], vec![2, 3]]);
    let solution = dpll::search(&f);
    assert_eq!(solution.verdict, Verdict::Sat);
    assert_eq!(solution.stats.decisions, 0);
    assert!(solution.stats.pure_literals >= 1);
}

#[test]
fn sat_branch_short_circuits() {
    let f = cnf(&[vec![1, -2], vec![2, 3], vec![-1, -3]]);
    let solution = dpll::search(&f);
    assert_eq!(solution.verdict, Verdict::Sat);
    assert_eq!(solution.stats.trace, vec![Lit::new(1, true)]);
    assert_eq!(solution.stats.propagations, 2);
}

#[test]
fn unsat_explores_both_branches() {
    let f = cnf(&[vec![1, 2], vec![-1, -2], vec![1, -2], vec![-1, 2]]);
    let solution = dpll::search(&f);
    assert_eq!(solution.verdict, Verdict::Unsat);
    assert_eq!(
        solution.stats.trace,
        vec![Lit::new(1, true), Lit::new(1, false)]
    );
    assert_eq!(solution.stats.decisions, 2);
}

#[test]
fn deep_chain_stays_within_stack() {
    // x1 and x1 -> x2 -> ... -> x400, then not x400
    let n = 400i64;
    let mut clauses = vec![vec![1]];
    for v in 1..n {
        clauses.push(vec![-v, v + 1]);
    }
    clauses.push(vec![-n]);
    let f = cnf(&clauses);
    assert_eq!(dpll::decide(&f), Verdict::Unsat);
}

#[test]
fn decision_can_empty_the_formula_directly() {
    // no units and no pure literals, each decision satisfies one tautology
    let f = cnf(&[vec![1, -1], vec![2, -2]]);
    let solution = dpll::search(&f);
    assert_eq!(solution.verdict, Verdict::Sat);
    assert_eq!(
        solution.stats.trace,
        vec![Lit::new(1, true), Lit::new(2, true)]
    );
    assert_eq!(solution.stats.propagations, 0);
}
