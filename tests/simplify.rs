use cnfdecide::cnf::formula::{Clause, Formula, Lit};

fn cnf(clauses: &[Vec<i64>]) -> Formula {
    Formula::from_dimacs(clauses).expect("formula")
}

#[test]
fn satisfied_clauses_drop_and_falsified_literals_go() {
    let f = cnf(&[vec![1, 2], vec![-1, 3], vec![2, 3]]);
    let s = f.simplify(Lit::new(1, true));
    assert_eq!(s, cnf(&[vec![3], vec![2, 3]]));
}

#[test]
fn emptied_clause_is_kept() {
    let f = cnf(&[vec![-1], vec![2, 3]]);
    let s = f.simplify(Lit::new(1, true));
    assert!(s.has_empty_clause());
    assert!(s.contains(&Clause::empty()));
    assert_eq!(s.len(), 2);
}

#[test]
fn input_is_untouched() {
    let f = cnf(&[vec![1, 2], vec![-1, 3]]);
    let before = f.clone();
    let _ = f.simplify(Lit::new(1, false));
    assert_eq!(f, before);
}

#[test]
fn never_grows() {
    let f = cnf(&[
        vec![1, 2, 3],
        vec![-1, 2],
        vec![-1, -2],
        vec![1, -3],
        vec![2, -1, 1],
    ]);
    for lit in f.literals() {
        let s = f.simplify(lit);
        assert!(s.len() <= f.len());
        assert!(s.max_clause_width() <= f.max_clause_width());
        for residue in s.clauses() {
            assert!(
                f.clauses().any(|c| residue.is_subset(c)),
                "{} is not a residue of any input clause",
                residue
            );
        }
        assert!(!s.variables().contains(&lit.var));
    }
}

#[test]
fn merged_residues_collapse() {
    // {-1,2} shrinks to {2}, which is already there
    let f = cnf(&[vec![-1, 2], vec![2]]);
    let s = f.simplify(Lit::new(1, true));
    assert_eq!(s, cnf(&[vec![2]]));
}

#[test]
fn empty_clause_survives_any_literal() {
    let f = cnf(&[vec![], vec![1, 2]]);
    for lit in [Lit::new(1, true), Lit::new(1, false), Lit::new(7, true)] {
        assert!(f.simplify(lit).has_empty_clause());
    }
}

#[test]
fn tautology_is_satisfied_by_either_polarity() {
    let f = cnf(&[vec![1, -1, 2]]);
    assert!(f.simplify(Lit::new(1, true)).is_empty());
    assert!(f.simplify(Lit::new(1, false)).is_empty());
}
