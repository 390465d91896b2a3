use cnfdecide::cnf::dimacs::to_dimacs;
use cnfdecide::cnf::formula::{Clause, Formula, Lit};
use cnfdecide::error::FormulaError;

#[test]
fn zero_literal_is_rejected() {
    assert_eq!(Lit::from_dimacs(0), Err(FormulaError::ZeroLiteral));
    assert_eq!(
        Clause::from_dimacs(&[1, 0, 2]),
        Err(FormulaError::ZeroLiteral)
    );
    assert!(Formula::from_dimacs(&[vec![1, 2], vec![0]]).is_err());
}

#[test]
fn oversized_literal_is_rejected() {
    let big = i64::from(u32::MAX) + 1;
    assert_eq!(
        Lit::from_dimacs(-big),
        Err(FormulaError::LiteralOutOfRange(-big))
    );
}

#[test]
fn literal_round_trips_sign() {
    let l = Lit::from_dimacs(-7).expect("lit");
    assert_eq!(l, Lit::new(7, false));
    assert_eq!(l.to_dimacs(), -7);
    assert_eq!(l.neg().to_dimacs(), 7);
}

#[test]
fn duplicates_collapse() {
    let c = Clause::from_dimacs(&[3, 1, 3, 1]).expect("clause");
    assert_eq!(c.len(), 2);

    let f = Formula::from_dimacs(&[vec![1, 2], vec![2, 1], vec![1, 2, 2]]).expect("formula");
    assert_eq!(f.len(), 1);
}

#[test]
fn order_does_not_matter() {
    let a = Formula::from_dimacs(&[vec![1, -2], vec![2, 3], vec![-1, -3]]).expect("formula");
    let b = Formula::from_dimacs(&[vec![-3, -1], vec![-2, 1], vec![3, 2]]).expect("formula");
    assert_eq!(a, b);
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn tautology_detection() {
    assert!(Clause::from_dimacs(&[1, -1]).expect("clause").is_tautology());
    assert!(!Clause::from_dimacs(&[1, -2]).expect("clause").is_tautology());
    assert!(!Clause::empty().is_tautology());
}

#[test]
fn variables_and_width() {
    let f = Formula::from_dimacs(&[vec![1, -4], vec![2, 3, -1]]).expect("formula");
    assert_eq!(f.variables().into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
    assert_eq!(f.max_var(), 4);
    assert_eq!(f.max_clause_width(), 3);
}

#[test]
fn dimacs_output_lists_every_clause() {
    let f = Formula::from_dimacs(&[vec![1, -2], vec![3]]).expect("formula");
    let text = to_dimacs(&f);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("p cnf 3 2"));
    assert_eq!(lines.next(), Some("1 -2 0"));
    assert_eq!(lines.next(), Some("3 0"));
    assert_eq!(lines.next(), None);
}
