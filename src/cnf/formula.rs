use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::FormulaError;

pub type Assignment = BTreeMap<u32, bool>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn from_dimacs(lit: i64) -> Result<Self, FormulaError> {
        if lit == 0 {
            return Err(FormulaError::ZeroLiteral);
        }
        let var = u32::try_from(lit.unsigned_abs())
            .map_err(|_| FormulaError::LiteralOutOfRange(lit))?;
        Ok(Self::new(var, lit > 0))
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn eval(self, assignment: &Assignment) -> Option<bool> {
        assignment
            .get(&self.var)
            .map(|&v| if self.sign { v } else { !v })
    }
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_dimacs())
    }
}

/// A disjunction of literals. Duplicates collapse and iteration follows the
/// canonical literal order, so two clauses with the same literals compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clause {
    lits: BTreeSet<Lit>,
}

impl Clause {
    pub fn new<I: IntoIterator<Item = Lit>>(lits: I) -> Self {
        Self {
            lits: lits.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_dimacs(lits: &[i64]) -> Result<Self, FormulaError> {
        let lits = lits
            .iter()
            .map(|&l| Lit::from_dimacs(l))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { lits })
    }

    pub fn len(&self) -> usize {
        self.lits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lits.is_empty()
    }

    pub fn unit(&self) -> Option<Lit> {
        if self.lits.len() == 1 {
            self.lits.first().copied()
        } else {
            None
        }
    }

    pub fn first(&self) -> Option<Lit> {
        self.lits.first().copied()
    }

    pub fn contains(&self, lit: Lit) -> bool {
        self.lits.contains(&lit)
    }

    pub fn iter(&self) -> impl Iterator<Item = Lit> + '_ {
        self.lits.iter().copied()
    }

    pub fn is_tautology(&self) -> bool {
        self.lits
            .iter()
            .any(|l| l.sign && self.lits.contains(&l.neg()))
    }

    pub fn without(&self, lit: Lit) -> Self {
        let mut lits = self.lits.clone();
        lits.remove(&lit);
        Self { lits }
    }

    /// Resolvent on `pivot`: `self` is expected to hold `pivot` and `other` its
    /// negation. Only those two occurrences are removed, so a tautology keeps
    /// its other polarity of the pivot variable.
    pub fn resolve(&self, other: &Clause, pivot: Lit) -> Self {
        let falsified = pivot.neg();
        let lits = self
            .lits
            .iter()
            .filter(|&&l| l != pivot)
            .chain(other.lits.iter().filter(|&&l| l != falsified))
            .copied()
            .collect();
        Self { lits }
    }

    pub fn is_subset(&self, other: &Clause) -> bool {
        self.lits.is_subset(&other.lits)
    }

    pub fn eval(&self, assignment: &Assignment) -> Option<bool> {
        let mut any_unknown = false;
        for lit in self.iter() {
            match lit.eval(assignment) {
                Some(true) => return Some(true),
                Some(false) => {}
                None => any_unknown = true,
            }
        }
        if any_unknown { None } else { Some(false) }
    }
}

impl FromIterator<Lit> for Clause {
    fn from_iter<I: IntoIterator<Item = Lit>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, lit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{lit}")?;
        }
        write!(f, "}}")
    }
}

/// A conjunction of clauses held as an ordered set. The empty clause sorts
/// first, which keeps the falsified-clause check constant time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Formula {
    clauses: BTreeSet<Clause>,
}

impl Formula {
    pub fn new<I: IntoIterator<Item = Clause>>(clauses: I) -> Self {
        Self {
            clauses: clauses.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_dimacs<C: AsRef<[i64]>>(clauses: &[C]) -> Result<Self, FormulaError> {
        let clauses = clauses
            .iter()
            .map(|c| Clause::from_dimacs(c.as_ref()))
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(Self { clauses })
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.first().is_some_and(Clause::is_empty)
    }

    pub fn contains(&self, clause: &Clause) -> bool {
        self.clauses.contains(clause)
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> + '_ {
        self.clauses.iter()
    }

    pub fn literals(&self) -> BTreeSet<Lit> {
        self.clauses.iter().flat_map(|c| c.iter()).collect()
    }

    pub fn variables(&self) -> BTreeSet<u32> {
        self.clauses
            .iter()
            .flat_map(|c| c.iter())
            .map(|l| l.var)
            .collect()
    }

    pub fn max_var(&self) -> u32 {
        self.clauses
            .iter()
            .flat_map(|c| c.iter())
            .map(|l| l.var)
            .max()
            .unwrap_or(0)
    }

    pub fn max_clause_width(&self) -> usize {
        self.clauses.iter().map(Clause::len).max().unwrap_or(0)
    }

    /// Smallest literal of the smallest non-empty clause. This is the fixed
    /// selection rule shared by the DP and DPLL solvers.
    pub fn first_literal(&self) -> Option<Lit> {
        self.clauses.iter().find_map(Clause::first)
    }

    pub fn first_unit(&self) -> Option<Lit> {
        self.clauses.iter().find_map(Clause::unit)
    }

    /// Restricts the formula under `lit` assumed true. Satisfied clauses are
    /// dropped, `-lit` is removed from the rest, and a clause emptied this way
    /// stays in the result as the empty clause.
    pub fn simplify(&self, lit: Lit) -> Formula {
        let falsified = lit.neg();
        let clauses = self
            .clauses
            .iter()
            .filter(|c| !c.contains(lit))
            .map(|c| {
                if c.contains(falsified) {
                    c.without(falsified)
                } else {
                    c.clone()
                }
            })
            .collect();
        Formula { clauses }
    }

    pub fn eval(&self, assignment: &Assignment) -> Option<bool> {
        let mut all_true = true;
        for clause in &self.clauses {
            match clause.eval(assignment) {
                Some(true) => {}
                Some(false) => return Some(false),
                None => all_true = false,
            }
        }
        if all_true { Some(true) } else { None }
    }
}

impl FromIterator<Clause> for Formula {
    fn from_iter<I: IntoIterator<Item = Clause>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Formula {
    type Item = &'a Clause;
    type IntoIter = std::collections::btree_set::Iter<'a, Clause>;

    fn into_iter(self) -> Self::IntoIter {
        self.clauses.iter()
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{clause}")?;
        }
        write!(f, " }}")
    }
}
