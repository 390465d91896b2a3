use std::collections::BTreeSet;

use anyhow::{Result, bail};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cnf::formula::{Clause, Formula, Lit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    pub vars: u32,
    pub clauses: usize,
    pub width: usize,
}

impl RandomSpec {
    pub fn new(vars: u32, clauses: usize, width: usize) -> Self {
        Self {
            vars,
            clauses,
            width,
        }
    }
}

/// Grid used by the side-by-side benchmark: (vars, clauses, width).
pub const DEFAULT_GRID: [RandomSpec; 4] = [
    RandomSpec {
        vars: 4,
        clauses: 6,
        width: 3,
    },
    RandomSpec {
        vars: 6,
        clauses: 12,
        width: 3,
    },
    RandomSpec {
        vars: 8,
        clauses: 16,
        width: 3,
    },
    RandomSpec {
        vars: 10,
        clauses: 40,
        width: 4,
    },
];

pub const DEFAULT_SEED: u64 = 42;

pub fn random_cnf(spec: RandomSpec, seed: u64) -> Result<Formula> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_cnf_with(spec, &mut rng)
}

/// Each clause gets `width` distinct literals with a uniform variable and a
/// fair polarity, so a clause may hold both polarities of a variable.
pub fn random_cnf_with(spec: RandomSpec, rng: &mut ChaCha8Rng) -> Result<Formula> {
    if spec.vars == 0 && spec.clauses > 0 {
        bail!("vars must be >= 1 to generate clauses");
    }
    if spec.width as u64 > 2 * spec.vars as u64 {
        bail!(
            "width {} exceeds the {} distinct literals over {} vars",
            spec.width,
            2 * spec.vars as u64,
            spec.vars
        );
    }

    let mut clauses = Vec::with_capacity(spec.clauses);
    for _ in 0..spec.clauses {
        let mut lits = BTreeSet::new();
        while lits.len() < spec.width {
            let var = rng.random_range(1..=spec.vars);
            lits.insert(Lit::new(var, rng.random::<bool>()));
        }
        clauses.push(Clause::new(lits));
    }
    Ok(Formula::new(clauses))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_formula() {
        let spec = RandomSpec::new(6, 12, 3);
        let a = random_cnf(spec, 7).expect("gen");
        let b = random_cnf(spec, 7).expect("gen");
        assert_eq!(a, b);
    }

    #[test]
    fn clauses_have_requested_width() {
        let f = random_cnf(RandomSpec::new(5, 30, 4), 1).expect("gen");
        assert!(f.clauses().all(|c| c.len() == 4));
        assert!(f.max_var() <= 5);
    }

    #[test]
    fn rejects_impossible_width() {
        assert!(random_cnf(RandomSpec::new(1, 3, 3), 0).is_err());
    }
}
