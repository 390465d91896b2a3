pub mod dimacs;
pub mod formula;

pub use formula::{Assignment, Clause, Formula, Lit};
