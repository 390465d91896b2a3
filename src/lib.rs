pub mod bench;
pub mod cnf;
pub mod error;
pub mod instances;
pub mod logging;
pub mod oracle;
pub mod sat;

pub use cnf::formula::{Clause, Formula, Lit};
pub use error::FormulaError;
pub use sat::{Solution, SolveStats, Solver, SolverKind, Verdict};
