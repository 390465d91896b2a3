pub mod catalog;
pub mod random;
