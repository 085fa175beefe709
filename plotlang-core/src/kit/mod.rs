//! Reusable machinery with no knowledge of the plot language itself

pub mod dfa;
