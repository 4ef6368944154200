//! Generic state-space search. A [`search::Problem`] describes the state
//! space implicitly; [`search::search_engines::QueueSearch`] explores it with
//! one of the tree or graph search strategies and returns a plan together
//! with the metrics of the run.

#![warn(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
#![deny(unit_bindings)]
#![warn(unused_crate_dependencies)]
#![warn(unused_qualifications)]

pub mod search;

pub use search::search_engines::{QueueSearch, SearchConfig, SearchEngine};
pub use search::{Action, Plan, Problem};

#[cfg(test)]
mod test_utils;
