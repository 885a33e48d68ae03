pub mod eval;
pub mod runner;

pub use eval::{CaseReport, Outcome, SampleReport, Split, Transform};
pub use runner::{run, RunConfig, RunReport};
