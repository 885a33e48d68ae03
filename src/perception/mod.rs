pub mod case;

pub use case::{load_case_dir, Case, Sample};
