// Applies a candidate transform to every sample of a case.
//
// A transform that errors or panics fails only the sample it ran on; the
// rest of the case (and the run) keeps going.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::grid::Grid;
use crate::perception::{Case, Sample};

/// Anything that maps one grid to another.
pub trait Transform {
    fn apply(&self, grid: &Grid) -> anyhow::Result<Grid>;
}

impl<F> Transform for F
where
    F: Fn(&Grid) -> anyhow::Result<Grid>,
{
    fn apply(&self, grid: &Grid) -> anyhow::Result<Grid> {
        self(grid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Split::Train => write!(f, "train"),
            Split::Test => write!(f, "test"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    Mismatch { actual: Grid },
    Error(String),
}

#[derive(Debug, Clone)]
pub struct SampleReport {
    pub split: Split,
    pub index: usize,
    pub input: Grid,
    pub expected: Grid,
    pub outcome: Outcome,
}

impl SampleReport {
    pub fn passed(&self) -> bool {
        self.outcome == Outcome::Passed
    }

    /// Input / actual / expected renderings for a failed sample, empty when it passed.
    pub fn diff(&self) -> String {
        let actual = match &self.outcome {
            Outcome::Passed => return String::new(),
            Outcome::Mismatch { actual } => actual.to_string(),
            Outcome::Error(msg) => format!("<error: {}>", msg),
        };
        format!(
            "-> {} sample {} failed:\nInput:\n{}\nOutput:\n{}\nExpected:\n{}",
            self.split, self.index, self.input, actual, self.expected
        )
    }
}

#[derive(Debug, Clone)]
pub struct CaseReport {
    pub name: String,
    pub samples: Vec<SampleReport>,
    /// Set when the case could not be evaluated at all.
    pub error: Option<String>,
}

impl CaseReport {
    pub fn unavailable(name: &str, error: String) -> Self {
        Self { name: name.to_string(), samples: Vec::new(), error: Some(error) }
    }

    pub fn passed(&self) -> bool {
        self.error.is_none() && self.samples.iter().all(|s| s.passed())
    }

    pub fn passed_count(&self) -> usize {
        self.samples.iter().filter(|s| s.passed()).count()
    }
}

impl Sample {
    pub fn eval(&self, split: Split, transform: &dyn Transform) -> SampleReport {
        let result = panic::catch_unwind(AssertUnwindSafe(|| transform.apply(&self.input)));
        let outcome = match result {
            Ok(Ok(actual)) if actual == self.output => Outcome::Passed,
            Ok(Ok(actual)) => Outcome::Mismatch { actual },
            Ok(Err(e)) => Outcome::Error(format!("{:#}", e)),
            Err(payload) => Outcome::Error(panic_message(payload.as_ref())),
        };
        SampleReport {
            split,
            index: self.index,
            input: self.input.clone(),
            expected: self.output.clone(),
            outcome,
        }
    }
}

impl Case {
    /// Train samples first, then test samples.
    pub fn eval(&self, transform: &dyn Transform) -> CaseReport {
        let samples: Vec<SampleReport> = self.train.iter()
            .map(|s| s.eval(Split::Train, transform))
            .chain(self.test.iter().map(|s| s.eval(Split::Test, transform)))
            .collect();

        for s in &samples {
            if s.passed() {
                log::debug!("case {}: {} sample {} passed", self.name, s.split, s.index);
            } else {
                log::warn!("case {}: {} sample {} failed", self.name, s.split, s.index);
            }
        }
        CaseReport { name: self.name.clone(), samples, error: None }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {}", s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {}", s)
    } else {
        "panicked".to_string()
    }
}
