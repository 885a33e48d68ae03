// Solution runner.
// Loads the case file for every registered solution, evaluates it and
// aggregates per-case reports.

use std::path::PathBuf;
use std::time::Instant;

use crate::perception::Case;
use crate::solutions::Solution;
use super::eval::CaseReport;

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub data_dir: PathBuf,
    /// Evaluate only this case.
    pub only: Option<String>,
}

#[derive(Debug)]
pub struct RunReport {
    pub cases: Vec<CaseReport>,
    pub elapsed_ms: u64,
}

pub fn run(config: &RunConfig, solutions: &[(&str, Solution)]) -> RunReport {
    let start = Instant::now();
    let mut cases = Vec::new();

    for (name, solution) in solutions {
        if config.only.as_deref().is_some_and(|only| only != *name) { continue; }

        let path = config.data_dir.join(format!("{}.json", name));
        let report = match Case::load(&path) {
            Ok(case) => case.eval(solution),
            Err(e) => {
                log::warn!("case {} unavailable: {:#}", name, e);
                CaseReport::unavailable(name, format!("{:#}", e))
            }
        };
        cases.push(report);
    }

    if let Some(only) = &config.only {
        if cases.is_empty() {
            log::warn!("no registered solution named {}", only);
        }
    }

    RunReport { cases, elapsed_ms: start.elapsed().as_millis() as u64 }
}

impl RunReport {
    pub fn solved(&self) -> usize {
        self.cases.iter().filter(|c| c.passed()).count()
    }

    pub fn all_passed(&self) -> bool {
        !self.cases.is_empty() && self.cases.iter().all(|c| c.passed())
    }

    pub fn print_summary(&self) {
        println!("=== ARC solution run ===");
        println!("Cases: {} | Passed: {} | Time: {}ms", self.cases.len(), self.solved(), self.elapsed_ms);
        for c in &self.cases {
            let status = if c.passed() { "OK" } else { "--" };
            println!("  [{}] {} ({}/{} samples)", status, c.name, c.passed_count(), c.samples.len());
        }
    }

    pub fn print_detail(&self) {
        self.print_summary();
        for c in self.cases.iter().filter(|c| !c.passed()) {
            println!("\nCase {}:", c.name);
            if let Some(e) = &c.error {
                println!("  {}", e);
            }
            for s in c.samples.iter().filter(|s| !s.passed()) {
                println!("{}", s.diff());
            }
        }
    }
}
