// ARC case files: `{"train": [{"input", "output"}], "test": [...]}`.
// Grids go through `Grid::new`, so a ragged row fails the whole file.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(skip)]
    pub index: usize,
    pub input: Grid,
    pub output: Grid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(skip)]
    pub name: String,
    pub train: Vec<Sample>,
    pub test: Vec<Sample>,
}

impl Case {
    pub fn from_json(name: &str, json: &str) -> anyhow::Result<Case> {
        let mut case: Case = serde_json::from_str(json)
            .with_context(|| format!("case {}: invalid ARC json", name))?;
        case.name = name.to_string();
        for (i, s) in case.train.iter_mut().enumerate() { s.index = i; }
        for (i, s) in case.test.iter_mut().enumerate() { s.index = i; }
        Ok(case)
    }

    /// Load one case; its name is the file stem.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Case> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown");
        Case::from_json(name, &content).with_context(|| format!("in {}", path.display()))
    }
}

/// Every `*.json` case in `dir`, sorted by file name. Bad files are skipped.
pub fn load_case_dir(dir: impl AsRef<Path>) -> anyhow::Result<Vec<Case>> {
    let dir = dir.as_ref();
    let mut paths: Vec<_> = std::fs::read_dir(dir)
        .with_context(|| format!("cannot read case dir {}", dir.display()))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().map(|ext| ext == "json").unwrap_or(false))
        .collect();
    paths.sort();

    let mut cases = Vec::with_capacity(paths.len());
    for path in &paths {
        match Case::load(path) {
            Ok(c) => cases.push(c),
            Err(e) => log::warn!("skipping {}: {:#}", path.display(), e),
        }
    }
    log::debug!("loaded {} of {} cases from {}", cases.len(), paths.len(), dir.display());
    Ok(cases)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASE: &str = r#"{
        "train": [
            {"input": [[8, 6], [6, 4]], "output": [[1]]},
            {"input": [[7, 9], [4, 3]], "output": [[2]]}
        ],
        "test": [
            {"input": [[3, 2], [7, 8]], "output": [[3]]}
        ]
    }"#;

    #[test]
    fn parse_case() {
        let c = Case::from_json("00576224", CASE).unwrap();
        assert_eq!(c.name, "00576224");
        assert_eq!(c.train.len(), 2);
        assert_eq!(c.test.len(), 1);
        assert_eq!(c.train[1].index, 1);
        assert_eq!(c.train[0].input.at(1, 1), Ok(4));
        assert_eq!(c.test[0].output.at(0, 0), Ok(3));
    }

    #[test]
    fn ragged_grid_is_rejected() {
        let bad = r#"{"train": [{"input": [[1, 2], [3]], "output": [[1]]}], "test": []}"#;
        let err = Case::from_json("bad", bad).unwrap_err();
        assert!(format!("{:#}", err).contains("malformed grid"));
    }

    #[test]
    fn missing_split_is_rejected() {
        assert!(Case::from_json("bad", r#"{"train": []}"#).is_err());
    }

    #[test]
    fn load_dir_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("b.json"), CASE).unwrap();
        std::fs::write(dir.path().join("a.json"), CASE).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let cases = load_case_dir(dir.path()).unwrap();
        let names: Vec<_> = cases.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Case::load(dir.path().join("nope.json")).is_err());
    }
}
