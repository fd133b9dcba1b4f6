use anyhow::{Context, Result};
use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Width of the marker in front of every warning line of a report
const MARKER_WIDTH: usize = 2;

/// Known warnings that should not be displayed again
#[derive(Debug, Default)]
pub struct Suppressions {
    warnings: HashSet<String>,
}

impl Suppressions {
    pub fn from_warnings(warnings: impl IntoIterator<Item = String>) -> Self {
        Suppressions {
            warnings: warnings.into_iter().collect(),
        }
    }

    /// Read a suppression list, usually a previous report. The marker at the
    /// start of each line is dropped, the rest must match a warning exactly.
    pub fn from_file(path: &Path) -> Result<Self> {
        let f = File::open(path)
            .context(format!("Failed to open suppression list at {}", path.display()))?;
        Self::from_reader(BufReader::new(f))
            .context(format!("Failed to read suppression list at {}", path.display()))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut warnings = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let warning: String = line.chars().skip(MARKER_WIDTH).collect();
            if !warning.is_empty() {
                warnings.insert(warning);
            }
        }
        Ok(Suppressions { warnings })
    }

    pub fn contains(&self, warning: &str) -> bool {
        self.warnings.contains(warning)
    }

    /// Drop every suppressed warning, order kept
    pub fn filter(&self, warnings: Vec<String>) -> Vec<String> {
        warnings.into_iter().filter(|w| !self.contains(w)).collect()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }
}
