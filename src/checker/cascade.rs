use super::Checker;
use crate::{config::Sections, debug, suppress::Suppressions, types::Priority};

use std::fmt;

/// One step of the cascading check, in the order they run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    FullPool,
    BaseSection,
    /// Every package of this priority or a more essential one
    UpTo(Priority),
    WithoutLegacyLibs,
}

impl Stage {
    pub fn header(&self) -> String {
        match self {
            Stage::FullPool => "Unsatisfiable within full pool:".to_string(),
            Stage::BaseSection => "Unsatisfiable within base section:".to_string(),
            Stage::UpTo(priority) => format!("Unsatisfiable with {} packages:", priority),
            Stage::WithoutLegacyLibs => {
                "Unsatisfiable once legacy-library packages are excluded:".to_string()
            }
        }
    }
}

/// Warnings first surfaced by a stage, suppressed ones already removed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StageReport {
    pub stage: Stage,
    pub warnings: Vec<String>,
    pub suppressed: usize,
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.warnings.is_empty() {
            return Ok(());
        }
        writeln!(f, "{}", self.stage.header())?;
        for warning in &self.warnings {
            writeln!(f, "  {}", warning)?;
        }
        writeln!(f)
    }
}

/// Run every stage over the checker's pool.
///
/// Stages share the pool and run strictly in order: a relation reported by
/// one stage has been pruned and is never reported by a later one.
pub fn run(checker: &mut Checker, sections: &Sections, suppress: &Suppressions) -> Vec<StageReport> {
    let mut reports = Vec::new();
    let mut report = |stage: Stage, warnings: Vec<String>| {
        let total = warnings.len();
        let warnings = suppress.filter(warnings);
        let suppressed = total - warnings.len();
        debug!(
            "{:?}: {} new warnings, {} suppressed",
            stage,
            warnings.len(),
            suppressed
        );
        reports.push(StageReport {
            stage,
            warnings,
            suppressed,
        });
    };

    let all = checker.pool.ids();
    report(Stage::FullPool, checker.check_within(&all));

    let base = checker.pool.select(&all, |p| p.section == sections.base);
    report(Stage::BaseSection, checker.check_within(&base));

    let mut current = Vec::new();
    for priority in Priority::ALL {
        current = checker.pool.up_to_priority(priority);
        report(Stage::UpTo(priority), checker.check_within(&current));
    }

    let current = checker.pool.select(&current, |p| p.section != sections.legacy);
    report(Stage::WithoutLegacyLibs, checker.check_within(&current));

    reports
}
