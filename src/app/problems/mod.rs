pub mod grades;
pub mod grocery;
pub mod library;
pub mod tables;

pub use grades::GradesProblem;
pub use grocery::{GroceryProblem, InventoryProblem};
pub use library::LibraryProblem;
pub use tables::TablesProblem;

use crate::core::engine::ReportEngine;
use crate::domain::model::Report;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ProblemKind {
    Library,
    Grades,
    Tables,
    Grocery,
    Inventory,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 5] = [
        ProblemKind::Library,
        ProblemKind::Grades,
        ProblemKind::Tables,
        ProblemKind::Grocery,
        ProblemKind::Inventory,
    ];
}

/// `threshold` only applies to the grocery and inventory reports; the other
/// problems carry a fixed policy.
pub fn build_report(kind: ProblemKind, engine: &ReportEngine, threshold: u32) -> Result<Report> {
    match kind {
        ProblemKind::Library => engine.run(&LibraryProblem::new()),
        ProblemKind::Grades => engine.run(&GradesProblem::new()),
        ProblemKind::Tables => engine.run(&TablesProblem::new()),
        ProblemKind::Grocery => engine.run(&GroceryProblem::new(threshold)),
        ProblemKind::Inventory => engine.run(&InventoryProblem::new(threshold)),
    }
}

/// 依固定順序建立報表，重複指定的題目只跑一次
pub fn build_reports(
    kinds: &[ProblemKind],
    engine: &ReportEngine,
    threshold: u32,
) -> Result<Vec<Report>> {
    let mut ordered: Vec<ProblemKind> = if kinds.is_empty() {
        ProblemKind::ALL.to_vec()
    } else {
        kinds.to_vec()
    };
    ordered.sort();
    ordered.dedup();

    ordered
        .into_iter()
        .map(|kind| build_report(kind, engine, threshold))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_reports_defaults_to_all_in_order() {
        let reports = build_reports(&[], &ReportEngine::new(), grocery::DEFAULT_THRESHOLD).unwrap();
        let ids: Vec<&str> = reports.iter().map(|r| r.problem.as_str()).collect();
        assert_eq!(ids, vec!["library", "grades", "tables", "grocery", "inventory"]);
    }

    #[test]
    fn test_build_reports_orders_and_dedups() {
        let kinds = [ProblemKind::Inventory, ProblemKind::Library, ProblemKind::Inventory];
        let reports = build_reports(&kinds, &ReportEngine::new(), 5).unwrap();
        let ids: Vec<&str> = reports.iter().map(|r| r.problem.as_str()).collect();
        assert_eq!(ids, vec!["library", "inventory"]);
    }

    #[test]
    fn test_threshold_only_moves_grocery_reports() {
        let engine = ReportEngine::new();
        let grades = build_report(ProblemKind::Grades, &engine, 100).unwrap();
        let grocery = build_report(ProblemKind::Grocery, &engine, 100).unwrap();

        assert_eq!(grades.matched, 5);
        assert_eq!(grocery.matched, 8);
    }
}
