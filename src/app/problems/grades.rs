use crate::core::selector::{select_by, Threshold};
use crate::core::{LabeledValue, Problem, ReportEntry};
use crate::domain::model::pair_labels;
use crate::utils::error::Result;

/// Grades strictly below this need academic support.
pub const PASSING_GRADE: u32 = 70;

pub struct GradesProblem {
    threshold: Threshold<u32>,
}

impl GradesProblem {
    pub fn new() -> Self {
        Self {
            threshold: Threshold::below(PASSING_GRADE),
        }
    }
}

impl Default for GradesProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for GradesProblem {
    type Item = LabeledValue<u32>;

    fn id(&self) -> &'static str {
        "grades"
    }

    fn title(&self) -> &'static str {
        "ACADEMIC SUPPORT REPORT"
    }

    fn heading(&self) -> &'static str {
        "🎓 Students needing academic support:"
    }

    fn dataset(&self) -> Result<Vec<Self::Item>> {
        let names = [
            "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Iris", "Jack",
        ];
        let grades = [85, 67, 92, 45, 78, 55, 88, 62, 95, 40];

        pair_labels(&names, &grades)
    }

    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        select_by(items, |student| &student.value, &self.threshold)
    }

    fn entry(&self, position: usize, item: &Self::Item) -> ReportEntry {
        ReportEntry {
            position,
            label: item.label.clone(),
            value: item.value.into(),
            status: None,
        }
    }

    fn entry_line(&self, _position: usize, item: &Self::Item) -> String {
        format!("   👤 {} - requires tutoring", item.label)
    }

    fn summary(&self, _all: &[Self::Item], selected: &[Self::Item]) -> Vec<String> {
        vec![format!("📈 Total students needing support: {}", selected.len())]
    }
}
