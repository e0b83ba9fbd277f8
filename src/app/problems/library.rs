use crate::core::selector::{select_by, Threshold};
use crate::core::{LabeledValue, Problem, ReportEntry};
use crate::domain::model::pair_labels;
use crate::utils::error::Result;

/// Library policy: restock when 3 or fewer copies are left.
pub const RESTOCK_AT_MOST: u32 = 3;

pub struct LibraryProblem {
    threshold: Threshold<u32>,
}

impl LibraryProblem {
    pub fn new() -> Self {
        Self {
            threshold: Threshold::at_most(RESTOCK_AT_MOST),
        }
    }
}

impl Default for LibraryProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for LibraryProblem {
    type Item = LabeledValue<u32>;

    fn id(&self) -> &'static str {
        "library"
    }

    fn title(&self) -> &'static str {
        "LIBRARY INVENTORY REPORT"
    }

    fn heading(&self) -> &'static str {
        "📚 Books needing restocking:"
    }

    fn dataset(&self) -> Result<Vec<Self::Item>> {
        let titles = [
            "JavaScript Basics",
            "Python Guide",
            "Web Development",
            "Data Structures",
            "Algorithms",
            "React Fundamentals",
            "Node.js",
            "Database Design",
            "Machine Learning",
            "CSS Mastery",
        ];
        let copies = [12, 2, 25, 1, 0, 8, 3, 15, 20, 4];

        pair_labels(&titles, &copies)
    }

    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        tracing::debug!("Selecting books with copies {}", self.threshold);
        select_by(items, |book| &book.value, &self.threshold)
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
        format!("   📖 \"{}\" - needs immediate attention", item.label)
    }

    fn summary(&self, _all: &[Self::Item], selected: &[Self::Item]) -> Vec<String> {
        vec![format!("📊 Total books needing restock: {}", selected.len())]
    }
}
