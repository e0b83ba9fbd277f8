use crate::core::selector::{select_by, Threshold};
use crate::core::{Problem, ReportEntry};
use crate::domain::model::Table;
use crate::utils::error::{ReportError, Result};

pub struct TablesProblem {
    available: Threshold<bool>,
}

impl TablesProblem {
    pub fn new() -> Self {
        Self {
            // occupied == false 代表可訂位
            available: Threshold::equal_to(false),
        }
    }
}

impl Default for TablesProblem {
    fn default() -> Self {
        Self::new()
    }
}

impl Problem for TablesProblem {
    type Item = Table;

    fn id(&self) -> &'static str {
        "tables"
    }

    fn title(&self) -> &'static str {
        "RESTAURANT TABLE AVAILABILITY"
    }

    fn heading(&self) -> &'static str {
        "🍽️  Available tables for booking:"
    }

    fn dataset(&self) -> Result<Vec<Self::Item>> {
        let capacity = [4, 2, 6, 8, 2, 4, 10, 6, 4, 2];
        let occupied = [
            true, false, true, false, true, false, true, false, true, false,
        ];

        if capacity.len() != occupied.len() {
            return Err(ReportError::LengthMismatchError {
                labels: capacity.len(),
                values: occupied.len(),
            });
        }

        Ok(capacity
            .iter()
            .zip(occupied)
            .enumerate()
            .map(|(index, (&capacity, occupied))| Table {
                number: format!("T{}", index + 1),
                capacity,
                occupied,
            })
            .collect())
    }

    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        select_by(items, |table| &table.occupied, &self.available)
    }

    fn entry(&self, position: usize, item: &Self::Item) -> ReportEntry {
        ReportEntry {
            position,
            label: item.number.clone(),
            value: item.capacity.into(),
            status: Some("AVAILABLE".to_string()),
        }
    }

    fn entry_line(&self, _position: usize, item: &Self::Item) -> String {
        format!("   🪑 Table {} - ready for guests", item.number)
    }

    fn summary(&self, _all: &[Self::Item], selected: &[Self::Item]) -> Vec<String> {
        vec![format!("🎯 Total available tables: {}", selected.len())]
    }
}
