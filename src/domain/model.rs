use serde::{Deserialize, Serialize};

use crate::utils::error::{ReportError, Result};

/// A label paired with the attribute it is filtered on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue<V> {
    pub label: String,
    pub value: V,
}

impl<V> LabeledValue<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// 將平行陣列 (labels, values) 轉成單一記錄序列，長度不一致時回報錯誤
pub fn pair_labels<L, V>(labels: &[L], values: &[V]) -> Result<Vec<LabeledValue<V>>>
where
    L: AsRef<str>,
    V: Clone,
{
    if labels.len() != values.len() {
        return Err(ReportError::LengthMismatchError {
            labels: labels.len(),
            values: values.len(),
        });
    }

    Ok(labels
        .iter()
        .zip(values)
        .map(|(label, value)| LabeledValue::new(label.as_ref(), value.clone()))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub stock: u32,
    pub category: String,
}

impl InventoryItem {
    pub fn new(name: &str, stock: u32, category: &str) -> Self {
        Self {
            name: name.to_string(),
            stock,
            category: category.to_string(),
        }
    }

    pub fn status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
}

impl StockStatus {
    pub fn from_stock(stock: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else {
            StockStatus::LowStock
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::OutOfStock => write!(f, "OUT OF STOCK"),
            StockStatus::LowStock => write!(f, "LOW STOCK"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: String,
    pub capacity: u32,
    pub occupied: bool,
}

/// Fill character and width of the `=====` banner lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStyle {
    pub width: usize,
    pub fill: char,
}

impl ReportStyle {
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn divider(&self) -> String {
        self.fill.to_string().repeat(self.width)
    }
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            width: 50,
            fill: '=',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// 1-based position within the result set.
    pub position: usize,
    pub label: String,
    pub value: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Everything needed to render one problem, independent of output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub problem: String,
    pub title: String,
    #[serde(skip)]
    pub style: ReportStyle,
    pub heading: String,
    #[serde(skip)]
    pub lines: Vec<String>,
    pub entries: Vec<ReportEntry>,
    pub summary: Vec<String>,
    pub matched: usize,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_labels_keeps_order() {
        let paired = pair_labels(&["T1", "T2", "T3"], &[true, false, true]).unwrap();
        assert_eq!(paired.len(), 3);
        assert_eq!(paired[1], LabeledValue::new("T2", false));
    }

    #[test]
    fn test_pair_labels_rejects_mismatch() {
        let result = pair_labels(&["Alice", "Bob"], &[85u32]);
        match result {
            Err(ReportError::LengthMismatchError { labels, values }) => {
                assert_eq!(labels, 2);
                assert_eq!(values, 1);
            }
            other => panic!("expected length mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_pair_labels_empty() {
        let paired = pair_labels::<&str, u32>(&[], &[]).unwrap();
        assert!(paired.is_empty());
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(InventoryItem::new("Berries", 0, "Fruits").status(), StockStatus::OutOfStock);
        assert_eq!(InventoryItem::new("Bananas", 3, "Fruits").status(), StockStatus::LowStock);
        assert_eq!(StockStatus::OutOfStock.to_string(), "OUT OF STOCK");
    }

    #[test]
    fn test_report_style_divider() {
        assert_eq!(ReportStyle::default().divider(), "=".repeat(50));
        assert_eq!(ReportStyle::with_width(60).divider().chars().count(), 60);
    }
}
