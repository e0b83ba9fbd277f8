use crate::core::selector::{count_by, select_by, Threshold};
use crate::core::{LabeledValue, Problem, ReportEntry, ReportStyle};
use crate::domain::model::{pair_labels, InventoryItem};
use crate::utils::error::Result;

pub const DEFAULT_THRESHOLD: u32 = 5;

/// Grocery stock kept as product/stock pairs.
pub struct GroceryProblem {
    threshold: Threshold<u32>,
}

impl GroceryProblem {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: Threshold::below(threshold),
        }
    }
}

impl Default for GroceryProblem {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Problem for GroceryProblem {
    type Item = LabeledValue<u32>;

    fn id(&self) -> &'static str {
        "grocery"
    }

    fn title(&self) -> &'static str {
        "GROCERY STORE INVENTORY REPORT"
    }

    fn heading(&self) -> &'static str {
        "🛒 Products low in stock:"
    }

    fn dataset(&self) -> Result<Vec<Self::Item>> {
        let names = [
            "Apples", "Bananas", "Oranges", "Grapes", "Berries", "Pears", "Mangoes", "Kiwis",
        ];
        let stock = [25, 3, 45, 8, 0, 12, 2, 30];

        pair_labels(&names, &stock)
    }

    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        tracing::debug!("Selecting products with stock {}", self.threshold);
        select_by(items, |product| &product.value, &self.threshold)
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
        format!("   🔴 {} - needs reordering", item.label)
    }

    fn summary(&self, _all: &[Self::Item], selected: &[Self::Item]) -> Vec<String> {
        vec![format!("📊 Total items needing restock: {}", selected.len())]
    }
}

/// Same inventory as [`GroceryProblem`], as named records with a category.
pub struct InventoryProblem {
    threshold: Threshold<u32>,
}

impl InventoryProblem {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: Threshold::below(threshold),
        }
    }
}

impl Default for InventoryProblem {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl Problem for InventoryProblem {
    type Item = InventoryItem;

    fn id(&self) -> &'static str {
        "inventory"
    }

    fn title(&self) -> &'static str {
        "ADVANCED INVENTORY MANAGEMENT SYSTEM"
    }

    fn heading(&self) -> &'static str {
        "📦 Items requiring immediate attention:"
    }

    fn style(&self) -> ReportStyle {
        ReportStyle::with_width(60)
    }

    fn dataset(&self) -> Result<Vec<Self::Item>> {
        Ok(vec![
            InventoryItem::new("Apples", 25, "Fruits"),
            InventoryItem::new("Bananas", 3, "Fruits"),
            InventoryItem::new("Oranges", 45, "Fruits"),
            InventoryItem::new("Grapes", 8, "Fruits"),
            InventoryItem::new("Berries", 0, "Fruits"),
            InventoryItem::new("Pears", 12, "Fruits"),
            InventoryItem::new("Mangoes", 2, "Fruits"),
            InventoryItem::new("Kiwis", 30, "Fruits"),
        ])
    }

    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item> {
        select_by(items, |item| &item.stock, &self.threshold)
    }

    fn entry(&self, position: usize, item: &Self::Item) -> ReportEntry {
        ReportEntry {
            position,
            label: item.name.clone(),
            value: item.stock.into(),
            status: Some(item.status().to_string()),
        }
    }

    fn entry_line(&self, position: usize, item: &Self::Item) -> String {
        format!(
            "   {}. {} ({}) - {} [{} units]",
            position,
            item.name,
            item.category,
            item.status(),
            item.stock
        )
    }

    fn summary(&self, all: &[Self::Item], selected: &[Self::Item]) -> Vec<String> {
        let out_of_stock = count_by(selected, |item| &item.stock, &Threshold::equal_to(0));
        let low_stock = count_by(selected, |item| &item.stock, &Threshold::above(0));

        vec![
            format!(
                "📈 Summary: {} out of {} items need attention",
                selected.len(),
                all.len()
            ),
            format!("   🔴 Out of stock: {} items", out_of_stock),
            format!("   🟡 Low stock: {} items", low_stock),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_stock_products_default_threshold() {
        let problem = GroceryProblem::default();
        let products = problem.dataset().unwrap();
        let names: Vec<String> = problem
            .select(&products)
            .into_iter()
            .map(|product| product.label)
            .collect();

        assert_eq!(names, vec!["Bananas", "Berries", "Mangoes"]);
    }

    #[test]
    fn test_custom_threshold() {
        let problem = GroceryProblem::new(10);
        let products = problem.dataset().unwrap();
        assert_eq!(problem.select(&products).len(), 4);
    }

    #[test]
    fn test_inventory_selection_and_counts() {
        let problem = InventoryProblem::default();
        let inventory = problem.dataset().unwrap();
        let low = problem.select(&inventory);

        let picked: Vec<(&str, u32)> = low.iter().map(|i| (i.name.as_str(), i.stock)).collect();
        assert_eq!(picked, vec![("Bananas", 3), ("Berries", 0), ("Mangoes", 2)]);

        let summary = problem.summary(&inventory, &low);
        assert_eq!(summary[0], "📈 Summary: 3 out of 8 items need attention");
        assert_eq!(summary[1], "   🔴 Out of stock: 1 items");
        assert_eq!(summary[2], "   🟡 Low stock: 2 items");
    }

    #[test]
    fn test_inventory_entry_line() {
        let problem = InventoryProblem::default();
        let berries = InventoryItem::new("Berries", 0, "Fruits");
        assert_eq!(
            problem.entry_line(2, &berries),
            "   2. Berries (Fruits) - OUT OF STOCK [0 units]"
        );
        assert_eq!(
            problem.entry(2, &berries).status.as_deref(),
            Some("OUT OF STOCK")
        );
    }

    #[test]
    fn test_zero_threshold_selects_nothing() {
        let problem = InventoryProblem::new(0);
        let inventory = problem.dataset().unwrap();
        assert!(problem.select(&inventory).is_empty());
    }
}
