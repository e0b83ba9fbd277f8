use crate::domain::model::{Report, ReportEntry};
use crate::domain::ports::Problem;
use crate::utils::error::Result;

pub struct ReportEngine {
    fill: char,
}

impl ReportEngine {
    pub fn new() -> Self {
        Self { fill: '=' }
    }

    pub fn with_fill(fill: char) -> Self {
        Self { fill }
    }

    pub fn run<P: Problem>(&self, problem: &P) -> Result<Report> {
        // Extract
        tracing::debug!("Loading dataset for {}", problem.id());
        let items = problem.dataset()?;

        // Select
        let selected = problem.select(&items);
        tracing::info!(
            "🔍 {}: {} of {} entries matched",
            problem.id(),
            selected.len(),
            items.len()
        );

        // Report
        let entries: Vec<ReportEntry> = selected
            .iter()
            .enumerate()
            .map(|(index, item)| problem.entry(index + 1, item))
            .collect();
        let lines = selected
            .iter()
            .enumerate()
            .map(|(index, item)| problem.entry_line(index + 1, item))
            .collect();

        let mut style = problem.style();
        style.fill = self.fill;

        Ok(Report {
            problem: problem.id().to_string(),
            title: problem.title().to_string(),
            style,
            heading: problem.heading().to_string(),
            lines,
            entries,
            summary: problem.summary(&items, &selected),
            matched: selected.len(),
            total: items.len(),
        })
    }
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::new()
    }
}
