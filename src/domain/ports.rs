use crate::domain::model::{Report, ReportEntry, ReportStyle};
use crate::utils::error::Result;

/// One filter-and-report exercise: a fixed dataset, a selection rule and the
/// wording used to present the matches.
pub trait Problem {
    type Item: Clone;

    fn id(&self) -> &'static str;
    fn title(&self) -> &'static str;
    fn heading(&self) -> &'static str;

    fn style(&self) -> ReportStyle {
        ReportStyle::default()
    }

    fn dataset(&self) -> Result<Vec<Self::Item>>;
    fn select(&self, items: &[Self::Item]) -> Vec<Self::Item>;

    fn entry(&self, position: usize, item: &Self::Item) -> ReportEntry;
    fn entry_line(&self, position: usize, item: &Self::Item) -> String;
    fn summary(&self, all: &[Self::Item], selected: &[Self::Item]) -> Vec<String>;
}

pub trait ReportSink {
    fn write_report(&mut self, report: &Report) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}
