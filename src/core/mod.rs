pub mod engine;
pub mod render;
pub mod selector;

pub use crate::domain::model::{LabeledValue, Report, ReportEntry, ReportStyle};
pub use crate::domain::ports::{Problem, ReportSink};
pub use crate::utils::error::Result;
