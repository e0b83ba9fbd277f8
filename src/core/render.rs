use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::domain::model::Report;
use crate::domain::ports::ReportSink;
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

pub fn sink_for<'a, W: Write + 'a>(format: OutputFormat, out: W) -> Box<dyn ReportSink + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextSink::new(out)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
        OutputFormat::Csv => Box::new(CsvSink::new(out)),
    }
}

/// Console layout: banner, title, banner, heading, entries, banner, summary.
pub struct TextSink<W: Write> {
    out: W,
    written: usize,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, written: 0 }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for TextSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        let divider = report.style.divider();

        if self.written > 0 {
            writeln!(self.out, "\n")?;
        }

        writeln!(self.out, "{}", divider)?;
        writeln!(self.out, "{}", report.title)?;
        writeln!(self.out, "{}", divider)?;
        writeln!(self.out, "{}", report.heading)?;
        for line in &report.lines {
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "{}", divider)?;
        for line in &report.summary {
            writeln!(self.out, "{}", line)?;
        }

        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// 每份報表輸出一行 JSON (NDJSON)
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        serde_json::to_writer(&mut self.out, report)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    problem: &'a str,
    position: usize,
    label: &'a str,
    value: String,
    status: Option<&'a str>,
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            writer: csv::WriterBuilder::new().has_headers(false).from_writer(out),
            header_written: false,
        }
    }
}

impl<W: Write> ReportSink for CsvSink<W> {
    fn write_report(&mut self, report: &Report) -> Result<()> {
        if !self.header_written {
            self.writer
                .write_record(["problem", "position", "label", "value", "status"])?;
            self.header_written = true;
        }

        for entry in &report.entries {
            let value = match &entry.value {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            self.writer.serialize(CsvRow {
                problem: &report.problem,
                position: entry.position,
                label: &entry.label,
                value,
                status: entry.status.as_deref(),
            })?;
        }

        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
