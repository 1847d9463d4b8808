//! Hand-off of a solver trace to an external plotting component.
//!
//! Nothing here renders; it only names and orders the series so a chart can
//! show `price`, `buy0`, `sell0`, `buy1`, `sell1`, ... with x = step index.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::config::OutputFormat;
use crate::errors::Result;
use crate::tracer::{Price, Trace};

/// One labelled line of `(step, value)` points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedSeries<T> {
    pub name: String,
    pub points: Vec<(usize, T)>,
}

/// Ordered set of series built from a [`Trace`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesCollection<T> {
    pub series: Vec<NamedSeries<T>>,
}

impl<T: Price + Serialize> SeriesCollection<T> {
    pub fn from_trace(trace: &Trace<T>) -> Self {
        let mut series = Vec::with_capacity(trace.series_count());
        series.extend(trace.iter().map(|(role, values)| NamedSeries {
            name: role.to_string(),
            points: values.iter().copied().enumerate().collect(),
        }));
        Self { series }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&NamedSeries<T>> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Plain-text table: one row per step, one column per series.
    pub fn to_table(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::from("step");
        for name in self.names() {
            out.push('\t');
            out.push_str(name);
        }
        out.push('\n');

        let rows = self.series.first().map_or(0, |s| s.points.len());
        for step in 0..rows {
            out.push_str(&step.to_string());
            for s in &self.series {
                out.push('\t');
                if let Some((_, v)) = s.points.get(step) {
                    out.push_str(&v.to_string());
                }
            }
            out.push('\n');
        }
        out
    }

    /// Render in `format` and write it, newline-terminated, to `out`.
    pub fn write_to<W: io::Write>(&self, mut out: W, format: OutputFormat) -> Result<()>
    where
        T: fmt::Display,
    {
        match format {
            OutputFormat::Json => writeln!(out, "{}", self.to_json()?)?,
            OutputFormat::Table => out.write_all(self.to_table().as_bytes())?,
        }
        out.flush()?;
        Ok(())
    }
}
