//! Graph collection and report output.
//!
//! A [`Report`] is an ordered list of graphs. Each graph holds one row per
//! `(series, group)` sample, where the series is the container label and the
//! group is the input size.
//!
//! ```text
//!   Report
//!     ├── Graph "fill_back - TrivialSmall"   unit = us
//!     │     ├── ("vector",         "100000", 412)
//!     │     ├── ("list",           "100000", 3071)
//!     │     └── ("vector reserve", "100000", 280)
//!     └── Graph "sort - TrivialSmall"        unit = ms
//!           └── ...
//! ```
//!
//! ## Formats
//!
//! | Format                        | File          | Contents                                   |
//! |-------------------------------|---------------|--------------------------------------------|
//! | [`OutputFormat::GoogleCharts`]| `graph.html`  | one Google `LineChart` per graph           |
//! | [`OutputFormat::Json`]        | `results.json`| every graph and sample, plus run metadata  |
//!
//! Chart rows follow the order in which sizes were first recorded and
//! columns the order in which series were first recorded. A series without
//! a sample at some size is written as `null`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::HarnessError;

/// Bumped whenever the JSON layout changes.
pub const SCHEMA_VERSION: u32 = 1;

const HTML_FILE: &str = "graph.html";
const JSON_FILE: &str = "results.json";

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[serde(rename = "google")]
    GoogleCharts,
    #[serde(rename = "json")]
    Json,
}

/// Unit in which a graph reports averaged durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnit {
    #[serde(rename = "us")]
    Micros,
    #[serde(rename = "ms")]
    Millis,
}

impl TimeUnit {
    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Micros => "us",
            TimeUnit::Millis => "ms",
        }
    }

    /// Whole units in `duration`, truncated.
    pub fn count(self, duration: Duration) -> u64 {
        let count = match self {
            TimeUnit::Micros => duration.as_micros(),
            TimeUnit::Millis => duration.as_millis(),
        };
        u64::try_from(count).unwrap_or(u64::MAX)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    pub series: String,
    pub group: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Identifier safe for HTML ids and JS function names.
    pub name: String,
    pub title: String,
    pub unit: TimeUnit,
    pub results: Vec<ResultRow>,
}

impl Graph {
    /// Groups in first-recorded order.
    pub fn groups(&self) -> Vec<&str> {
        first_seen(self.results.iter().map(|row| row.group.as_str()))
    }

    /// Series in first-recorded order.
    pub fn series(&self) -> Vec<&str> {
        first_seen(self.results.iter().map(|row| row.series.as_str()))
    }

    /// Looks up the sample for `(series, group)`.
    pub fn value(&self, series: &str, group: &str) -> Option<u64> {
        self.results
            .iter()
            .rev()
            .find(|row| row.series == series && row.group == group)
            .map(|row| row.value)
    }
}

fn first_seen<'a>(items: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = FxHashSet::default();
    let mut ordered = Vec::new();
    for item in items {
        if seen.insert(item) {
            ordered.push(item);
        }
    }
    ordered
}

/// Replaces every character that is not ASCII alphanumeric or `_` with `_`.
pub fn tag(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

#[derive(Debug, Serialize)]
struct JsonArtifact<'a> {
    schema_version: u32,
    generated_at: String,
    graphs: &'a [Graph],
}

/// Every graph recorded during a run.
#[derive(Debug, Default, Clone)]
pub struct Report {
    graphs: Vec<Graph>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a graph titled `"<family> - <element>"`. Subsequent results
    /// land in it.
    pub fn new_graph(&mut self, element: &str, family: &str, unit: TimeUnit) -> &mut Graph {
        let title = format!("{family} - {element}");
        let name = tag(&title);
        info!(event = "graph_start", graph = %name, unit = unit.label());
        self.graphs.push(Graph {
            name,
            title,
            unit,
            results: Vec::new(),
        });
        let last = self.graphs.len() - 1;
        &mut self.graphs[last]
    }

    /// Records one sample in the current graph.
    pub fn new_result(&mut self, series: &str, group: &str, value: u64) {
        let Some(graph) = self.graphs.last_mut() else {
            warn!(event = "orphan_result", series, group, value);
            return;
        };
        info!(event = "sample", graph = %graph.name, series, group, value);
        graph.results.push(ResultRow {
            series: series.to_owned(),
            group: group.to_owned(),
            value,
        });
    }

    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Total number of samples over every graph.
    pub fn sample_count(&self) -> usize {
        self.graphs.iter().map(|g| g.results.len()).sum()
    }

    /// Writes the report in `format` under `dir` and returns the file path.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` cannot be created or the file cannot be
    /// written.
    pub fn output(
        &self,
        format: OutputFormat,
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf, HarnessError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let (path, contents) = match format {
            OutputFormat::GoogleCharts => (dir.join(HTML_FILE), self.render_google_charts()?),
            OutputFormat::Json => (dir.join(JSON_FILE), self.render_json()?),
        };
        std::fs::write(&path, contents)?;
        info!(event = "report_written", format = ?format, path = %path.display());
        Ok(path)
    }

    /// Renders every graph as a Google `LineChart` page.
    pub fn render_google_charts(&self) -> Result<String, HarnessError> {
        let mut html = String::new();
        html.push_str("<script type=\"text/javascript\" src=\"https://www.gstatic.com/charts/loader.js\"></script>\n");
        html.push_str("<script type=\"text/javascript\">\n");
        html.push_str("google.charts.load('current', {packages: ['corechart']});\n");

        for graph in &self.graphs {
            let series = graph.series();
            let mut header = vec![js_string("x")?];
            for name in &series {
                header.push(js_string(name)?);
            }

            // writing into a String is infallible
            let _ = writeln!(html, "function draw_{}(){{", graph.name);
            html.push_str("var data = google.visualization.arrayToDataTable([\n");
            let _ = writeln!(html, "[{}],", header.join(", "));
            for group in graph.groups() {
                let mut row = vec![js_string(group)?];
                for name in &series {
                    row.push(match graph.value(name, group) {
                        Some(value) => value.to_string(),
                        None => "null".to_owned(),
                    });
                }
                let _ = writeln!(html, "[{}],", row.join(", "));
            }
            html.push_str("]);\n");
            let _ = writeln!(
                html,
                "new google.visualization.LineChart(document.getElementById({})).draw(data, \
                 {{curveType: \"function\", title: {}, width: 600, height: 400, \
                 hAxis: {{title: \"Number of elements\", slantedText: true}}, \
                 vAxis: {{viewWindow: {{min: 0}}, title: {}}}}});",
                js_string(&graph.name)?,
                js_string(&graph.title)?,
                js_string(graph.unit.label())?,
            );
            html.push_str("}\n");
        }

        html.push_str("function draw_all(){\n");
        for graph in &self.graphs {
            let _ = writeln!(html, "draw_{}();", graph.name);
        }
        html.push_str("}\n");
        html.push_str("google.charts.setOnLoadCallback(draw_all);\n");
        html.push_str("</script>\n\n");

        for graph in &self.graphs {
            let _ = writeln!(
                html,
                "<div id=\"{}\" style=\"width: 600px; height: 400px;\"></div>",
                graph.name
            );
        }
        Ok(html)
    }

    /// Serializes every graph with run metadata.
    pub fn render_json(&self) -> Result<String, HarnessError> {
        let artifact = JsonArtifact {
            schema_version: SCHEMA_VERSION,
            generated_at: Utc::now().to_rfc3339(),
            graphs: &self.graphs,
        };
        Ok(serde_json::to_string_pretty(&artifact)?)
    }
}

fn js_string(raw: &str) -> Result<String, HarnessError> {
    Ok(serde_json::to_string(raw)?)
}
