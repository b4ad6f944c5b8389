//! Page registry and the page render pipeline.
//!
//! A page is static content (`Content`) evaluated against the cached
//! dataset into a flat list of `Element`s that the UI draws top to bottom.

mod content;

use tracing::{debug, error, warn};

use crate::{
    charts::{ChartSpec, Figure},
    data::{
        stats::{median, mode},
        Dataset, Table,
    },
};

pub use content::PAGES;

/// Sidebar section a page is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Menu,
    Analysis,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Menu => "Menu",
            Section::Analysis => "Analysis",
        }
    }
}

/// A registered dashboard page.
#[derive(Debug)]
pub struct Page {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub section: Section,
    pub default: bool,
    /// Heading shown at the top of the page body.
    pub heading: &'static str,
    /// Shown instead of the content when no data is available.
    pub empty_message: &'static str,
    pub content: &'static [Content],
}

/// Static building blocks of a page.
#[derive(Debug)]
pub enum Content {
    Subheader(&'static str),
    Success(&'static str),
    Info(&'static str),
    Markdown(&'static str),
    Divider,
    /// First rows of the table.
    Preview { rows: usize },
    Metrics(&'static [MetricSpec]),
    Chart {
        heading: &'static str,
        spec: ChartSpec,
    },
}

/// A metric callout: either a transcribed constant or computed live.
#[derive(Debug)]
pub enum MetricSpec {
    Fixed {
        label: &'static str,
        value: &'static str,
        help: &'static str,
    },
    Computed {
        label: &'static str,
        stat: Stat,
        help: &'static str,
    },
}

/// Runtime statistics available to metric callouts.
#[derive(Debug, Clone, Copy)]
pub enum Stat {
    RowCount,
    Median(&'static str),
    Mode(&'static str),
}

/// Rendered metric card.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub help: String,
}

/// Head rows for the data preview.
#[derive(Debug, Clone)]
pub struct Preview {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One drawable item on a rendered page.
#[derive(Debug, Clone)]
pub enum Element {
    Title(String),
    Subheader(String),
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
    Markdown(String),
    Divider,
    Metrics(Vec<Metric>),
    Preview(Preview),
    Chart(Figure),
}

/// Looks a page up by id, falling back to the default page.
pub fn find(id: &str) -> &'static Page {
    PAGES
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .unwrap_or_else(default_page)
}

pub fn default_page() -> &'static Page {
    PAGES.iter().find(|p| p.default).unwrap_or(&PAGES[0])
}

/// Position of a page in the sidebar order.
pub fn index_of(page: &Page) -> usize {
    PAGES.iter().position(|p| p.id == page.id).unwrap_or(0)
}

/// Evaluates a page against the dataset.
///
/// A failed load adds an error callout; an empty table halts the page after
/// its info message. Missing columns only replace the affected chart with a
/// warning.
#[tracing::instrument(skip(page, dataset), fields(page = page.id))]
pub fn render(page: &Page, dataset: &Dataset) -> Vec<Element> {
    let mut out = vec![Element::Title(page.heading.to_owned())];

    if let Some(err) = &dataset.error {
        out.push(Element::Error(format!("Error loading data: {err}")));
    }
    if dataset.is_empty() {
        debug!("no data, halting page");
        out.push(Element::Info(page.empty_message.to_owned()));
        return out;
    }

    let table = dataset.table.as_ref();
    for item in page.content {
        render_content(item, table, &mut out);
    }
    out
}

fn render_content(item: &Content, table: &Table, out: &mut Vec<Element>) {
    match item {
        Content::Subheader(s) => out.push(Element::Subheader((*s).to_owned())),
        Content::Success(s) => out.push(Element::Success((*s).to_owned())),
        Content::Info(s) => out.push(Element::Info((*s).to_owned())),
        Content::Markdown(s) => out.push(Element::Markdown((*s).to_owned())),
        Content::Divider => out.push(Element::Divider),
        Content::Preview { rows } => out.push(Element::Preview(Preview {
            headers: table.headers().to_vec(),
            rows: table.head(*rows).to_vec(),
        })),
        Content::Metrics(specs) => {
            let mut metrics = Vec::with_capacity(specs.len());
            let mut warnings = Vec::new();
            for spec in specs.iter() {
                match evaluate_metric(spec, table) {
                    Ok(m) => metrics.push(m),
                    Err(msg) => warnings.push(Element::Warning(msg)),
                }
            }
            if !metrics.is_empty() {
                out.push(Element::Metrics(metrics));
            }
            out.extend(warnings);
        }
        Content::Chart { heading, spec } => {
            out.push(Element::Subheader((*heading).to_owned()));
            match spec.build(table) {
                Ok(fig) => out.push(Element::Chart(fig)),
                Err(e) => match e.missing_column() {
                    Some(column) => {
                        warn!(chart = spec.title(), column, "chart skipped");
                        out.push(Element::Warning(spec.missing_message()));
                    }
                    None => {
                        error!(chart = spec.title(), error = %e, "chart failed");
                        out.push(Element::Error(format!("Cannot draw '{}': {e}", spec.title())));
                    }
                },
            }
        }
    }
}

fn evaluate_metric(spec: &MetricSpec, table: &Table) -> Result<Metric, String> {
    match *spec {
        MetricSpec::Fixed { label, value, help } => Ok(Metric {
            label: label.to_owned(),
            value: value.to_owned(),
            help: help.to_owned(),
        }),
        MetricSpec::Computed { label, stat, help } => {
            let value = match stat {
                Stat::RowCount => table.len().to_string(),
                Stat::Median(col) => {
                    let column = table.column(col).map_err(|_| missing_metric(label, col))?;
                    median(&column.numeric_values())
                        .map(|v| format!("{v:.1}"))
                        .unwrap_or_else(|| "n/a".to_owned())
                }
                Stat::Mode(col) => {
                    let column = table.column(col).map_err(|_| missing_metric(label, col))?;
                    mode(column.categories().flatten()).unwrap_or_else(|| "n/a".to_owned())
                }
            };
            Ok(Metric {
                label: label.to_owned(),
                value,
                help: help.to_owned(),
            })
        }
    }
}

fn missing_metric(label: &str, col: &str) -> String {
    warn!(metric = label, column = col, "metric skipped");
    format!("Column '{col}' not found in the dataset for the '{label}' metric.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use std::sync::Arc;

    const HEADERS: &[&str] = &[
        "age_midpoint",
        "marital_status",
        "education_level",
        "mental_health_status",
        "religion",
        "addicted_with",
        "family_history_of_drug_use",
        "friends_influence",
        "smoking",
        "failure_in_life_numeric",
        "mental/emotional_problem",
        "age_of_first_use_midpoint",
    ];

    const ROWS: &[&[&str]] = &[
        &["22.5", "Not Married", "Undergrad", "Poor", "Islam", "Cannabis", "Never", "Yes", "Yes", "1", "Tension/Anxiety", "17.5"],
        &["22.5", "Not Married", "Undergrad", "Poor", "Islam", "Heroin", "Never", "Yes", "Yes", "1", "Tension/Anxiety", "15"],
        &["27.5", "Married", "Postgrad", "Good", "Christian", "Alcohol", "Sometimes", "No", "No", "0", "None", "20"],
        &["32.5", "Not Married", "Secondary", "Average", "Hindu", "Cannabis", "Never", "Yes", "No", "0", "Depression", "22.5"],
        &["17.5", "Divorced", "Undergrad", "Poor", "Islam", "Alcohol", "Always", "No", "Yes", "1", "Tension/Anxiety", "12.5"],
    ];

    fn fixture(skip: Option<&str>) -> Dataset {
        let keep: Vec<usize> = (0..HEADERS.len())
            .filter(|&i| Some(HEADERS[i]) != skip)
            .collect();
        let headers = keep.iter().map(|&i| HEADERS[i].to_string()).collect();
        let rows = ROWS
            .iter()
            .map(|r| keep.iter().map(|&i| r[i].to_string()).collect())
            .collect();
        Dataset {
            url: "fixture.csv".into(),
            table: Arc::new(Table::new(headers, rows)),
            error: None,
            loaded_at: Local::now(),
        }
    }

    fn warnings(elements: &[Element]) -> Vec<&str> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Warning(w) => Some(w.as_str()),
                _ => None,
            })
            .collect()
    }

    fn chart_titles(elements: &[Element]) -> Vec<&'static str> {
        elements
            .iter()
            .filter_map(|e| match e {
                Element::Chart(f) => Some(f.title()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_full_dataset_renders_every_chart() {
        let dataset = fixture(None);
        let mut charts = 0;
        for page in PAGES {
            let out = render(page, &dataset);
            assert!(warnings(&out).is_empty(), "warnings on {}", page.id);
            assert!(!out.iter().any(|e| matches!(e, Element::Error(_))));
            charts += chart_titles(&out).len();
        }
        assert_eq!(charts, 9);
    }

    #[test]
    fn test_missing_column_scoped_to_dependent_charts() {
        let dataset = fixture(Some("smoking"));

        let social = render(find("social"), &dataset);
        assert_eq!(
            warnings(&social),
            vec![
                "One or more required columns ('mental/emotional_problem', \
                 'age_of_first_use_midpoint', 'smoking') not found for the box plot."
            ]
        );
        assert_eq!(chart_titles(&social).len(), 2);

        // Pages without a smoking chart are untouched.
        for id in ["main", "correlations", "home"] {
            assert!(warnings(&render(find(id), &dataset)).is_empty());
        }
    }

    #[test]
    fn test_missing_column_degrades_computed_metric() {
        let dataset = fixture(Some("marital_status"));
        let home = render(find("home"), &dataset);
        let w = warnings(&home);
        assert_eq!(w.len(), 1);
        assert!(w[0].contains("marital_status"));
        let metrics = home
            .iter()
            .find_map(|e| match e {
                Element::Metrics(m) => Some(m),
                _ => None,
            })
            .unwrap();
        assert_eq!(metrics.len(), 3);
    }

    #[test]
    fn test_failed_load_halts_before_charts() {
        let dataset = Dataset {
            url: "http://127.0.0.1:9/df.csv".into(),
            table: Arc::new(Table::default()),
            error: Some("connection refused".into()),
            loaded_at: Local::now(),
        };
        for page in PAGES {
            let out = render(page, &dataset);
            assert!(matches!(out[0], Element::Title(_)));
            assert!(matches!(&out[1], Element::Error(e) if e.contains("connection refused")));
            assert!(matches!(&out[2], Element::Info(m) if m == page.empty_message));
            assert_eq!(out.len(), 3);
        }
    }

    #[test]
    fn test_home_summary_metrics() {
        let home = render(find("home"), &fixture(None));
        let metrics = home
            .iter()
            .find_map(|e| match e {
                Element::Metrics(m) => Some(m.clone()),
                _ => None,
            })
            .unwrap();
        let values: Vec<&str> = metrics.iter().map(|m| m.value.as_str()).collect();
        // Alcohol and Cannabis tie at two; category order picks Alcohol
        assert_eq!(values, vec!["5", "22.5", "Not Married", "Alcohol"]);
    }

    #[test]
    fn test_registry() {
        assert_eq!(default_page().id, "home");
        assert_eq!(find("unknown").id, "home");
        assert_eq!(find("CORRELATIONS").section, Section::Analysis);
        assert_eq!(index_of(find("correlations")), 3);
    }
}
