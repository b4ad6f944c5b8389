//! Chart definitions and the figures built from them.
//!
//! A `ChartSpec` names the columns a chart reads; `build` turns it into a
//! `Figure` holding only the aggregates the widget needs. A missing column
//! surfaces as `Error::MissingColumn`, which the page turns into a warning.

use std::collections::HashMap;

use crate::{
    data::{
        stats::{self, Bin, BoxStats, Crosstab, GroupedSeries},
        Table,
    },
    error::Result,
};

/// Qualitative colour sequences for categorical series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Palette {
    T10,
    Vivid,
    Bold,
    Dark24,
}

/// Static description of one chart on a page.
#[derive(Debug, Clone, Copy)]
pub enum ChartSpec {
    Histogram {
        title: &'static str,
        x: &'static str,
        nbins: usize,
        x_title: &'static str,
        y_title: &'static str,
        marginal_box: bool,
        palette: Palette,
    },
    Pie {
        title: &'static str,
        names: &'static str,
        hole: f64,
    },
    Heatmap {
        title: &'static str,
        rows: &'static str,
        cols: &'static str,
        x_title: &'static str,
        y_title: &'static str,
    },
    /// Row counts per x category, one bar per colour group.
    GroupedCount {
        title: &'static str,
        x: &'static str,
        color: &'static str,
        x_title: &'static str,
        y_title: &'static str,
        legend: &'static str,
        palette: Palette,
    },
    /// Mean of `y` per x category, one bar per colour group.
    GroupedMean {
        title: &'static str,
        x: &'static str,
        y: &'static str,
        color: &'static str,
        x_title: &'static str,
        y_title: &'static str,
        legend: &'static str,
        palette: Palette,
    },
    Box {
        title: &'static str,
        x: &'static str,
        y: &'static str,
        color: &'static str,
        x_title: &'static str,
        y_title: &'static str,
        legend: &'static str,
        palette: Palette,
    },
}

impl ChartSpec {
    pub fn title(&self) -> &'static str {
        match *self {
            ChartSpec::Histogram { title, .. }
            | ChartSpec::Pie { title, .. }
            | ChartSpec::Heatmap { title, .. }
            | ChartSpec::GroupedCount { title, .. }
            | ChartSpec::GroupedMean { title, .. }
            | ChartSpec::Box { title, .. } => title,
        }
    }

    /// Columns the chart reads, in lookup order.
    pub fn columns(&self) -> Vec<&'static str> {
        match *self {
            ChartSpec::Histogram { x, .. } => vec![x],
            ChartSpec::Pie { names, .. } => vec![names],
            ChartSpec::Heatmap { rows, cols, .. } => vec![rows, cols],
            ChartSpec::GroupedCount { x, color, .. } => vec![x, color],
            ChartSpec::GroupedMean { x, y, color, .. } | ChartSpec::Box { x, y, color, .. } => {
                vec![x, y, color]
            }
        }
    }

    /// Warning shown in place of the chart when a column is absent.
    pub fn missing_message(&self) -> String {
        let kind = match self {
            ChartSpec::Histogram { .. } => "histogram",
            ChartSpec::Pie { .. } => "pie chart",
            ChartSpec::Heatmap { .. } => "heatmap",
            ChartSpec::GroupedCount { .. } | ChartSpec::GroupedMean { .. } => "bar chart",
            ChartSpec::Box { .. } => "box plot",
        };
        let cols = self.columns();
        if let [only] = cols.as_slice() {
            format!("Column '{only}' not found in the dataset for the {kind}.")
        } else {
            let quoted: Vec<String> = cols.iter().map(|c| format!("'{c}'")).collect();
            format!(
                "One or more required columns ({}) not found for the {kind}.",
                quoted.join(", ")
            )
        }
    }

    /// Computes the chart's aggregates from the table.
    pub fn build(&self, table: &Table) -> Result<Figure> {
        let fig = match *self {
            ChartSpec::Histogram {
                title,
                x,
                nbins,
                x_title,
                y_title,
                marginal_box,
                palette,
            } => {
                let values = table.column(x)?.numeric_values();
                Figure::Histogram(HistogramFigure {
                    title,
                    x_title,
                    y_title,
                    bins: stats::histogram(&values, nbins),
                    marginal: if marginal_box {
                        BoxStats::from_values(&values)
                    } else {
                        None
                    },
                    palette,
                })
            }
            ChartSpec::Pie { title, names, hole } => {
                let col = table.column(names)?;
                Figure::Pie(PieFigure {
                    title,
                    slices: stats::value_counts(col.categories().flatten()),
                    hole,
                })
            }
            ChartSpec::Heatmap {
                title,
                rows,
                cols,
                x_title,
                y_title,
            } => {
                let r = table.column(rows)?;
                let c = table.column(cols)?;
                Figure::Heatmap(HeatmapFigure {
                    title,
                    x_title,
                    y_title,
                    crosstab: Crosstab::new(r.categories().zip(c.categories())),
                })
            }
            ChartSpec::GroupedCount {
                title,
                x,
                color,
                x_title,
                y_title,
                legend,
                palette,
            } => {
                let xs = table.column(x)?;
                let gs = table.column(color)?;
                Figure::Bar(BarFigure {
                    title,
                    x_title,
                    y_title,
                    legend,
                    palette,
                    series: GroupedSeries::counts(xs.categories().zip(gs.categories())),
                    decimals: 0,
                })
            }
            ChartSpec::GroupedMean {
                title,
                x,
                y,
                color,
                x_title,
                y_title,
                legend,
                palette,
            } => {
                let xs = table.column(x)?;
                let ys = table.column(y)?;
                let gs = table.column(color)?;
                let rows = xs
                    .categories()
                    .zip(ys.numbers())
                    .zip(gs.categories())
                    .map(|((x, y), g)| (x, y, g));
                Figure::Bar(BarFigure {
                    title,
                    x_title,
                    y_title,
                    legend,
                    palette,
                    series: GroupedSeries::means(rows),
                    decimals: 1,
                })
            }
            ChartSpec::Box {
                title,
                x,
                y,
                color,
                x_title,
                y_title,
                legend,
                palette,
            } => {
                let xs = table.column(x)?;
                let ys = table.column(y)?;
                let gs = table.column(color)?;
                let rows: Vec<(&str, f64, &str)> = xs
                    .categories()
                    .zip(ys.numbers())
                    .zip(gs.categories())
                    .filter_map(|((x, y), g)| Some((x?, y?, g?)))
                    .collect();
                Figure::Box(BoxFigure::from_rows(
                    title, x_title, y_title, legend, palette, &rows,
                ))
            }
        };
        Ok(fig)
    }
}

/// Chart aggregates ready for rendering.
#[derive(Debug, Clone)]
pub enum Figure {
    Histogram(HistogramFigure),
    Pie(PieFigure),
    Heatmap(HeatmapFigure),
    Bar(BarFigure),
    Box(BoxFigure),
}

impl Figure {
    pub fn title(&self) -> &'static str {
        match self {
            Figure::Histogram(f) => f.title,
            Figure::Pie(f) => f.title,
            Figure::Heatmap(f) => f.title,
            Figure::Bar(f) => f.title,
            Figure::Box(f) => f.title,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HistogramFigure {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub bins: Vec<Bin>,
    pub marginal: Option<BoxStats>,
    pub palette: Palette,
}

#[derive(Debug, Clone)]
pub struct PieFigure {
    pub title: &'static str,
    /// (label, count), largest first.
    pub slices: Vec<(String, usize)>,
    /// Inner radius as a fraction of the outer one.
    pub hole: f64,
}

impl PieFigure {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|(_, n)| n).sum()
    }

    /// Share of each slice in percent.
    pub fn shares(&self) -> Vec<f64> {
        let total = self.total().max(1) as f64;
        self.slices
            .iter()
            .map(|(_, n)| *n as f64 / total * 100.0)
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct HeatmapFigure {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub crosstab: Crosstab,
}

#[derive(Debug, Clone)]
pub struct BarFigure {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub legend: &'static str,
    pub palette: Palette,
    pub series: GroupedSeries,
    /// Decimal places for value labels.
    pub decimals: usize,
}

#[derive(Debug, Clone)]
pub struct BoxFigure {
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub legend: &'static str,
    pub palette: Palette,
    pub categories: Vec<String>,
    pub groups: Vec<String>,
    /// `stats[category][group]`
    pub stats: Vec<Vec<Option<BoxStats>>>,
}

impl BoxFigure {
    fn from_rows(
        title: &'static str,
        x_title: &'static str,
        y_title: &'static str,
        legend: &'static str,
        palette: Palette,
        rows: &[(&str, f64, &str)],
    ) -> Self {
        let categories = stats::distinct(rows.iter().map(|(x, _, _)| *x));
        let groups = stats::distinct(rows.iter().map(|(_, _, g)| *g));

        let mut buckets: HashMap<(&str, &str), Vec<f64>> = HashMap::new();
        for (x, y, g) in rows {
            buckets.entry((*x, *g)).or_default().push(*y);
        }

        let stats = categories
            .iter()
            .map(|cat| {
                groups
                    .iter()
                    .map(|grp| {
                        buckets
                            .get(&(cat.as_str(), grp.as_str()))
                            .and_then(|values| BoxStats::from_values(values))
                    })
                    .collect()
            })
            .collect();

        Self {
            title,
            x_title,
            y_title,
            legend,
            palette,
            categories,
            groups,
            stats,
        }
    }

    /// Shared value axis across all boxes.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.stats
            .iter()
            .flat_map(|row| row.iter().flatten())
            .map(BoxStats::range)
            .reduce(|(a, b), (c, d)| (a.min(c), b.max(d)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::from_csv(
            "religion,age_of_first_use_midpoint,addicted_with,marital_status\n\
             Islam,15,Alcohol,Married\n\
             Islam,17,Alcohol,Not Married\n\
             Islam,19,Cannabis,Not Married\n\
             Christian,21,Cannabis,Not Married\n"
                .as_bytes(),
        )
        .unwrap()
    }

    const BOX: ChartSpec = ChartSpec::Box {
        title: "Age of First Use Distribution by Religion and Type of Addiction",
        x: "religion",
        y: "age_of_first_use_midpoint",
        color: "addicted_with",
        x_title: "Religion",
        y_title: "Age of First Use (Midpoint)",
        legend: "Type of Addiction",
        palette: Palette::Dark24,
    };

    #[test]
    fn test_box_figure_groups() {
        let Figure::Box(fig) = BOX.build(&table()).unwrap() else {
            panic!("expected box figure");
        };
        assert_eq!(fig.categories, vec!["Christian", "Islam"]);
        assert_eq!(fig.groups, vec!["Alcohol", "Cannabis"]);
        assert!(fig.stats[0][0].is_none());
        assert_eq!(fig.stats[1][0].as_ref().unwrap().median, 16.0);
        assert_eq!(fig.value_range(), Some((15.0, 21.0)));
    }

    #[test]
    fn test_pie_shares() {
        let spec = ChartSpec::Pie {
            title: "Marital Status of Addicts",
            names: "marital_status",
            hole: 0.3,
        };
        let Figure::Pie(pie) = spec.build(&table()).unwrap() else {
            panic!("expected pie");
        };
        assert_eq!(pie.slices[0], ("Not Married".to_string(), 3));
        assert_eq!(pie.total(), 4);
        assert_eq!(pie.shares(), vec![75.0, 25.0]);
    }

    #[test]
    fn test_missing_column_message() {
        let spec = ChartSpec::Histogram {
            title: "Distribution of Age Midpoints",
            x: "age_midpoint",
            nbins: 10,
            x_title: "Age Midpoint",
            y_title: "Frequency",
            marginal_box: true,
            palette: Palette::T10,
        };
        let err = spec.build(&table()).unwrap_err();
        assert_eq!(err.missing_column(), Some("age_midpoint"));
        assert_eq!(
            spec.missing_message(),
            "Column 'age_midpoint' not found in the dataset for the histogram."
        );
        assert_eq!(
            BOX.missing_message(),
            "One or more required columns ('religion', 'age_of_first_use_midpoint', \
             'addicted_with') not found for the box plot."
        );
    }
}
