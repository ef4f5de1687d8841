//! DTOs for the metrics table and the metrics charts.

use serde::Serialize;

use crate::domain::metrics::{CategoryMetrics, InventoryMetrics};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsRow {
    pub label: String,
    pub total_stock: u64,
    pub total_value: String,
    pub avg_price: String,
}

impl MetricsRow {
    fn new(label: &str, metrics: &CategoryMetrics) -> Self {
        Self {
            label: label.to_string(),
            total_stock: metrics.total_stock,
            total_value: format!("{:.2}", metrics.total_value),
            avg_price: format!("{:.2}", metrics.avg_price),
        }
    }
}

/// Bar of a horizontal chart; `percent` is relative to the largest bar.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChartBar {
    pub label: String,
    pub value: String,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsChart {
    pub title: String,
    pub bars: Vec<ChartBar>,
}

impl MetricsChart {
    fn new<F>(title: &str, metrics: &InventoryMetrics, value: F, decimals: usize) -> Self
    where
        F: Fn(&CategoryMetrics) -> f64,
    {
        let max = metrics
            .by_category
            .values()
            .map(&value)
            .fold(0.0_f64, f64::max);

        let bars = metrics
            .by_category
            .iter()
            .map(|(label, category)| {
                let v = value(category);
                let percent = if max > 0.0 {
                    (v / max * 1000.0).round() / 10.0
                } else {
                    0.0
                };
                ChartBar {
                    label: label.clone(),
                    value: format!("{v:.decimals$}"),
                    percent,
                }
            })
            .collect();

        Self {
            title: title.to_string(),
            bars,
        }
    }
}

/// Everything the metrics section renders.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MetricsView {
    pub overall: MetricsRow,
    pub categories: Vec<MetricsRow>,
    pub charts: Vec<MetricsChart>,
}

impl From<&InventoryMetrics> for MetricsView {
    fn from(metrics: &InventoryMetrics) -> Self {
        Self {
            overall: MetricsRow::new("Overall", &metrics.overall),
            categories: metrics
                .by_category
                .iter()
                .map(|(label, category)| MetricsRow::new(label, category))
                .collect(),
            charts: vec![
                MetricsChart::new(
                    "Units in stock",
                    metrics,
                    |m| m.total_stock as f64,
                    0,
                ),
                MetricsChart::new("Stock value", metrics, |m| m.total_value, 2),
            ],
        }
    }
}
