use std::sync::Arc;

use crate::core::{
    bundle::{Points, StatisticsBundle, Summary},
    party::{Parties, Party},
};

use super::Metric;

/// Labels and data bindings for one metric chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDescriptor {
    pub metric: Metric,
    pub key: &'static str,
    pub title: &'static str,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub y_unit: &'static str,
    pub series: Parties<PartySeries>,
}

/// One party's line within a metric chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PartySeries {
    /// e.g. `"Throughput for 10.0.0.2 → 10.0.0.1"`; the first address is the
    /// endpoint whose data is plotted.
    pub title: String,
    pub data: Points,
    pub name: String,
    pub step: bool,
}

impl ChartDescriptor {
    pub fn for_metric(metric: Metric, bundle: &StatisticsBundle) -> Self {
        let endpoints = bundle.endpoints();
        let stats = metric.stats(bundle);

        let series = stats.map(|party, stat| PartySeries {
            title: format!(
                "{} for {} → {}",
                metric.title(),
                endpoints.get(party),
                endpoints.get(party.peer())
            ),
            data: Arc::clone(&stat.data),
            name: stat.ip.clone(),
            step: metric.step(),
        });

        Self {
            metric,
            key: metric.key(),
            title: metric.title(),
            x_title: metric.x_title(),
            y_title: metric.y_title(),
            y_unit: metric.y_unit(),
            series,
        }
    }

    pub fn party(&self, party: Party) -> &PartySeries {
        self.series.get(party)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub data: Arc<Summary>,
}

impl SummaryDescriptor {
    pub fn new(summary: &Summary) -> Self {
        Self {
            key: "summary",
            title: "Summary",
            data: Arc::new(summary.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AboutDescriptor {
    pub key: &'static str,
    pub title: &'static str,
}

impl Default for AboutDescriptor {
    fn default() -> Self {
        Self {
            key: "about",
            title: "About",
        }
    }
}
