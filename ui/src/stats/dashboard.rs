use std::sync::Arc;

use dioxus::logger::tracing::debug;

use crate::core::{bundle::StatisticsBundle, error::InitError};

use super::{AboutDescriptor, ChartDescriptor, Metric, SummaryDescriptor};

/// Everything the views need, built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: SummaryDescriptor,
    pub stats: Vec<ChartDescriptor>,
    pub about: AboutDescriptor,
}

impl Dashboard {
    pub fn new(bundle: &StatisticsBundle) -> Self {
        let stats = Metric::ALL
            .into_iter()
            .map(|metric| ChartDescriptor::for_metric(metric, bundle))
            .collect::<Vec<_>>();
        debug!(charts = stats.len(), "chart descriptors built");

        Self {
            summary: SummaryDescriptor::new(&bundle.summary),
            stats,
            about: AboutDescriptor::default(),
        }
    }

    pub fn descriptor(&self, metric: Metric) -> Option<&ChartDescriptor> {
        self.stats.iter().find(|descriptor| descriptor.metric == metric)
    }

    /// Tabs in navbar order.
    pub fn tabs(&self) -> Vec<(Tab, &'static str)> {
        let mut tabs = Vec::with_capacity(self.stats.len() + 2);
        tabs.push((Tab::Summary, self.summary.title));
        tabs.extend(
            self.stats
                .iter()
                .map(|descriptor| (Tab::Stat(descriptor.metric), descriptor.title)),
        );
        tabs.push((Tab::About, self.about.title));
        tabs
    }
}

/// Outcome of application startup, injected by the platform launcher.
#[derive(Debug, Clone)]
pub enum Startup {
    Ready(Dashboard),
    Failed(Arc<InitError>),
}

impl Startup {
    pub fn new(loaded: Result<StatisticsBundle, InitError>) -> Self {
        match loaded {
            Ok(bundle) => Startup::Ready(Dashboard::new(&bundle)),
            Err(err) => Startup::Failed(Arc::new(err)),
        }
    }

    pub fn dashboard(&self) -> Option<&Dashboard> {
        match self {
            Startup::Ready(dashboard) => Some(dashboard),
            Startup::Failed(_) => None,
        }
    }
}

/// The currently selected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Stat(Metric),
    About,
}

impl Tab {
    pub fn key(self) -> &'static str {
        match self {
            Tab::Summary => "summary",
            Tab::Stat(metric) => metric.key(),
            Tab::About => "about",
        }
    }
}
