//! Turns the statistics bundle into the chart descriptors the views display.

mod dashboard;
pub use dashboard::{Dashboard, Startup, Tab};

mod descriptor;
pub use descriptor::{AboutDescriptor, ChartDescriptor, PartySeries, SummaryDescriptor};

mod metric;
pub use metric::Metric;
