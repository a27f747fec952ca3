//! Chart configuration, drawing and export.

mod config;
pub use config::{AxisOptions, ChartConfig, ChartOptions, ChartSeries, TitleOptions, TooltipOptions};

mod render;
pub use render::{render_chart, StatChart, HIGHCHARTS_SRC};

pub mod svg;

mod export;
pub use export::ChartExportPanel;
