use crate::core::{bundle::PartyStat, bundle::StatisticsBundle, party::Parties};

/// The four per-connection time series the analysis script records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Throughput,
    Sequence,
    Window,
    Rtt,
}

impl Metric {
    /// Display order of the chart tabs.
    pub const ALL: [Metric; 4] = [
        Metric::Throughput,
        Metric::Sequence,
        Metric::Window,
        Metric::Rtt,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Metric::Throughput => "throughput",
            Metric::Sequence => "sequence",
            Metric::Window => "window",
            Metric::Rtt => "rtt",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::Throughput => "Throughput",
            Metric::Sequence => "Sequence Numbers",
            Metric::Window => "Window Scaling",
            Metric::Rtt => "Round Trip Time",
        }
    }

    pub fn x_title(self) -> &'static str {
        match self {
            Metric::Rtt => "Sequence Number (B)",
            _ => "Time (s)",
        }
    }

    pub fn y_title(self) -> &'static str {
        match self {
            Metric::Throughput => "Throughput (B/s)",
            Metric::Sequence => "Sequence Number (B)",
            Metric::Window => "Window Size (B)",
            Metric::Rtt => "Round Trip Time (ms)",
        }
    }

    /// Tooltip suffix, leading space included.
    pub fn y_unit(self) -> &'static str {
        match self {
            Metric::Throughput => " B/s",
            Metric::Sequence | Metric::Window => " B",
            Metric::Rtt => " ms",
        }
    }

    /// Sequence numbers only change on new segments, so they plot as steps.
    pub fn step(self) -> bool {
        matches!(self, Metric::Sequence)
    }

    pub fn stats(self, bundle: &StatisticsBundle) -> &Parties<PartyStat> {
        match self {
            Metric::Throughput => &bundle.throughput,
            Metric::Sequence => &bundle.sequence,
            Metric::Window => &bundle.window,
            Metric::Rtt => &bundle.rtt,
        }
    }
}
