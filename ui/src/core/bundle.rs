//! Statistics bundle written by the `tcpstats` analysis script.
//!
//! The script emits a single JSON object (optionally wrapped as
//! `var TCPStats = {...};` so a page can load it as a script). Sample vectors
//! are parsed once into shared slices; everything downstream holds `Arc`
//! clones of them.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::error::InitError;
use super::party::Parties;

/// A single `[x, y]` sample.
pub type Point = [f64; 2];

/// Shared, immutable sample vector.
pub type Points = Arc<[Point]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsBundle {
    pub summary: Summary,
    pub throughput: Parties<PartyStat>,
    pub sequence: Parties<PartyStat>,
    pub window: Parties<PartyStat>,
    pub rtt: Parties<PartyStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyStat {
    pub ip: String,
    pub data: Points,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// TCP option names seen anywhere in the capture, in order of appearance.
    #[serde(default)]
    pub options: Vec<String>,
    pub packets: u64,
    pub bytes: u64,
    /// Epoch milliseconds of the first packet.
    pub start: f64,
    /// Epoch milliseconds of the last packet.
    pub end: f64,
    pub parties: Parties<PartySummary>,
}

impl Summary {
    pub fn duration_ms(&self) -> f64 {
        (self.end - self.start).max(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartySummary {
    #[serde(default)]
    pub options: Vec<String>,
    pub packets: u64,
    pub bytes: u64,
    pub ip: String,
}

impl StatisticsBundle {
    pub fn from_json(origin: &str, text: &str) -> Result<Self, InitError> {
        serde_json::from_str(text).map_err(|source| InitError::Malformed {
            origin: origin.to_string(),
            source,
        })
    }

    /// Accepts either bare JSON or the script's `var TCPStats = {...};` form.
    pub fn from_dump_script(origin: &str, text: &str) -> Result<Self, InitError> {
        let body = text.trim();
        if body.is_empty() {
            return Err(InitError::Missing {
                origin: origin.to_string(),
            });
        }

        let body = body.trim_end_matches(';').trim_end();
        let body = match body.strip_prefix("var ") {
            Some(assignment) => assignment
                .split_once('=')
                .map(|(_, value)| value.trim())
                .unwrap_or(assignment),
            None => body,
        };

        Self::from_json(origin, body)
    }

    /// Receiver and sender addresses of the connection.
    ///
    /// Taken from the throughput record, which the script fills for every
    /// packet it sees.
    pub fn endpoints(&self) -> Parties<&str> {
        self.throughput.map(|_, stat| stat.ip.as_str())
    }
}
