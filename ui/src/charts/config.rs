//! Highcharts option object for one descriptor/party selection.
//!
//! Built fresh on every draw and serialized straight into the page.

use serde::Serialize;

use crate::core::{bundle::Points, party::Party};
use crate::stats::ChartDescriptor;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart: ChartOptions,
    pub title: TitleOptions,
    pub x_axis: AxisOptions,
    pub y_axis: AxisOptions,
    pub tooltip: TooltipOptions,
    pub series: Vec<ChartSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub zoom_type: &'static str,
    pub panning: bool,
    pub pan_key: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleOptions {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisOptions {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub crosshair: bool,
    pub title: TitleOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub value_suffix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub data: Points,
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub step: bool,
    pub color: &'static str,
}

impl ChartSeries {
    fn of(descriptor: &ChartDescriptor, party: Party) -> Self {
        let series = descriptor.party(party);
        Self {
            data: series.data.clone(),
            name: series.name.clone(),
            step: series.step,
            color: party.color(),
        }
    }
}

impl ChartConfig {
    /// `party == None` plots both parties, receiver first.
    pub fn build(descriptor: &ChartDescriptor, party: Option<Party>) -> Self {
        let series = match party {
            None => Party::ALL
                .into_iter()
                .map(|party| ChartSeries::of(descriptor, party))
                .collect(),
            Some(party) => vec![ChartSeries::of(descriptor, party)],
        };

        let title = match party {
            Some(party) => descriptor.party(party).title.clone(),
            None => descriptor.title.to_string(),
        };

        Self {
            chart: ChartOptions {
                zoom_type: "xy",
                panning: true,
                pan_key: "shift",
            },
            title: TitleOptions { text: title },
            x_axis: AxisOptions {
                crosshair: true,
                title: TitleOptions {
                    text: descriptor.x_title.to_string(),
                },
            },
            y_axis: AxisOptions {
                crosshair: false,
                title: TitleOptions {
                    text: descriptor.y_title.to_string(),
                },
            },
            tooltip: TooltipOptions {
                value_suffix: descriptor.y_unit.to_string(),
            },
            series,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
