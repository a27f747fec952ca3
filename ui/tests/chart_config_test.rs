use std::sync::Arc;

use serde_json::Value;
use ui::charts::ChartConfig;
use ui::core::bundle::StatisticsBundle;
use ui::core::party::Party;
use ui::stats::{ChartDescriptor, Metric};

const DUMP: &str = include_str!("fixtures/dump.js");

fn descriptor(metric: Metric) -> (StatisticsBundle, ChartDescriptor) {
    let bundle = StatisticsBundle::from_dump_script("fixtures/dump.js", DUMP).unwrap();
    let descriptor = ChartDescriptor::for_metric(metric, &bundle);
    (bundle, descriptor)
}

#[test]
fn both_parties_plot_receiver_then_sender() {
    let (bundle, descriptor) = descriptor(Metric::Throughput);
    let config = ChartConfig::build(&descriptor, None);

    assert_eq!(config.series.len(), 2);
    assert_eq!(config.series[0].name, bundle.throughput.receiver.ip);
    assert_eq!(config.series[0].color, Party::Receiver.color());
    assert_eq!(config.series[1].name, bundle.throughput.sender.ip);
    assert_eq!(config.series[1].color, Party::Sender.color());
    assert_eq!(config.title.text, "Throughput");
}

#[test]
fn single_party_plots_only_that_party() {
    let (bundle, descriptor) = descriptor(Metric::Throughput);
    let config = ChartConfig::build(&descriptor, Some(Party::Sender));

    assert_eq!(config.series.len(), 1);
    let series = &config.series[0];
    assert_eq!(series.name, bundle.throughput.sender.ip);
    assert_eq!(series.color, "#4CAF50");
    assert!(Arc::ptr_eq(&series.data, &bundle.throughput.sender.data));
    assert_eq!(config.title.text, descriptor.party(Party::Sender).title);
}

#[test]
fn axis_and_tooltip_come_from_descriptor() {
    let (_, descriptor) = descriptor(Metric::Rtt);
    let config = ChartConfig::build(&descriptor, Some(Party::Receiver));

    assert_eq!(config.x_axis.title.text, "Sequence Number (B)");
    assert_eq!(config.y_axis.title.text, "Round Trip Time (ms)");
    assert_eq!(config.tooltip.value_suffix, " ms");
    assert!(config.x_axis.crosshair);
    assert!(!config.y_axis.crosshair);
}

#[test]
fn serializes_to_highcharts_options() {
    let (_, descriptor) = descriptor(Metric::Sequence);
    let json: Value = serde_json::from_str(&ChartConfig::build(&descriptor, None).to_json().unwrap())
        .unwrap();

    assert_eq!(json["chart"]["zoomType"], "xy");
    assert_eq!(json["chart"]["panning"], true);
    assert_eq!(json["chart"]["panKey"], "shift");
    assert_eq!(json["xAxis"]["crosshair"], true);
    assert!(json["yAxis"].get("crosshair").is_none());
    assert_eq!(json["xAxis"]["title"]["text"], "Time (s)");
    assert_eq!(json["tooltip"]["valueSuffix"], " B");
    assert_eq!(json["series"][0]["step"], true);
    assert_eq!(json["series"][1]["color"], "#4CAF50");
    assert_eq!(json["series"][1]["data"][2], serde_json::json!([0.246881, 1449.0]));
}

#[test]
fn non_step_series_omit_the_flag() {
    for metric in [Metric::Throughput, Metric::Window, Metric::Rtt] {
        let (_, descriptor) = descriptor(metric);
        let json = serde_json::to_value(ChartConfig::build(&descriptor, None)).unwrap();
        for series in json["series"].as_array().unwrap() {
            assert!(series.get("step").is_none(), "{} series carries step", metric.key());
        }
    }
}

#[test]
fn rebuilding_is_deterministic() {
    let (_, descriptor) = descriptor(Metric::Window);
    assert_eq!(
        ChartConfig::build(&descriptor, Some(Party::Receiver)),
        ChartConfig::build(&descriptor, Some(Party::Receiver))
    );
}
