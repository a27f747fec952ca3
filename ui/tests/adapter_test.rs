use std::sync::Arc;

use ui::core::bundle::StatisticsBundle;
use ui::core::error::InitError;
use ui::core::party::Party;
use ui::stats::{ChartDescriptor, Dashboard, Metric, Startup, Tab};

const DUMP: &str = include_str!("fixtures/dump.js");
const RECEIVER: &str = "192.168.1.10";
const SENDER: &str = "93.184.216.34";

fn bundle() -> StatisticsBundle {
    StatisticsBundle::from_dump_script("fixtures/dump.js", DUMP).expect("fixture parses")
}

#[test]
fn dashboard_holds_four_metric_descriptors_in_order() {
    let dashboard = Dashboard::new(&bundle());

    let keys: Vec<_> = dashboard.stats.iter().map(|d| d.key).collect();
    assert_eq!(keys, vec!["throughput", "sequence", "window", "rtt"]);
    assert_eq!(dashboard.summary.key, "summary");
    assert_eq!(dashboard.about.key, "about");
    assert_eq!(dashboard.about.title, "About");
}

#[test]
fn tabs_wrap_metrics_with_summary_and_about() {
    let dashboard = Dashboard::new(&bundle());
    let tabs: Vec<_> = dashboard.tabs().into_iter().map(|(tab, _)| tab).collect();

    assert_eq!(tabs.first(), Some(&Tab::Summary));
    assert_eq!(tabs.last(), Some(&Tab::About));
    assert_eq!(tabs[1..5], Metric::ALL.map(Tab::Stat));
}

#[test]
fn titles_point_from_data_subject_to_peer() {
    let bundle = bundle();

    for metric in Metric::ALL {
        let descriptor = ChartDescriptor::for_metric(metric, &bundle);
        let receiver_title = &descriptor.party(Party::Receiver).title;
        let sender_title = &descriptor.party(Party::Sender).title;

        assert_eq!(
            receiver_title,
            &format!("{} for {RECEIVER} → {SENDER}", metric.title())
        );
        assert_eq!(
            sender_title,
            &format!("{} for {SENDER} → {RECEIVER}", metric.title())
        );

        let (before, after) = receiver_title.split_once('→').unwrap();
        assert!(before.contains(RECEIVER) && after.contains(SENDER));
        let (before, after) = sender_title.split_once('→').unwrap();
        assert!(before.contains(SENDER) && after.contains(RECEIVER));
    }
}

#[test]
fn only_sequence_series_are_steps() {
    let dashboard = Dashboard::new(&bundle());

    for descriptor in &dashboard.stats {
        let expect_step = descriptor.key == "sequence";
        for party in Party::ALL {
            assert_eq!(
                descriptor.party(party).step,
                expect_step,
                "{} / {}",
                descriptor.key,
                party.key()
            );
        }
    }
}

#[test]
fn series_share_bundle_points() {
    let bundle = bundle();
    let descriptor = ChartDescriptor::for_metric(Metric::Window, &bundle);

    assert!(Arc::ptr_eq(
        &descriptor.party(Party::Sender).data,
        &bundle.window.sender.data
    ));
    assert_eq!(descriptor.party(Party::Sender).name, SENDER);
    assert_eq!(descriptor.party(Party::Receiver).name, RECEIVER);
}

#[test]
fn metric_labels_match_units() {
    let rtt = ChartDescriptor::for_metric(Metric::Rtt, &bundle());
    assert_eq!(rtt.x_title, "Sequence Number (B)");
    assert_eq!(rtt.y_title, "Round Trip Time (ms)");
    assert_eq!(rtt.y_unit, " ms");

    let throughput = ChartDescriptor::for_metric(Metric::Throughput, &bundle());
    assert_eq!(throughput.x_title, "Time (s)");
    assert_eq!(throughput.y_unit, " B/s");
}

#[test]
fn series_name_comes_from_the_metric_but_titles_from_throughput() {
    const NATED: &str = "10.9.9.9";
    let mut bundle = bundle();
    bundle.window.sender.ip = NATED.to_string();

    let window = ChartDescriptor::for_metric(Metric::Window, &bundle);
    let sender = window.party(Party::Sender);
    assert_eq!(sender.name, NATED);
    assert_eq!(sender.title, format!("Window Scaling for {SENDER} → {RECEIVER}"));
    assert_eq!(window.party(Party::Receiver).name, RECEIVER);

    let throughput = ChartDescriptor::for_metric(Metric::Throughput, &bundle);
    assert_eq!(throughput.party(Party::Sender).name, SENDER);
}

#[test]
fn missing_bundle_builds_no_dashboard() {
    let startup = Startup::new(Err(InitError::Missing {
        origin: "window.TCPStats".into(),
    }));

    assert!(startup.dashboard().is_none());
    match startup {
        Startup::Failed(err) => {
            assert!(err.is_missing());
            assert!(err.to_string().contains("tcpstats"));
        }
        Startup::Ready(_) => panic!("startup must fail without statistics"),
    }
}

#[test]
fn loaded_bundle_is_ready() {
    let startup = Startup::new(Ok(bundle()));
    let dashboard = startup.dashboard().expect("dashboard built");
    assert_eq!(dashboard.summary.data.packets, 9);
    assert!(dashboard.descriptor(Metric::Sequence).is_some());
}
