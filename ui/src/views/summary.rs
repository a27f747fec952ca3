use dioxus::prelude::*;

use crate::core::{
    format::{format_bytes, format_count, format_duration_ms, format_timestamp_ms},
    party::Party,
};
use crate::stats::SummaryDescriptor;
use crate::t;

#[component]
pub fn SummaryView(summary: SummaryDescriptor) -> Element {
    let data = summary.data.clone();

    let options = option_list(&data.options);
    let totals = vec![
        (t!("summary-packets"), format_count(data.packets)),
        (t!("summary-bytes"), format_bytes(data.bytes as f64, None)),
        (t!("summary-start"), format_timestamp_ms(data.start)),
        (t!("summary-end"), format_timestamp_ms(data.end)),
        (t!("summary-duration"), format_duration_ms(data.duration_ms())),
        (t!("summary-options"), options),
    ];

    let rows: Vec<PartyRow> = data
        .parties
        .iter()
        .map(|(party, stats)| PartyRow {
            role: match party {
                Party::Receiver => t!("summary-role-receiver"),
                Party::Sender => t!("summary-role-sender"),
            },
            color: party.color(),
            address: stats.ip.clone(),
            packets: format_count(stats.packets),
            bytes: format_bytes(stats.bytes as f64, None),
            options: option_list(&stats.options),
        })
        .collect();

    rsx! {
        section { class: "panel summary",
            div { class: "panel__header",
                h1 { "{summary.title}" }
            }

            ul { class: "summary__grid",
                for (label, value) in totals {
                    li {
                        span { class: "summary__label", "{label}" }
                        span { class: "summary__value", "{value}" }
                    }
                }
            }
        }

        section { class: "panel summary-parties",
            div { class: "panel__header",
                h2 { {t!("summary-parties")} }
            }
            table { class: "summary-parties__table",
                thead {
                    tr {
                        th { {t!("summary-role")} }
                        th { {t!("summary-address")} }
                        th { {t!("summary-packets")} }
                        th { {t!("summary-bytes")} }
                        th { {t!("summary-options")} }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            td {
                                span { class: "summary-parties__swatch", style: "background: {row.color}" }
                                "{row.role}"
                            }
                            td { class: "summary-parties__address", "{row.address}" }
                            td { "{row.packets}" }
                            td { "{row.bytes}" }
                            td { "{row.options}" }
                        }
                    }
                }
            }
        }
    }
}

struct PartyRow {
    role: String,
    color: &'static str,
    address: String,
    packets: String,
    bytes: String,
    options: String,
}

fn option_list(options: &[String]) -> String {
    if options.is_empty() {
        t!("summary-options-none")
    } else {
        options.join(", ")
    }
}
