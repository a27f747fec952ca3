use dioxus::prelude::*;

use crate::charts::{ChartConfig, ChartExportPanel, StatChart};
use crate::core::party::Party;
use crate::stats::ChartDescriptor;
use crate::t;

/// One metric: party selector, chart, and export actions.
#[component]
pub fn StatView(descriptor: ChartDescriptor) -> Element {
    let mut party = use_signal(|| Option::<Party>::None);
    let selected = party();

    let export_config = ChartConfig::build(&descriptor, selected);
    let file_stem = format!(
        "tcpstats-{}-{}",
        descriptor.key,
        selected.map(Party::key).unwrap_or("both")
    );

    let choices: Vec<(Option<Party>, &'static str, String)> =
        std::iter::once((None, "both", t!("party-both")))
            .chain(Party::ALL.into_iter().map(|p| {
                let address = descriptor.party(p).name.clone();
                let label = match p {
                    Party::Receiver => t!("party-receiver", address = address),
                    Party::Sender => t!("party-sender", address = address),
                };
                (Some(p), p.key(), label)
            }))
            .collect();

    rsx! {
        section { class: "stat-view",
            h1 { "{descriptor.title}" }

            nav { class: "party-tabs", role: "tablist",
                for (choice, choice_key, label) in choices {
                    button {
                        key: "{choice_key}",
                        r#type: "button",
                        role: "tab",
                        class: if choice == selected { "party-tabs__tab party-tabs__tab--active" } else { "party-tabs__tab" },
                        aria_selected: choice == selected,
                        onclick: move |_| party.set(choice),
                        "{label}"
                    }
                }
            }

            StatChart { descriptor: descriptor.clone(), party: selected }

            p { class: "stat-view__hint", {t!("chart-zoom-hint")} }

            ChartExportPanel { config: export_config, file_stem }
        }
    }
}
