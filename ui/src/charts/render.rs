use dioxus::logger::tracing::{debug, error, warn};
use dioxus::prelude::*;

use super::{svg, ChartConfig};
use crate::core::party::Party;
use crate::stats::ChartDescriptor;

/// Charting library loaded by the host page (web `Dioxus.toml`, desktop custom head).
pub const HIGHCHARTS_SRC: &str = "https://code.highcharts.com/highcharts.js";

const STATIC_WIDTH: u32 = 960;
const STATIC_HEIGHT: u32 = 440;

/// Draws `config` into the element with `container_id`.
///
/// The returned evaluation resolves to `false` when the charting library or
/// the container is missing. Drawing again into the same container replaces
/// the previous chart.
pub fn render_chart(
    container_id: &str,
    config: &ChartConfig,
) -> Result<document::Eval, serde_json::Error> {
    let target = serde_json::to_string(container_id)?;
    let options = config.to_json()?;
    let script = format!(
        r#"const container = document.getElementById({target});
if (typeof Highcharts === "undefined" || container === null) {{
    return false;
}}
Highcharts.chart(container, {options});
return true;"#
    );
    Ok(document::eval(&script))
}

fn container_id(key: &str, party: Option<Party>) -> String {
    format!("chart-{key}-{}", party.map(Party::key).unwrap_or("both"))
}

#[component]
pub fn StatChart(descriptor: ChartDescriptor, party: Option<Party>) -> Element {
    let mut static_fallback = use_signal(|| false);
    let key = descriptor.key;
    let target = container_id(key, party);

    // Descriptors never change for a given key, so `(key, party)` identifies
    // a draw without comparing series data.
    let source = descriptor.clone();
    use_effect(use_reactive!(|(key, party)| {
        let target = container_id(key, party);
        let config = ChartConfig::build(&source, party);
        let eval = match render_chart(&target, &config) {
            Ok(eval) => eval,
            Err(err) => {
                error!(chart = %target, "couldn't serialize chart options: {err}");
                static_fallback.set(true);
                return;
            }
        };

        spawn(async move {
            match eval.join::<bool>().await {
                Ok(true) => {
                    debug!(chart = %target, "chart drawn");
                    static_fallback.set(false);
                }
                Ok(false) => {
                    warn!(chart = %target, "charting library unavailable; using static rendering");
                    static_fallback.set(true);
                }
                Err(err) => {
                    warn!(chart = %target, "chart draw failed: {err}");
                    static_fallback.set(true);
                }
            }
        });
    }));

    let static_markup = static_fallback().then(|| {
        let config = ChartConfig::build(&descriptor, party);
        svg::render_svg(&config, STATIC_WIDTH, STATIC_HEIGHT)
    });

    rsx! {
        div { class: "stat-chart",
            div { id: "{target}", class: "stat-chart__canvas" }
            if let Some(markup) = static_markup {
                p { class: "stat-chart__note", {crate::t!("chart-static-note")} }
                div { class: "stat-chart__static", dangerous_inner_html: "{markup}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_ids_are_unique_per_selection() {
        assert_eq!(container_id("rtt", None), "chart-rtt-both");
        assert_eq!(container_id("rtt", Some(Party::Sender)), "chart-rtt-sender");
        assert_ne!(
            container_id("window", Some(Party::Receiver)),
            container_id("window", Some(Party::Sender))
        );
    }
}
