//! Where the statistics bundle comes from on each platform.
//!
//! Launchers call one of these before starting the app and inject the result
//! through [`crate::stats::Startup`].

use dioxus::logger::tracing::{debug, error, info};

use super::bundle::StatisticsBundle;
use super::error::InitError;

/// Name of the global the analysis script's `dump.js` assigns.
pub const GLOBAL_BINDING: &str = "TCPStats";

/// Default location the analysis script writes to.
pub const DEFAULT_DUMP_PATH: &str = "log/dump.js";

#[cfg(not(target_arch = "wasm32"))]
pub fn load_dump_file(path: &std::path::Path) -> Result<StatisticsBundle, InitError> {
    let origin = path.display().to_string();
    debug!(%origin, "reading statistics dump");

    let text = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InitError::Missing {
                origin: origin.clone(),
            }
        } else {
            InitError::Io {
                origin: origin.clone(),
                source,
            }
        }
    });

    finish(&origin, text.and_then(|text| StatisticsBundle::from_dump_script(&origin, &text)))
}

#[cfg(target_arch = "wasm32")]
pub fn load_global(name: &str) -> Result<StatisticsBundle, InitError> {
    use wasm_bindgen::JsValue;

    let origin = format!("window.{name}");
    debug!(%origin, "reading statistics global");

    let read = || -> Result<StatisticsBundle, InitError> {
        let host = |reason: &str| InitError::Host {
            origin: origin.clone(),
            reason: reason.to_string(),
        };

        let window = web_sys::window().ok_or_else(|| host("window unavailable"))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .map_err(|_| host("property lookup failed"))?;
        if value.is_undefined() || value.is_null() {
            return Err(InitError::Missing {
                origin: origin.clone(),
            });
        }

        let json = js_sys::JSON::stringify(&value)
            .map_err(|_| host("value is not serializable"))?
            .as_string()
            .ok_or_else(|| host("value is not serializable"))?;
        StatisticsBundle::from_json(&origin, &json)
    };

    finish(&origin, read())
}

fn finish(
    origin: &str,
    outcome: Result<StatisticsBundle, InitError>,
) -> Result<StatisticsBundle, InitError> {
    match &outcome {
        Ok(bundle) => info!(
            %origin,
            packets = bundle.summary.packets,
            receiver = %bundle.endpoints().receiver,
            sender = %bundle.endpoints().sender,
            "statistics loaded"
        ),
        Err(err) => error!(%origin, "statistics unavailable: {err}"),
    }
    outcome
}
