use dioxus::prelude::*;

use crate::t;

/// Blocking notice shown instead of the dashboard when no statistics loaded.
#[component]
pub fn StartupFailure(detail: String) -> Element {
    rsx! {
        div { class: "startup-failure", role: "alertdialog", aria_modal: "true",
            div { class: "startup-failure__dialog",
                h1 { {t!("startup-title")} }
                p { class: "startup-failure__hint", {t!("startup-hint")} }
                p { class: "startup-failure__detail", "{detail}" }
                pre { class: "startup-failure__usage", "tcpstats capture.pcap" }
            }
        }
    }
}
