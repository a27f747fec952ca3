use dioxus::prelude::*;

use crate::core::platform::Platform;
use crate::stats::AboutDescriptor;
use crate::t;

#[component]
pub fn About(about: AboutDescriptor) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let platform = Platform::current().label();

    rsx! {
        section { class: "panel about",
            div { class: "panel__header",
                h1 { "{about.title}" }
            }
            p { {t!("about-intro")} }
            ul { class: "about__charts",
                li { {t!("about-throughput")} }
                li { {t!("about-sequence")} }
                li { {t!("about-window")} }
                li { {t!("about-rtt")} }
            }
            p { {t!("about-usage")} }
            p { class: "about__hint", {t!("chart-zoom-hint")} }
            p { class: "panel__meta", {t!("about-version", version = version, platform = platform)} }
        }
    }
}
