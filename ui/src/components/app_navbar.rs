use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;

use crate::i18n;
use crate::stats::Tab;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
// Native release builds don't serve assets, so the stylesheet is inlined too.
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand, one button per dashboard tab, and the locale picker.
///
/// The locale lives in the `Signal<String>` provided by [`crate::TcpStatsApp`].
/// The dashboard keys its content on it, so a switch re-renders every
/// translated string.
#[component]
pub fn AppNavbar(tabs: Vec<(Tab, &'static str)>, active: Signal<Tab>) -> Element {
    let mut active = active;
    let mut locale = use_context::<Signal<String>>();
    let locales = use_hook(i18n::available_languages);
    let selected = active();

    let switch_locale = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                info!(%tag, "locale switched");
                locale.set(tag);
            }
            Err(err) => warn!(%tag, "locale switch rejected: {err}"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "TCPStats" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links", role: "tablist",
                    for (tab, label) in tabs {
                        button {
                            key: "{tab.key()}",
                            r#type: "button",
                            role: "tab",
                            class: if tab == selected { "navbar__link navbar__link--active" } else { "navbar__link" },
                            aria_selected: tab == selected,
                            onclick: move |_| active.set(tab),
                            "{label}"
                        }
                    }
                }

                if locales.len() > 1 {
                    label { class: "navbar__locale",
                        span { class: "visually-hidden", {t!("nav-language-label")} }
                        select { oninput: switch_locale,
                            for tag in locales.iter() {
                                option {
                                    key: "{tag}",
                                    value: "{tag}",
                                    selected: *tag == *locale.read(),
                                    "{tag}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
