use dioxus::prelude::*;

use crate::stats::Startup;
use crate::views::{DashboardView, StartupFailure};

/// Root view. The platform launcher provides the [`Startup`] outcome as context.
#[component]
pub fn TcpStatsApp() -> Element {
    crate::i18n::init();

    let startup = use_context::<Startup>();

    // Views key their subtree on this so a language switch remounts them.
    let lang_code = use_signal(crate::i18n::current_language);
    use_context_provider(|| lang_code);

    match startup {
        Startup::Ready(dashboard) => rsx! {
            DashboardView { dashboard }
        },
        Startup::Failed(err) => rsx! {
            StartupFailure { detail: err.to_string() }
        },
    }
}
