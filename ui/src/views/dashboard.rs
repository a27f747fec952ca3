use dioxus::prelude::*;

use crate::components::AppNavbar;
use crate::stats::{Dashboard, Tab};
use crate::views::{About, StatView, SummaryView};

#[component]
pub fn DashboardView(dashboard: Dashboard) -> Element {
    let active = use_signal(Tab::default);
    let lang_code = use_context::<Signal<String>>();
    let tabs = dashboard.tabs();

    let content = match active() {
        Tab::Summary => rsx! {
            SummaryView { summary: dashboard.summary.clone() }
        },
        Tab::Stat(metric) => match dashboard.descriptor(metric) {
            Some(descriptor) => rsx! {
                StatView { key: "{descriptor.key}", descriptor: descriptor.clone() }
            },
            None => rsx! {},
        },
        Tab::About => rsx! {
            About { about: dashboard.about }
        },
    };

    rsx! {
        AppNavbar { tabs, active }
        main { key: "{lang_code()}", class: "page page-{active().key()}", {content} }
    }
}
