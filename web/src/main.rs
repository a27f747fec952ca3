use dioxus::prelude::*;

use ui::core::source;
use ui::stats::Startup;
use ui::TcpStatsApp;

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::logger::initialize_default();

    // `Dioxus.toml` loads the analysis script's dump.js ahead of the wasm bundle.
    #[cfg(target_arch = "wasm32")]
    let loaded = source::load_global(source::GLOBAL_BINDING);
    #[cfg(not(target_arch = "wasm32"))]
    let loaded = source::load_dump_file(std::path::Path::new(source::DEFAULT_DUMP_PATH));

    LaunchBuilder::new()
        .with_context(Startup::new(loaded))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        TcpStatsApp {}
    }
}
