#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;

use clap::Parser;
#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::charts::HIGHCHARTS_SRC;
use ui::core::source;
use ui::stats::Startup;
use ui::TcpStatsApp;

// The desktop bundle ships no asset directory, so the theme is compiled in.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Interactive charts for a `tcpstats` connection dump.
#[derive(Debug, Parser)]
#[command(name = "tcpstats-desktop", version)]
struct Cli {
    /// Statistics dump written by the `tcpstats` script.
    #[arg(env = "TCPSTATS_DUMP", default_value = source::DEFAULT_DUMP_PATH)]
    dump: PathBuf,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        }
    }

    fn startup(&self) -> Startup {
        if let Err(err) = dioxus::logger::init(self.log_level()) {
            eprintln!("logger already initialized: {err}");
        }
        Startup::new(source::load_dump_file(&self.dump))
    }
}

#[cfg(feature = "desktop")]
fn main() {
    let cli = Cli::parse();
    let startup = cli.startup();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("TCPStats – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_custom_head(format!(r#"<script src="{HIGHCHARTS_SRC}"></script>"#)),
        )
        .with_context(startup)
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    let cli = Cli::parse();
    let startup = cli.startup();

    LaunchBuilder::server().with_context(startup).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }
        TcpStatsApp {}
    }
}
