//! Shared UI crate for TCPStats. Every view and all chart logic live here;
//! the platform crates only load the statistics bundle and launch.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod stats;
pub mod views;

pub mod components {
    // Tab bar with locale switcher (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

pub use views::TcpStatsApp;
