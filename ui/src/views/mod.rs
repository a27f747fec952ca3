mod about;
pub use about::About;

mod app;
pub use app::TcpStatsApp;

mod dashboard;
pub use dashboard::DashboardView;

mod stat;
pub use stat::StatView;

mod startup;
pub use startup::StartupFailure;

mod summary;
pub use summary::SummaryView;
