pub mod dashboard;

pub use dashboard::PackageOverviewDashboard;
