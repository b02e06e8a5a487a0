pub mod d400_package_overview;

pub use d400_package_overview::ui::PackageOverviewDashboard;
