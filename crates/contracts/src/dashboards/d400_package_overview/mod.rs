pub mod dto;

pub use dto::DashboardMetrics;
