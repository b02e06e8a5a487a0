pub mod common;
pub mod u501_calculate_lead_volume;
pub mod u502_derive_package_code;
