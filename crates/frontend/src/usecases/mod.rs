pub mod u501_calculate_lead_volume;
