pub mod a001_lead_package;
