pub mod a001_lead_package;
pub mod a002_dial_task;
pub mod a003_package_tag_summary;
