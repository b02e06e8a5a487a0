pub mod source_type;
pub mod task_status;
