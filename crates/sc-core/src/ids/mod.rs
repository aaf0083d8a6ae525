mod file_id;
mod status_check_id;

pub use file_id::FileId;
pub use status_check_id::StatusCheckId;
