pub mod database_status;
pub mod diagnostics;
pub mod diagnostics_response;
