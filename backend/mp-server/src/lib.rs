pub mod api;
pub mod app_state;
pub mod diagnostics;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    contact::{contact::create_contact, contact_response::ContactResponse},
    designs::{
        design_dto::DesignDto,
        design_list_response::DesignListResponse,
        designs::list_designs,
        list_designs_query::{DEFAULT_DESIGN_LIMIT, ListDesignsQuery},
    },
    error::ApiError,
    error::Result as ApiResult,
};
pub use app_state::{AppState, DatabaseHandle};
pub use diagnostics::{
    database_status::DatabaseStatus,
    diagnostics::diagnostics,
    diagnostics_response::{ConnectionStatus, DiagnosticsResponse, EnvPresence},
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use health::root;

pub use crate::routes::build_router;
