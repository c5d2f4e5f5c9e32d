pub mod api_client;
pub mod api_routes;
pub mod errors;
pub mod services;

#[cfg(test)]
pub mod testing;

pub use api_client::{ApiClient, DEFAULT_BASE_URL};
pub use errors::{ApiError, ApiOperation, ApiResult};
pub use services::{UserAdminApiAdapter, UserAdminService};
