pub mod error;
mod log_request;
pub mod types;

pub use error::ApiError;
pub use error::handler_404;
pub use error::internal_error;
pub use log_request::log_req_res;
