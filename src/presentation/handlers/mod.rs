mod download_url;
mod health;
mod root;

pub use download_url::{ErrorResponse, download_url_handler, method_not_allowed_handler};
pub use health::{HealthResponse, health_handler};
pub use root::{ROOT_MESSAGE, root_handler};
