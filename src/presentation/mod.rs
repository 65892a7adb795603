pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{DownloaderSettings, Environment, ServerSettings, Settings};
pub use router::{DOWNLOAD_URL_PATH, create_router};
pub use state::AppState;
