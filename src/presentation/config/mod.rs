mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{DownloaderSettings, ServerSettings, Settings};
