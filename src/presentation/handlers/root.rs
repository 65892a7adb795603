pub const ROOT_MESSAGE: &str = "yt-sampler is running";

/// Liveness placeholder. Served as `text/plain`.
pub async fn root_handler() -> &'static str {
    ROOT_MESSAGE
}
