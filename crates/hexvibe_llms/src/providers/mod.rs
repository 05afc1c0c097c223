pub mod gemini;
pub mod zai;

pub use gemini::GeminiProvider;
pub use zai::ZaiProvider;

use std::time::Duration;

/// Shared HTTP client builder: optional whole-request timeout.
pub(crate) fn http_client(timeout: Option<Duration>) -> crate::error::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

/// Ensures a trailing slash so `format!("{base}path")` joins cleanly.
pub(crate) fn normalize_base_url(url: impl Into<String>) -> String {
    let mut url = url.into();
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}
