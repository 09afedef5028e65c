//! Collects Brazilian price index series from IBGE's SIDRA API.
//!
//! HTTP plumbing stays internal; callers go through [`sidra::SidraClient`]:
//!
//! ```compile_fail
//! use ibge_spider::http::HttpClient;
//! ```
pub mod config;
pub mod sidra;

pub use config::Config;

/// Shortcut for required API elements.
pub(crate) mod http {
    pub(crate) use dotenv::var;
    pub(crate) use reqwest::Client as HttpClient;
}

/// Build the HTTP client shared by every SIDRA request, identifying as `user_agent`.
pub(crate) fn std_client_build(user_agent: &str) -> Result<http::HttpClient, reqwest::Error> {
    reqwest::ClientBuilder::new().user_agent(user_agent).build()
}

pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
