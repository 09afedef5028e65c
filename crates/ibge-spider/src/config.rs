use crate::http::var;

/// Root of the SIDRA `values` API; tables are addressed as `{SIDRA_BASE_URL}/t/{table}/...`.
pub const SIDRA_BASE_URL: &str = "https://apisidra.ibge.gov.br/values";

/// Runtime settings for the spider.
///
/// Read from the environment (and any `.env` file) with [`Config::from_env`]:
///     - `SIDRA_BASE_URL`, defaults to [`SIDRA_BASE_URL`];
///     - `USER_AGENT`, defaults to `ibge-spider/<version>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: SIDRA_BASE_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: var("SIDRA_BASE_URL").unwrap_or(defaults.base_url),
            user_agent: var("USER_AGENT").unwrap_or(defaults.user_agent),
        }
    }

    /// Point the spider at another SIDRA-compatible host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

fn default_user_agent() -> String {
    format!("ibge-spider/{}", env!("CARGO_PKG_VERSION"))
}
