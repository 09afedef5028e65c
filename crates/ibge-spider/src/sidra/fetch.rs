use super::error::FetchError;
use super::normalize::{RawRow, RawTable};
use super::query::{build_url, Params, TableId};
use crate::config::Config;
use crate::http::HttpClient;
use serde_json::Value;
use tracing::{debug, error, trace};

// longest piece of an error body kept for diagnostics
const BODY_SNIPPET_CHARS: usize = 200;

/// HTTP client bound to one SIDRA endpoint.
///
/// Every call is a single GET; there are no retries and no timeout beyond the reqwest default.
#[derive(Clone, Debug)]
pub struct SidraClient {
    http_client: HttpClient,
    base_url: String,
}

impl SidraClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let http_client = crate::std_client_build(&config.user_agent).map_err(|err| {
            error!("failed to build reqwest client, error({err})");
            err
        })?;

        Ok(Self {
            http_client,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, table: TableId, params: &Params) -> String {
        build_url(&self.base_url, table, params)
    }

    /// GET a SIDRA table and decode it, classifying every failure.
    pub async fn try_fetch(&self, table: TableId, params: &Params) -> Result<RawTable, FetchError> {
        if params.is_empty() {
            return Err(FetchError::InvalidQuery(
                "at least one path parameter is required",
            ));
        }

        let time = std::time::Instant::now();
        let url = self.url(table, params);

        trace!("fetching SIDRA table {table} from {url}");
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // best effort; the status alone classifies the failure
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::HttpStatus {
                status,
                body: body.chars().take(BODY_SNIPPET_CHARS).collect(),
            });
        }

        let body = response.bytes().await?;
        let table_rows = parse_payload(&body)?;
        debug!(
            "fetched SIDRA table {table}, {} rows. {}",
            table_rows.len(),
            crate::time_elapsed(time)
        );

        Ok(table_rows)
    }

    /// GET a SIDRA table; any failure is logged and reported as `None`, i.e., no data available.
    pub async fn fetch(&self, table: TableId, params: &Params) -> Option<RawTable> {
        match self.try_fetch(table, params).await {
            Ok(table_rows) => Some(table_rows),
            Err(err) => {
                error!("failed to fetch SIDRA table {table}, error({err})");
                None
            }
        }
    }
}

/// Decode a SIDRA response body: a JSON array of flat objects.
///
/// Scalars become strings (`null` becomes `""`); nested values are rejected.
///
/// ```rust
/// use ibge_spider::sidra::parse_payload;
///
/// let body = r#"[{"D3N": "Mês", "V": "Valor"}, {"D3N": "março 2022", "V": 1.62}]"#;
/// let rows = parse_payload(body.as_bytes()).unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1]["V"], "1.62");
/// ```
pub fn parse_payload(body: &[u8]) -> Result<RawTable, FetchError> {
    let payload: Value = serde_json::from_slice(body)?;

    let items = match payload {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::UnexpectedShape(format!(
                "expected an array of rows, found {}",
                kind(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(FetchError::EmptyPayload);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(cells) => cells
                .into_iter()
                .map(|(column, cell)| match cell_text(cell) {
                    Some(text) => Ok((column, text)),
                    None => Err(FetchError::UnexpectedShape(format!(
                        "nested value in row {i}, column `{column}`"
                    ))),
                })
                .collect::<Result<RawRow, FetchError>>(),
            other => Err(FetchError::UnexpectedShape(format!(
                "expected row {i} to be an object, found {}",
                kind(&other)
            ))),
        })
        .collect()
}

fn cell_text(cell: Value) -> Option<String> {
    match cell {
        Value::String(text) => Some(text),
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
