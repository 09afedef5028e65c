use std::fmt;

/// A SIDRA table identifier; always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableId(u32);

impl TableId {
    /// Table 1736: INPC, monthly series.
    pub const INPC: TableId = TableId(1736);

    /// Table 1737: IPCA, historical series with index number, monthly variation and variations
    /// accumulated over 3, 6 & 12 months and within the year (from December 1979).
    pub const IPCA: TableId = TableId(1737);

    pub fn new(id: u32) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Period selector for the `p` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    /// The most recent `n` periods.
    Last(u32),
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Last(n) => write!(f, "last {n}"),
        }
    }
}

/// Ordered SIDRA path parameters.
///
/// The API is positional-in-path, so insertion order is kept; re-inserting an existing key
/// replaces its value without moving it.
///
/// ```rust
/// use ibge_spider::sidra::Params;
///
/// let params = Params::new().with("n1", "1").with("v", "63").with("n1", "2");
/// let pairs: Vec<_> = params.iter().collect();
/// assert_eq!(pairs, [("n1", "2"), ("v", "63")]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Join the base endpoint, the table and every parameter into a SIDRA query URL.
///
/// Values are inserted verbatim; anything that needs escaping must already be escaped.
///
/// ```rust
/// use ibge_spider::sidra::{build_url, Params, TableId};
///
/// let params = Params::new().with("n1", "1").with("v", "63").with("p", "last 12");
/// assert_eq!(
///     build_url("https://apisidra.ibge.gov.br/values", TableId::IPCA, &params),
///     "https://apisidra.ibge.gov.br/values/t/1737/n1/1/v/63/p/last 12"
/// );
/// ```
pub fn build_url(base_url: &str, table: TableId, params: &Params) -> String {
    let mut url = format!("{}/t/{table}", base_url.trim_end_matches('/'));
    for (key, value) in params.iter() {
        url.push('/');
        url.push_str(key);
        url.push('/');
        url.push_str(value);
    }
    url
}
