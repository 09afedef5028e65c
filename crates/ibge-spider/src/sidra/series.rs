use super::error::NormalizeError;
use super::fetch::SidraClient;
use super::normalize::{normalize, Columns, MonthlyVariation, UnparseablePolicy};
use super::query::{Params, Period, TableId};
use tracing::{debug, info};

/// Months requested when the caller does not say otherwise.
pub const DEFAULT_LAST_MONTHS: u32 = 12;

/// Brazilian consumer price indices published through SIDRA.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Index {
    /// Índice Nacional de Preços ao Consumidor Amplo.
    Ipca,

    /// Índice Nacional de Preços ao Consumidor.
    Inpc,
}

impl Index {
    pub fn table(self) -> TableId {
        match self {
            Index::Ipca => TableId::IPCA,
            Index::Inpc => TableId::INPC,
        }
    }

    /// SIDRA variable holding the monthly variation.
    pub fn variable(self) -> &'static str {
        match self {
            Index::Ipca => "63",
            Index::Inpc => "44",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Index::Ipca => "IPCA",
            Index::Inpc => "INPC",
        }
    }

    /// Query for the national (`n1/1`) monthly variation over the last `last_n` months.
    ///
    /// ```rust
    /// use ibge_spider::sidra::Index;
    ///
    /// let params: Vec<_> = Index::Ipca.params(12).iter().map(|(k, v)| format!("{k}/{v}")).collect();
    /// assert_eq!(params.join("/"), "n1/1/v/63/p/last 12");
    /// ```
    pub fn params(self, last_n: u32) -> Params {
        Params::new()
            .with("n1", "1")
            .with("v", self.variable())
            .with("p", Period::Last(last_n).to_string())
    }
}

impl SidraClient {
    /// Fetch & normalize an index's monthly variation over the last `last_n` months.
    ///
    /// `Ok(None)` means no data was available (the fetch failure has already been logged); an
    /// `Err` means SIDRA answered with a table this crate does not understand.
    pub async fn monthly_variation(
        &self,
        index: Index,
        last_n: u32,
        policy: UnparseablePolicy,
    ) -> Result<Option<Vec<MonthlyVariation>>, NormalizeError> {
        let Some(table) = self.fetch(index.table(), &index.params(last_n)).await else {
            return Ok(None);
        };

        let time = std::time::Instant::now();
        let rows = normalize(&table, &Columns::default(), policy)?;
        debug!(
            "normalized {} monthly variation, {} rows. {}",
            index.name(),
            rows.len(),
            crate::time_elapsed(time)
        );
        info!("{} monthly variation collected", index.name());

        Ok(Some(rows))
    }
}

/// IPCA monthly variation for the last `last_n` months (usually [`DEFAULT_LAST_MONTHS`]).
pub async fn get_ipca_monthly_variation(
    client: &SidraClient,
    last_n: u32,
) -> Result<Option<Vec<MonthlyVariation>>, NormalizeError> {
    client
        .monthly_variation(Index::Ipca, last_n, UnparseablePolicy::Abort)
        .await
}
