//! Client for IBGE's [SIDRA] statistics API.
//!
//! A SIDRA call is made up of the following components:
//! 1. query: table id & ordered path parameters
//! 2. fetch: one GET, decoded to a raw table of string cells
//! 3. normalize: project the label & value columns, drop the header row, parse
//!    the month labels and the numeric values
//!
//! [SIDRA]: https://apisidra.ibge.gov.br/

mod date;
mod error;
mod fetch;
mod months;
mod normalize;
mod query;
mod series;

pub use date::{format_month_label, parse_month_label};
pub use error::{FetchError, NormalizeError, UnknownMonth};
pub use fetch::{parse_payload, SidraClient};
pub use months::Month;
pub use normalize::{
    normalize, parse_value, Columns, MonthlyVariation, RawRow, RawTable, UnparseablePolicy,
};
pub use query::{build_url, Params, Period, TableId};
pub use series::{get_ipca_monthly_variation, Index, DEFAULT_LAST_MONTHS};
