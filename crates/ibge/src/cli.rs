use clap::{Parser, Subcommand, ValueEnum};
use ibge_spider::sidra::{Index, DEFAULT_LAST_MONTHS};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the monthly variation of a consumer price index from IBGE's SIDRA API.
    Variation {
        /// The price index to collect.
        #[arg(short, long, value_enum, default_value_t = PriceIndex::Ipca)]
        index: PriceIndex,

        /// Number of most recent months to collect.
        #[arg(short, long, default_value_t = DEFAULT_LAST_MONTHS, value_parser = clap::value_parser!(u32).range(1..))]
        last: u32,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = Format::Table)]
        format: Format,

        /// Drop rows whose month label cannot be parsed, instead of failing.
        #[arg(long)]
        skip_unparseable: bool,
    },

    /// Print the SIDRA query URL for a table, without fetching it.
    Url {
        /// SIDRA table id, e.g., 1737 for the IPCA.
        #[arg(long)]
        table: u32,

        /// Path parameters as `key=value`, in order, e.g., `-p n1=1 -p v=63 -p "p=last 12"`.
        #[arg(short, long = "param", value_parser = parse_param, required = true)]
        params: Vec<(String, String)>,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum PriceIndex {
    /// IPCA, table 1737.
    Ipca,

    /// INPC, table 1736.
    Inpc,
}

impl From<PriceIndex> for Index {
    fn from(index: PriceIndex) -> Self {
        match index {
            PriceIndex::Ipca => Index::Ipca,
            PriceIndex::Inpc => Index::Inpc,
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// Aligned columns.
    Table,

    /// A JSON array of `{month, monthly_variation}` objects.
    Json,

    /// Comma-separated values, with a header line.
    Csv,
}

fn parse_param(arg: &str) -> Result<(String, String), String> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected `key=value`, got `{arg}`")),
    }
}
