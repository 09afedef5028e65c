use crate::cli::Format;
use crate::output;
use anyhow::Context;
use ibge_spider::sidra::{
    normalize, Columns, Index, MonthlyVariation, SidraClient, UnparseablePolicy,
};
use ibge_spider::Config;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{debug, error, info};

/// Collect an index's monthly variation from SIDRA and print it.
pub(crate) async fn run(
    config: &Config,
    index: Index,
    last: u32,
    policy: UnparseablePolicy,
    format: Format,
    tui: bool,
) -> anyhow::Result<()> {
    let client = SidraClient::new(config)?;
    debug!("SIDRA client built for {}", client.base_url());

    // spinner
    let pb = if tui {
        let pb = ProgressBar::new_spinner().with_style(
            ProgressStyle::default_spinner().template("{msg} {spinner:.magenta} [{elapsed}]")?,
        );
        pb.set_message(format!(
            "collecting {} for the last {last} months ...",
            index.name()
        ));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    } else {
        ProgressBar::hidden()
    };

    let time = std::time::Instant::now();
    let result = collect(&client, index, last, policy).await;
    pb.finish_and_clear();
    let rows = result?;

    info!(
        "{} data collected, {} months, time elapsed: {:?}",
        index.name(),
        rows.len(),
        time.elapsed()
    );

    print!("{}", output::render(&rows, format, tui)?);

    Ok(())
}

/// Fetch & normalize, keeping the classified fetch failure as the error's cause so it reaches
/// the user with or without a tracing subscriber.
pub(crate) async fn collect(
    client: &SidraClient,
    index: Index,
    last: u32,
    policy: UnparseablePolicy,
) -> anyhow::Result<Vec<MonthlyVariation>> {
    let table = client
        .try_fetch(index.table(), &index.params(last))
        .await
        .map_err(|err| {
            error!("failed to fetch SIDRA table {}, error({err})", index.table());
            err
        })
        .with_context(|| {
            format!(
                "no {} data available from SIDRA table {}",
                index.name(),
                index.table()
            )
        })?;

    normalize(&table, &Columns::default(), policy)
        .map_err(|err| {
            error!("failed to normalize {} data, error({err})", index.name());
            err
        })
        .with_context(|| format!("unexpected {} table layout", index.name()))
}
