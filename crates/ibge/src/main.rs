mod cli;
mod output;
mod spider;

// remote imports
use clap::Parser;
use cli::{Cli, TraceLevel};
use ibge_spider::sidra::{build_url, Params, TableId, UnparseablePolicy};
use ibge_spider::Config;
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// preproccess the trace level
fn preprocess(trace_level: Level) -> anyhow::Result<()> {
    let my_subscriber = FmtSubscriber::builder()
        .with_max_level(trace_level)
        .finish();
    subscriber::set_global_default(my_subscriber)?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenv::dotenv().ok();

    // set the trace level
    if let Some(trace_level) = cli.trace {
        preprocess(match trace_level {
            TraceLevel::DEBUG => Level::DEBUG,
            TraceLevel::ERROR => Level::ERROR,
            TraceLevel::INFO => Level::INFO,
            TraceLevel::TRACE => Level::TRACE,
            TraceLevel::WARN => Level::WARN,
        })?;
    }
    trace!("command line input recorded: {cli:?}");

    // if no trace level provided, use tui
    let tui = cli.trace.is_none();

    let config = Config::from_env();
    trace!("configuration loaded: {config:?}");

    // read cli inputs
    use cli::Commands::*;
    match cli.command {
        // `ibge variation`: fetch & print a price index's monthly variation
        Variation {
            index,
            last,
            format,
            skip_unparseable,
        } => {
            let policy = match skip_unparseable {
                true => UnparseablePolicy::Skip,
                false => UnparseablePolicy::Abort,
            };
            spider::run(&config, index.into(), last, policy, format, tui).await?
        }

        // `ibge url`: print the query URL only
        Url { table, params } => {
            let table = TableId::new(table)
                .ok_or_else(|| anyhow::anyhow!("table id must be a positive integer"))?;
            let params: Params = params.into_iter().collect();
            println!("{}", build_url(&config.base_url, table, &params));
        }
    }

    Ok(())
}
