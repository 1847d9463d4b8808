use anyhow::Result;
use stock_profit_tracer::{
    config::AppConfig,
    dataset::SeriesCollection,
    tracer::trace_max_profit,
    utils,
};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    utils::init_logging();

    let config = AppConfig::load()?;
    tracing::info!(
        steps = config.prices.len(),
        transactions = config.budget.get(),
        output = ?config.output,
        "[INIT] stock-profit-tracer starting"
    );

    let result = trace_max_profit(&config.prices, config.budget)?;
    tracing::info!(
        max_profit = result.max_profit,
        by_budget = ?result.profit_by_budget,
        "[RESULT] traced max profit"
    );

    let dataset = SeriesCollection::from_trace(&result.trace);
    dataset.write_to(std::io::stdout().lock(), config.output)?;
    Ok(())
}
