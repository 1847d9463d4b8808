use tracing::debug;

use super::state::DpState;
use super::types::{Price, Trace, TracedProfit, TransactionBudget};
use crate::errors::Result;

/// Best profit from at most `budget` non-overlapping buy/sell pairs, together
/// with the value of every DP slot after each price.
///
/// Single pass, `O(N * K)` time. The input is not modified. Fails with
/// [`AppError::Overflow`](crate::errors::AppError::Overflow) when a price
/// spread does not fit in `T`; no partial trace is returned.
pub fn trace_max_profit<T: Price>(
    prices: &[T],
    budget: TransactionBudget,
) -> Result<TracedProfit<T>> {
    let mut state = DpState::new(budget);
    let mut trace = Trace::new(prices, budget);

    for &price in prices {
        state.observe(price, |slot, buy_cost, sell_profit| {
            trace.record(slot, buy_cost, sell_profit)
        })?;
    }

    let max_profit = state.max_profit();
    let profit_by_budget = state.slots().iter().map(|slot| slot.sell_profit).collect();
    debug!(
        steps = prices.len(),
        transactions = budget.get(),
        ?max_profit,
        "[TRACE] run complete"
    );

    Ok(TracedProfit {
        max_profit,
        profit_by_budget,
        trace,
    })
}

/// Profit only. Rejects `k <= 0` before allocating anything.
pub fn max_profit(prices: &[i64], k: i64) -> Result<i64> {
    let budget = TransactionBudget::try_from(k)?;
    Ok(trace_max_profit(prices, budget)?.max_profit)
}
