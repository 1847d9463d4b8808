use super::types::{Price, TransactionBudget};
use crate::errors::{AppError, Result};

/// One `(buy_cost, sell_profit)` pair of the rolling DP array.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DpSlot<T> {
    /// Cheapest net cost of this pair's buy so far. `None` until a price
    /// has been observed; an unaffordable buy contributes no profit.
    pub buy_cost: Option<T>,
    /// Best profit after completing this pair so far. Starts at zero.
    pub sell_profit: T,
}

/// Rolling DP state: one slot per allowed transaction pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DpState<T> {
    slots: Vec<DpSlot<T>>,
    steps: usize,
}

impl<T: Price> DpState<T> {
    pub fn new(budget: TransactionBudget) -> Self {
        let slot = DpSlot {
            buy_cost: None,
            sell_profit: T::zero(),
        };
        Self {
            slots: vec![slot; budget.get()],
            steps: 0,
        }
    }

    /// Fold one price into every slot, in slot order.
    ///
    /// Slot `j` buys with the profit slot `j - 1` banked at this same step,
    /// then sells against the buy cost it just updated. `record` sees each
    /// slot's new values right after that slot is updated.
    ///
    /// Fails with [`AppError::Overflow`] when a difference does not fit in
    /// `T`. The state is then partially updated and must be discarded.
    pub fn observe(&mut self, price: T, mut record: impl FnMut(usize, T, T)) -> Result<()> {
        let step = self.steps;
        let overflow = |slot: usize| AppError::Overflow { step, slot };
        let mut banked = T::zero();
        for (j, slot) in self.slots.iter_mut().enumerate() {
            let candidate = price.diff(banked).ok_or_else(|| overflow(j))?;
            let buy_cost = match slot.buy_cost {
                Some(cost) if cost <= candidate => cost,
                _ => candidate,
            };
            slot.buy_cost = Some(buy_cost);

            let gain = price.diff(buy_cost).ok_or_else(|| overflow(j))?;
            if gain > slot.sell_profit {
                slot.sell_profit = gain;
            }
            banked = slot.sell_profit;

            record(j, buy_cost, slot.sell_profit);
        }
        self.steps += 1;
        Ok(())
    }

    /// Number of prices observed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn slots(&self) -> &[DpSlot<T>] {
        &self.slots
    }

    /// Profit of the last slot, i.e. the answer for the full budget.
    pub fn max_profit(&self) -> T {
        self.slots
            .last()
            .map_or_else(T::zero, |slot| slot.sell_profit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(k: usize) -> DpState<i64> {
        DpState::new(TransactionBudget::new(k).unwrap())
    }

    #[test]
    fn starts_unaffordable_with_zero_profit() {
        let s = state(2);
        assert_eq!(s.slots().len(), 2);
        assert!(s.slots().iter().all(|slot| slot.buy_cost.is_none()));
        assert_eq!(s.max_profit(), 0);
    }

    #[test]
    fn first_price_sets_every_buy_cost() {
        let mut s = state(3);
        let mut seen = Vec::new();
        s.observe(10, |j, buy, sell| seen.push((j, buy, sell))).unwrap();
        assert_eq!(seen, vec![(0, 10, 0), (1, 10, 0), (2, 10, 0)]);
    }

    #[test]
    fn slots_update_in_order_within_a_step() {
        let mut s = state(2);
        s.observe(1, |_, _, _| {}).unwrap();
        let mut seen = Vec::new();
        s.observe(5, |j, buy, sell| seen.push((j, buy, sell))).unwrap();
        assert_eq!(seen, vec![(0, 1, 4), (1, 1, 4)]);

        s.observe(2, |_, _, _| {}).unwrap();
        let mut seen = Vec::new();
        s.observe(6, |j, buy, sell| seen.push((j, buy, sell))).unwrap();
        assert_eq!(seen, vec![(0, 1, 5), (1, -2, 8)]);
        assert_eq!(s.max_profit(), 8);
        assert_eq!(s.steps(), 4);
    }

    #[test]
    fn unrepresentable_gain_is_an_error() {
        let mut s = state(1);
        s.observe(-(1 << 62), |_, _, _| {}).unwrap();
        let err = s.observe(1 << 62, |_, _, _| {}).unwrap_err();
        assert!(matches!(err, AppError::Overflow { step: 1, slot: 0 }));
    }
}
