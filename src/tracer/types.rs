use std::fmt;

use num_traits::{CheckedSub, Num};

use crate::errors::{AppError, Result};

/// Numeric type the solver can run over (signed integers and floats).
pub trait Price: Num + Copy + PartialOrd + fmt::Debug {
    /// `self - rhs`, or `None` when the difference is not representable.
    fn diff(self, rhs: Self) -> Option<Self>;
}

macro_rules! checked_price {
    ($($t:ty),*) => {$(
        impl Price for $t {
            fn diff(self, rhs: Self) -> Option<Self> {
                CheckedSub::checked_sub(&self, &rhs)
            }
        }
    )*};
}

macro_rules! float_price {
    ($($t:ty),*) => {$(
        impl Price for $t {
            fn diff(self, rhs: Self) -> Option<Self> {
                Some(self - rhs)
            }
        }
    )*};
}

checked_price!(i8, i16, i32, i64, i128, isize);
float_price!(f32, f64);

/// Upper bound on the number of non-overlapping buy-then-sell pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionBudget(usize);

impl TransactionBudget {
    pub fn new(k: usize) -> Result<Self> {
        if k == 0 {
            return Err(AppError::InvalidBudget { requested: 0 });
        }
        Ok(Self(k))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for TransactionBudget {
    type Error = AppError;

    fn try_from(k: i64) -> Result<Self> {
        match usize::try_from(k) {
            Ok(k) if k > 0 => Ok(Self(k)),
            _ => Err(AppError::InvalidBudget { requested: k }),
        }
    }
}

/// What a trace sequence records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    /// Passthrough copy of the input prices.
    Price,
    /// Running minimum net cost of the buy for pair `j`.
    Buy(usize),
    /// Running maximum profit after selling pair `j`.
    Sell(usize),
}

impl SeriesRole {
    /// Role of the trace sequence at `index` (0 = price, then buy0, sell0, buy1, ...).
    pub fn at(index: usize) -> Self {
        match index {
            0 => Self::Price,
            i if i % 2 == 1 => Self::Buy((i - 1) / 2),
            i => Self::Sell((i - 2) / 2),
        }
    }
}

impl fmt::Display for SeriesRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price => write!(f, "price"),
            Self::Buy(j) => write!(f, "buy{j}"),
            Self::Sell(j) => write!(f, "sell{j}"),
        }
    }
}

/// Step-by-step history of every DP slot, plus the input prices.
///
/// Holds `2K + 1` sequences of equal length: index 0 is the price series,
/// then `buy_cost_0, sell_profit_0, buy_cost_1, ...`. Sequences only grow,
/// one value per processed price.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace<T> {
    series: Vec<Vec<T>>,
}

impl<T: Price> Trace<T> {
    pub(crate) fn new(prices: &[T], budget: TransactionBudget) -> Self {
        let mut series = Vec::with_capacity(2 * budget.get() + 1);
        series.push(prices.to_vec());
        series.extend((0..2 * budget.get()).map(|_| Vec::with_capacity(prices.len())));
        Self { series }
    }

    pub(crate) fn record(&mut self, slot: usize, buy_cost: T, sell_profit: T) {
        self.series[2 * slot + 1].push(buy_cost);
        self.series[2 * slot + 2].push(sell_profit);
    }

    pub fn prices(&self) -> &[T] {
        &self.series[0]
    }

    /// History of `buy_cost_j`, or `None` past the budget.
    pub fn buy_costs(&self, j: usize) -> Option<&[T]> {
        self.series.get(2 * j + 1).map(Vec::as_slice)
    }

    /// History of `sell_profit_j`, or `None` past the budget.
    pub fn sell_profits(&self, j: usize) -> Option<&[T]> {
        self.series.get(2 * j + 2).map(Vec::as_slice)
    }

    /// Number of sequences (`2K + 1`).
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Number of processed prices.
    pub fn steps(&self) -> usize {
        self.series[0].len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SeriesRole, &[T])> {
        self.series
            .iter()
            .enumerate()
            .map(|(i, s)| (SeriesRole::at(i), s.as_slice()))
    }
}

/// Outcome of one solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct TracedProfit<T> {
    /// Best profit with at most K pairs.
    pub max_profit: T,
    /// Best profit for every budget `1..=K`, taken from the final `sell_profit_j`.
    pub profit_by_budget: Vec<T>,
    pub trace: Trace<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_rejects_zero_and_negative() {
        assert!(matches!(
            TransactionBudget::new(0),
            Err(AppError::InvalidBudget { requested: 0 })
        ));
        assert!(matches!(
            TransactionBudget::try_from(-2i64),
            Err(AppError::InvalidBudget { requested: -2 })
        ));
        assert_eq!(TransactionBudget::try_from(3i64).unwrap().get(), 3);
    }

    #[test]
    fn roles_follow_price_buy_sell_order() {
        let names: Vec<String> = (0..5).map(|i| SeriesRole::at(i).to_string()).collect();
        assert_eq!(names, ["price", "buy0", "sell0", "buy1", "sell1"]);
    }

    #[test]
    fn new_trace_has_price_copy_and_empty_slots() {
        let budget = TransactionBudget::new(2).unwrap();
        let trace = Trace::new(&[4, 2, 7], budget);
        assert_eq!(trace.series_count(), 5);
        assert_eq!(trace.steps(), 3);
        assert_eq!(trace.prices(), &[4, 2, 7]);
        assert!(trace.buy_costs(1).is_some_and(<[i32]>::is_empty));
        assert_eq!(trace.sell_profits(2), None);
    }

    #[test]
    fn integer_diff_reports_overflow() {
        assert_eq!(5i64.diff(7), Some(-2));
        assert_eq!(i64::MAX.diff(-1), None);
        assert_eq!((-(1i64 << 62)).diff(1 << 62), Some(i64::MIN));
        assert_eq!((1i64 << 62).diff(-(1 << 62)), None);
        assert_eq!(1.5f64.diff(4.0), Some(-2.5));
    }
}
