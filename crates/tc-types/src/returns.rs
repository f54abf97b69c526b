//! Historical log-return series.
//!
//! [`LogReturnSeries`] is the validated input to parameter estimation: one
//! log return per historical trading interval, all finite. Cleansing of the
//! raw price feed (gap filling, deduplication) is an upstream concern; this
//! type only refuses input that would poison the estimates.

use serde::{Deserialize, Serialize};

use crate::errors::{TcError, TcResult};
use crate::{insufficient_data, invalid_parameter};

/// An ordered series of periodic log returns, `ln(P_t / P_{t-1})`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogReturnSeries(Vec<f64>);

impl LogReturnSeries {
    /// Wrap a precomputed return series.
    ///
    /// Rejects empty input and non-finite values.
    pub fn new(returns: Vec<f64>) -> TcResult<Self> {
        if returns.is_empty() {
            return Err(insufficient_data!("log-return series is empty"));
        }
        if let Some(idx) = returns.iter().position(|r| !r.is_finite()) {
            return Err(invalid_parameter!(
                "log_returns",
                "non-finite return {} at index {}",
                returns[idx],
                idx
            ));
        }
        Ok(Self(returns))
    }

    /// Compute log returns from a chronologically ordered price history.
    ///
    /// Every price must be strictly positive and finite; a violation maps to
    /// [`TcError::InvalidPrice`] with the offending index.
    pub fn from_prices(prices: &[f64]) -> TcResult<Self> {
        if prices.len() < 2 {
            return Err(insufficient_data!(
                "need at least 2 prices to form a return, got {}",
                prices.len()
            ));
        }
        for (index, &value) in prices.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(TcError::InvalidPrice { index, value });
            }
        }

        let returns = prices
            .windows(2)
            .map(|pair| (pair[1] / pair[0]).ln())
            .collect();
        Ok(Self(returns))
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_prices_computes_log_returns() {
        let series = LogReturnSeries::from_prices(&[100.0, 110.0, 99.0]).unwrap();
        assert_eq!(series.len(), 2);
        assert!((series.values()[0] - (110.0f64 / 100.0).ln()).abs() < 1e-12);
        assert!((series.values()[1] - (99.0f64 / 110.0).ln()).abs() < 1e-12);
    }

    #[test]
    fn from_prices_flat_history_yields_zero_return() {
        let series = LogReturnSeries::from_prices(&[50.0, 50.0]).unwrap();
        assert_eq!(series.values(), &[0.0]);
    }

    #[test]
    fn from_prices_rejects_nonpositive_price() {
        let err = LogReturnSeries::from_prices(&[100.0, 0.0, 101.0]).unwrap_err();
        match err {
            TcError::InvalidPrice { index, value } => {
                assert_eq!(index, 1);
                assert_eq!(value, 0.0);
            }
            other => panic!("Expected InvalidPrice, got {other}"),
        }
    }

    #[test]
    fn from_prices_rejects_single_price() {
        let err = LogReturnSeries::from_prices(&[100.0]).unwrap_err();
        assert!(matches!(err, TcError::InsufficientData { .. }));
    }

    #[test]
    fn new_rejects_empty_and_nonfinite() {
        assert!(matches!(
            LogReturnSeries::new(vec![]),
            Err(TcError::InsufficientData { .. })
        ));
        assert!(matches!(
            LogReturnSeries::new(vec![0.01, f64::NAN]),
            Err(TcError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn serialization_roundtrip() {
        let series = LogReturnSeries::new(vec![0.01, -0.02, 0.005]).unwrap();
        let json = serde_json::to_string(&series).unwrap();
        let deserialized: LogReturnSeries = serde_json::from_str(&json).unwrap();
        assert_eq!(series, deserialized);
    }
}
