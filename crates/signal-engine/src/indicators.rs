use signal_core::{BollingerBands, MacdIndicator};

/// Simple Moving Average over the trailing `period` values.
pub fn sma(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let sum: f64 = prices[prices.len() - period..].iter().sum();
    Some(sum / period as f64)
}

/// Exponential Moving Average, seeded with the first price and iterated
/// over the entire sequence with multiplier `2 / (period + 1)`.
pub fn ema(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period {
        return None;
    }

    ema_series(prices, period).last().copied()
}

/// Running EMA value at every index of the input. Used directly by MACD,
/// which needs the historical series rather than only the final value.
pub(crate) fn ema_series(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.is_empty() {
        return vec![];
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut result = Vec::with_capacity(prices.len());
    result.push(prices[0]);

    for i in 1..prices.len() {
        let prev = result[i - 1];
        result.push((prices[i] - prev) * multiplier + prev);
    }

    result
}

/// Relative Strength Index over the trailing `period` deltas.
///
/// Gains and losses are simple averages of the last `period` price changes
/// (losses as positive magnitudes). A zero average loss maps to 100.
pub fn rsi(prices: &[f64], period: usize) -> Option<f64> {
    if period == 0 || prices.len() < period + 1 {
        return None;
    }

    let mut gain_sum = 0.0;
    let mut loss_sum = 0.0;

    for w in prices[prices.len() - period - 1..].windows(2) {
        let change = w[1] - w[0];
        if change > 0.0 {
            gain_sum += change;
        } else {
            loss_sum += change.abs();
        }
    }

    let avg_gain = gain_sum / period as f64;
    let avg_loss = loss_sum / period as f64;

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - 100.0 / (1.0 + rs))
}

/// MACD (Moving Average Convergence Divergence).
///
/// The line is `EMA(fast) - EMA(slow)` at the latest index; the signal line
/// is a trailing `signal_period` EMA of the historical macd series. The
/// degenerate single-value signal some references compute is deliberately
/// not used here.
pub fn macd(
    prices: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<MacdIndicator> {
    if fast_period == 0
        || slow_period == 0
        || signal_period == 0
        || slow_period < fast_period
        || prices.len() < slow_period
    {
        return None;
    }

    let ema_fast = ema_series(prices, fast_period);
    let ema_slow = ema_series(prices, slow_period);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    let macd_value = *macd_line.last()?;
    let signal_value = *ema_series(&macd_line, signal_period).last()?;

    Some(MacdIndicator {
        macd: macd_value,
        signal: signal_value,
        histogram: macd_value - signal_value,
    })
}

/// Bollinger Bands around the trailing `period` SMA, `k` standard
/// deviations wide. Population variance, so flat prices collapse all three
/// bands onto the mean.
pub fn bollinger(prices: &[f64], period: usize, k: f64) -> Option<BollingerBands> {
    if period == 0 || prices.len() < period {
        return None;
    }

    let middle = sma(prices, period)?;
    let window = &prices[prices.len() - period..];
    let variance: f64 =
        window.iter().map(|p| (p - middle).powi(2)).sum::<f64>() / period as f64;
    let std_dev = variance.sqrt();

    Some(BollingerBands {
        upper: middle + k * std_dev,
        middle,
        lower: middle - k * std_dev,
    })
}
