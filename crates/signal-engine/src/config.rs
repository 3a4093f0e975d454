use serde::{Deserialize, Serialize};

/// Tunable thresholds and periods for one engine instance.
///
/// Everything the decision logic compares against lives here so callers can
/// override it explicitly instead of relying on buried constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RSI lookback period.
    pub rsi_period: usize,

    /// RSI below this counts as an oversold (bullish) vote.
    pub rsi_oversold: f64,

    /// RSI above this counts as an overbought (bearish) vote.
    pub rsi_overbought: f64,

    /// Short and long SMA periods compared for trend direction.
    pub sma_short_period: usize,
    pub sma_long_period: usize,

    /// Fast/slow/signal periods for MACD.
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,

    /// Bollinger band period and standard-deviation multiplier.
    pub bollinger_period: usize,
    pub bollinger_k: f64,

    /// Trailing window for the volume average.
    pub volume_period: usize,

    /// Volume ratio above this counts as a bullish vote.
    pub volume_spike_ratio: f64,

    /// Minimum observations before any scored decision is attempted.
    pub min_history: usize,

    /// Minimum observations the indicator aggregator needs.
    pub min_indicator_history: usize,

    /// Vote margin required before a Buy or Sell is issued.
    pub decision_threshold: f64,

    /// Confidence above this downgrades risk from Medium to Low.
    pub low_risk_threshold: f64,

    /// Hard cap on reported confidence.
    pub confidence_cap: f64,

    /// Fraction of portfolio suggested for Buy/Sell decisions.
    pub suggested_amount: f64,

    /// Stop-loss and take-profit distances as fractions of last price.
    pub stop_loss_pct: f64,
    pub take_profit_pct: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            sma_short_period: 20,
            sma_long_period: 50,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            bollinger_period: 20,
            bollinger_k: 2.0,
            volume_period: 20,
            volume_spike_ratio: 1.5,
            min_history: 20,
            min_indicator_history: 50,
            decision_threshold: 0.6,
            low_risk_threshold: 0.8,
            confidence_cap: 0.95,
            suggested_amount: 0.10,
            stop_loss_pct: 0.05,
            take_profit_pct: 0.10,
        }
    }
}
