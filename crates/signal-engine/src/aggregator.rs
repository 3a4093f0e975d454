use signal_core::{
    BollingerBands, IndicatorSnapshot, MacdIndicator, MarketObservation, MovingAverages,
    SignalError, VolumeProfile,
};

use crate::config::EngineConfig;
use crate::indicators::{bollinger, ema, macd, rsi, sma};

/// Neutral RSI reported when the series is too short for a real value.
const NEUTRAL_RSI: f64 = 50.0;

/// Compute a full indicator snapshot from the observation sequence.
///
/// Requires at least `config.min_indicator_history` observations. Where an
/// individual sub-indicator still cannot be computed, a documented neutral
/// default is substituted (RSI 50, MACD and Bollinger all zeros) so the
/// composer can keep scoring; the moving averages stay `None` instead so
/// the trend vote can be skipped honestly.
pub fn indicator_snapshot(
    observations: &[MarketObservation],
    config: &EngineConfig,
) -> Result<IndicatorSnapshot, SignalError> {
    if observations.len() < config.min_indicator_history {
        return Err(SignalError::InsufficientData(format!(
            "Need at least {} observations for indicators, got {}",
            config.min_indicator_history,
            observations.len()
        )));
    }

    let prices: Vec<f64> = observations.iter().map(|o| o.price).collect();
    let volumes: Vec<f64> = observations.iter().map(|o| o.volume).collect();

    let moving_averages = MovingAverages {
        sma20: sma(&prices, config.sma_short_period),
        sma50: sma(&prices, config.sma_long_period),
        ema12: ema(&prices, config.macd_fast_period),
        ema26: ema(&prices, config.macd_slow_period),
    };

    let current = *volumes.last().unwrap_or(&0.0);
    let average = sma(&volumes, config.volume_period.min(volumes.len())).unwrap_or(0.0);
    // Zero average volume yields ratio 0 rather than NaN/infinity.
    let ratio = if average > 0.0 { current / average } else { 0.0 };

    Ok(IndicatorSnapshot {
        rsi: rsi(&prices, config.rsi_period).unwrap_or(NEUTRAL_RSI),
        macd: macd(
            &prices,
            config.macd_fast_period,
            config.macd_slow_period,
            config.macd_signal_period,
        )
        .unwrap_or(MacdIndicator::ZERO),
        moving_averages,
        bollinger: bollinger(&prices, config.bollinger_period, config.bollinger_k)
            .unwrap_or(BollingerBands::ZERO),
        volume: VolumeProfile {
            current,
            average,
            ratio,
        },
    })
}
