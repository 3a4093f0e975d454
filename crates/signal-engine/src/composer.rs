use async_trait::async_trait;
use signal_core::{
    IndicatorSnapshot, MarketAnalyzer, MarketObservation, PatternMatch, RiskLevel, SignalError,
    TradeAction, TradingDecision,
};
use tracing::debug;

use crate::aggregator::indicator_snapshot;
use crate::config::EngineConfig;
use crate::patterns::detect_patterns;

/// Composes indicator and pattern evidence into one trading decision.
///
/// Stateless across calls: every invocation recomputes from the supplied
/// observation sequence alone, so concurrent use for different symbols
/// needs no coordination.
pub struct SignalEngine {
    config: EngineConfig,
}

/// Bullish/bearish vote tally with the reasons behind each vote.
struct VoteTally {
    bullish: u32,
    bearish: u32,
    reasoning: Vec<String>,
}

impl VoteTally {
    fn new() -> Self {
        Self {
            bullish: 0,
            bearish: 0,
            reasoning: Vec::new(),
        }
    }

    fn bullish(&mut self, reason: impl Into<String>) {
        self.bullish += 1;
        self.reasoning.push(reason.into());
    }

    fn bearish(&mut self, reason: impl Into<String>) {
        self.bearish += 1;
        self.reasoning.push(reason.into());
    }

    fn total(&self) -> u32 {
        self.bullish + self.bearish
    }
}

impl SignalEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Analyze one symbol's observation history and produce a decision.
    ///
    /// Never fails: insufficient input degrades to a conservative Hold with
    /// low confidence and High risk instead of an error.
    pub fn analyze(&self, symbol: &str, observations: &[MarketObservation]) -> TradingDecision {
        let cfg = &self.config;

        if observations.len() < cfg.min_history {
            return hold_decision(symbol, 0.1, "insufficient data");
        }

        // 20..min_indicator_history observations land here: enough to gate
        // past the entry check but not enough for the aggregator. This is
        // the explicit degraded path.
        let snapshot = match indicator_snapshot(observations, cfg) {
            Ok(s) => s,
            Err(_) => {
                return hold_decision(symbol, 0.2, "unable to calculate indicators");
            }
        };

        let prices: Vec<f64> = observations.iter().map(|o| o.price).collect();
        let patterns = detect_patterns(&prices, cfg);

        let tally = self.tally_votes(&snapshot, &patterns);

        let raw_confidence = if tally.total() > 0 {
            (tally.bullish as f64 - tally.bearish as f64).abs() / tally.total() as f64
        } else {
            0.0
        };
        let confidence = raw_confidence.min(cfg.confidence_cap);

        let action = if tally.bullish > tally.bearish && raw_confidence > cfg.decision_threshold {
            TradeAction::Buy
        } else if tally.bearish > tally.bullish && raw_confidence > cfg.decision_threshold {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        };

        debug!(
            symbol,
            bullish = tally.bullish,
            bearish = tally.bearish,
            confidence,
            action = action.to_label(),
            "composed trading signal"
        );

        let risk_level = match action {
            TradeAction::Hold => RiskLevel::High,
            _ if confidence > cfg.low_risk_threshold => RiskLevel::Low,
            _ => RiskLevel::Medium,
        };

        let price = observations.last().map(|o| o.price).unwrap_or(0.0);
        let (suggested_amount, stop_loss, take_profit) = match action {
            TradeAction::Buy => (
                Some(cfg.suggested_amount),
                Some(price * (1.0 - cfg.stop_loss_pct)),
                Some(price * (1.0 + cfg.take_profit_pct)),
            ),
            TradeAction::Sell => (
                Some(cfg.suggested_amount),
                Some(price * (1.0 + cfg.stop_loss_pct)),
                Some(price * (1.0 - cfg.take_profit_pct)),
            ),
            // Price targets are meaningless without a position direction.
            TradeAction::Hold => (None, None, None),
        };

        TradingDecision {
            symbol: symbol.to_string(),
            action,
            confidence,
            risk_level,
            reasoning: tally.reasoning,
            suggested_amount,
            stop_loss,
            take_profit,
        }
    }

    fn tally_votes(&self, snapshot: &IndicatorSnapshot, patterns: &[PatternMatch]) -> VoteTally {
        let cfg = &self.config;
        let mut tally = VoteTally::new();

        if snapshot.rsi < cfg.rsi_oversold {
            tally.bullish(format!("RSI oversold ({:.1})", snapshot.rsi));
        } else if snapshot.rsi > cfg.rsi_overbought {
            tally.bearish(format!("RSI overbought ({:.1})", snapshot.rsi));
        }

        // MACD always casts exactly one vote.
        if snapshot.macd.macd > snapshot.macd.signal {
            tally.bullish("MACD above signal line");
        } else {
            tally.bearish("MACD below signal line");
        }

        // So does the SMA trend comparison whenever both averages exist.
        if let (Some(short), Some(long)) = (
            snapshot.moving_averages.sma20,
            snapshot.moving_averages.sma50,
        ) {
            if short > long {
                tally.bullish("SMA20 above SMA50");
            } else {
                tally.bearish("SMA20 below SMA50");
            }
        }

        // Volume only ever votes bullish; quiet volume is not a sell signal.
        if snapshot.volume.ratio > cfg.volume_spike_ratio {
            tally.bullish(format!(
                "High volume activity ({:.1}x average)",
                snapshot.volume.ratio
            ));
        }

        for pattern in patterns {
            if pattern.bullish {
                tally.bullish(format!("{} pattern detected", pattern.pattern.name()));
            } else {
                tally.bearish(format!("{} pattern detected", pattern.pattern.name()));
            }
        }

        tally
    }
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketAnalyzer for SignalEngine {
    async fn analyze(
        &self,
        symbol: &str,
        observations: &[MarketObservation],
    ) -> Result<TradingDecision, SignalError> {
        Ok(SignalEngine::analyze(self, symbol, observations))
    }
}

fn hold_decision(symbol: &str, confidence: f64, reason: &str) -> TradingDecision {
    debug!(symbol, confidence, reason, "holding on degraded input");
    TradingDecision {
        symbol: symbol.to_string(),
        action: TradeAction::Hold,
        confidence,
        risk_level: RiskLevel::High,
        reasoning: vec![reason.to_string()],
        suggested_amount: None,
        stop_loss: None,
        take_profit: None,
    }
}
