use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One market sample for one instrument. Produced by an external feed,
/// ordered by timestamp ascending; never mutated by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketObservation {
    pub timestamp: DateTime<Utc>,
    pub symbol: String,
    /// Last-traded price, positive.
    pub price: f64,
    /// Volume traded in the sampling interval, non-negative.
    pub volume: f64,
}

/// MACD line, signal line and their difference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}

impl MacdIndicator {
    pub const ZERO: MacdIndicator = MacdIndicator {
        macd: 0.0,
        signal: 0.0,
        histogram: 0.0,
    };
}

/// The standard moving-average set. `None` means the series was too short
/// for that period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovingAverages {
    pub sma20: Option<f64>,
    pub sma50: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
}

/// Volatility envelope. Invariant: `lower <= middle <= upper`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

impl BollingerBands {
    pub const ZERO: BollingerBands = BollingerBands {
        upper: 0.0,
        middle: 0.0,
        lower: 0.0,
    };
}

/// Current volume against its trailing average. `ratio` is 0 when the
/// average is 0, so no NaN or infinity ever escapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeProfile {
    pub current: f64,
    pub average: f64,
    pub ratio: f64,
}

/// All indicators for one instrument at one point in time. Ephemeral —
/// recomputed from scratch on every analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    /// Relative Strength Index in [0, 100]; 50 when history is too short.
    pub rsi: f64,
    pub macd: MacdIndicator,
    pub moving_averages: MovingAverages,
    pub bollinger: BollingerBands,
    pub volume: VolumeProfile,
}

/// Chart patterns the recognizer can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPattern {
    GoldenCross,
    AscendingTriangle,
    DoubleBottom,
}

impl ChartPattern {
    pub fn name(&self) -> &'static str {
        match self {
            ChartPattern::GoldenCross => "Golden Cross",
            ChartPattern::AscendingTriangle => "Ascending Triangle",
            ChartPattern::DoubleBottom => "Double Bottom",
        }
    }
}

/// A recognized chart pattern with its heuristic confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternMatch {
    pub pattern: ChartPattern,
    /// In (0, 1].
    pub confidence: f64,
    /// True if the pattern historically precedes upward movement.
    pub bullish: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    pub fn to_label(&self) -> &'static str {
        match self {
            TradeAction::Buy => "Buy",
            TradeAction::Sell => "Sell",
            TradeAction::Hold => "Hold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Final output of one analysis call. A pure function of the input
/// observation sequence — identical input yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingDecision {
    pub symbol: String,
    pub action: TradeAction,
    /// In [0, 0.95].
    pub confidence: f64,
    pub risk_level: RiskLevel,
    /// Short textual justifications, for audit and debugging.
    pub reasoning: Vec<String>,
    /// Fraction of portfolio to commit; absent for Hold.
    pub suggested_amount: Option<f64>,
    /// Absent for Hold.
    pub stop_loss: Option<f64>,
    /// Absent for Hold.
    pub take_profit: Option<f64>,
}
