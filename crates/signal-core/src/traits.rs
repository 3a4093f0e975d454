use async_trait::async_trait;

use crate::{MarketObservation, SignalError, TradingDecision};

/// Trait for market analysis engines producing trading decisions.
#[async_trait]
pub trait MarketAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        symbol: &str,
        observations: &[MarketObservation],
    ) -> Result<TradingDecision, SignalError>;
}
