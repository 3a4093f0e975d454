use signal_core::{ChartPattern, PatternMatch};

use crate::config::EngineConfig;
use crate::indicators::sma;

/// Fewer observations than this and the recognizer stays silent rather
/// than guessing on noise.
const MIN_PATTERN_HISTORY: usize = 10;

/// Window the triangle and double-bottom scans look at.
const SCAN_WINDOW: usize = 10;

/// Successive prices may dip to 98% of their predecessor and still count
/// as non-decreasing for the triangle scan.
const TRIANGLE_TOLERANCE: f64 = 0.98;

fn golden_cross(prices: &[f64], config: &EngineConfig) -> Option<PatternMatch> {
    let short = sma(prices, config.sma_short_period)?;
    let long = sma(prices, config.sma_long_period)?;

    if short > long {
        return Some(PatternMatch {
            pattern: ChartPattern::GoldenCross,
            confidence: 0.75,
            bullish: true,
        });
    }

    None
}

fn ascending_triangle(prices: &[f64]) -> Option<PatternMatch> {
    if prices.len() < SCAN_WINDOW {
        return None;
    }

    let window = &prices[prices.len() - SCAN_WINDOW..];
    let holds = window
        .windows(2)
        .all(|w| w[1] >= w[0] * TRIANGLE_TOLERANCE);

    if holds {
        return Some(PatternMatch {
            pattern: ChartPattern::AscendingTriangle,
            confidence: 0.65,
            bullish: true,
        });
    }

    None
}

fn double_bottom(prices: &[f64]) -> Option<PatternMatch> {
    if prices.len() < SCAN_WINDOW {
        return None;
    }

    let window = &prices[prices.len() - SCAN_WINDOW..];
    let min = window.iter().copied().fold(f64::INFINITY, f64::min);
    let touches = window.iter().filter(|&&p| p == min).count();

    if touches >= 2 {
        return Some(PatternMatch {
            pattern: ChartPattern::DoubleBottom,
            confidence: 0.70,
            bullish: true,
        });
    }

    None
}

/// Scan the price history for chart patterns. The checks are independent —
/// zero, one, or all of them may fire; emission order carries no meaning
/// downstream since votes are summed.
pub fn detect_patterns(prices: &[f64], config: &EngineConfig) -> Vec<PatternMatch> {
    if prices.len() < MIN_PATTERN_HISTORY {
        return vec![];
    }

    let mut patterns = Vec::new();

    if let Some(p) = golden_cross(prices, config) {
        patterns.push(p);
    }

    if let Some(p) = ascending_triangle(prices) {
        patterns.push(p);
    }

    if let Some(p) = double_bottom(prices) {
        patterns.push(p);
    }

    patterns
}
