#[cfg(test)]
mod tests {
    use super::super::config::EngineConfig;
    use super::super::patterns::detect_patterns;
    use signal_core::ChartPattern;

    fn config() -> EngineConfig {
        EngineConfig::default()
    }

    fn has(patterns: &[signal_core::PatternMatch], kind: ChartPattern) -> bool {
        patterns.iter().any(|p| p.pattern == kind)
    }

    #[test]
    fn test_silent_below_ten_observations() {
        let prices: Vec<f64> = (0..9).map(|i| 100.0 + i as f64).collect();
        assert!(detect_patterns(&prices, &config()).is_empty());
    }

    #[test]
    fn test_golden_cross_needs_long_history() {
        // Rising but only 30 prices: SMA50 is undefined, so no cross
        let prices: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
        let patterns = detect_patterns(&prices, &config());
        assert!(!has(&patterns, ChartPattern::GoldenCross));
    }

    #[test]
    fn test_golden_cross_on_uptrend() {
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let patterns = detect_patterns(&prices, &config());

        let cross = patterns
            .iter()
            .find(|p| p.pattern == ChartPattern::GoldenCross)
            .expect("golden cross should fire");
        assert_eq!(cross.confidence, 0.75);
        assert!(cross.bullish);
    }

    #[test]
    fn test_ascending_triangle_tolerates_small_dips() {
        // Dips of 0.5% stay inside the 2% tolerance
        let mut prices = vec![100.0];
        for i in 1..12 {
            let prev = prices[i - 1];
            prices.push(if i % 2 == 0 { prev * 0.995 } else { prev * 1.01 });
        }
        let patterns = detect_patterns(&prices, &config());
        assert!(has(&patterns, ChartPattern::AscendingTriangle));
    }

    #[test]
    fn test_ascending_triangle_rejects_sharp_drop() {
        let mut prices: Vec<f64> = (0..12).map(|i| 100.0 + i as f64).collect();
        let last = *prices.last().unwrap();
        prices.push(last * 0.90);
        let patterns = detect_patterns(&prices, &config());
        assert!(!has(&patterns, ChartPattern::AscendingTriangle));
    }

    #[test]
    fn test_double_bottom_on_repeated_minimum() {
        // Minimum 9.0 touched twice in the trailing ten
        let prices = vec![10.0, 9.0, 10.0, 9.0, 10.0, 11.0, 12.0, 11.0, 12.0, 13.0];
        let patterns = detect_patterns(&prices, &config());

        let bottom = patterns
            .iter()
            .find(|p| p.pattern == ChartPattern::DoubleBottom)
            .expect("double bottom should fire");
        assert_eq!(bottom.confidence, 0.70);
        assert!(bottom.bullish);
    }

    #[test]
    fn test_double_bottom_absent_with_unique_minimum() {
        let prices: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let patterns = detect_patterns(&prices, &config());
        assert!(!has(&patterns, ChartPattern::DoubleBottom));
    }

    #[test]
    fn test_checks_are_independent() {
        // A strong 60-bar uptrend fires both the cross and the triangle
        let prices: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let patterns = detect_patterns(&prices, &config());
        assert!(has(&patterns, ChartPattern::GoldenCross));
        assert!(has(&patterns, ChartPattern::AscendingTriangle));
        assert!(!has(&patterns, ChartPattern::DoubleBottom));
    }
}
