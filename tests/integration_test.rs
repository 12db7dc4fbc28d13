//! End-to-end engine tests.
//!
//! Tests cover:
//! - Reference scenarios (flat, steady rise, capitulation, empty)
//! - Aggregate decisions over the default four-strategy set
//! - Property tests: bounds, determinism, degenerate indicator values,
//!   monotonic series never producing a momentum SELL

mod common;

use approx::assert_abs_diff_eq;
use common::*;
use proptest::prelude::*;
use sigtrader::domain::aggregator::{analyze, Analysis};
use sigtrader::domain::engine_config::EngineConfig;
use sigtrader::domain::indicator::{ema, rsi, sma};
use sigtrader::domain::signal::{Action, Signal};
use sigtrader::domain::strategy::{self, StrategyKind};

fn signal_of(analysis: &Analysis, kind: StrategyKind) -> &Signal {
    analysis
        .signals
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, s)| s)
        .unwrap()
}

mod scenarios {
    use super::*;

    #[test]
    fn flat_series_holds_everywhere() {
        let prices = vec![100.0; 20];
        assert_abs_diff_eq!(sma(&prices, 20), 100.0);
        assert_eq!(rsi(&prices, 14), 50.0);

        let analysis = analyze(&series(prices), &EngineConfig::default());
        assert_eq!(
            signal_of(&analysis, StrategyKind::MeanReversion).action,
            Action::Hold
        );
        assert_eq!(signal_of(&analysis, StrategyKind::Momentum).action, Action::Hold);
        assert_eq!(analysis.decision.action, Action::Hold);
        assert_eq!(analysis.decision.strength, 0.0);
        assert_eq!(analysis.decision.confidence, 0.2);
    }

    #[test]
    fn steady_rise_triggers_trend_followers() {
        let analysis = analyze(&series(linear(100.0, 130.0, 20)), &EngineConfig::default());

        let crossover = signal_of(&analysis, StrategyKind::MovingAverageCrossover);
        assert_eq!(crossover.action, Action::Buy);
        assert_eq!(crossover.confidence, 0.7);

        let momentum = signal_of(&analysis, StrategyKind::Momentum);
        assert_eq!(momentum.action, Action::Buy);
        // prices[10] = 100 + 10 * 30/19, last = 130
        let base = 100.0 + 10.0 * 30.0 / 19.0;
        assert_abs_diff_eq!(momentum.strength, (130.0 - base) / base * 500.0, epsilon = 1e-9);
    }

    #[test]
    fn steady_rise_reads_as_overbought_overall() {
        // RSI sees 14 straight gains (100) and price sits 13% above its mean,
        // which together outweigh the trend followers.
        let analysis = analyze(&series(linear(100.0, 130.0, 20)), &EngineConfig::default());

        assert_eq!(signal_of(&analysis, StrategyKind::Rsi).action, Action::Sell);
        assert_eq!(
            signal_of(&analysis, StrategyKind::MeanReversion).action,
            Action::Sell
        );
        assert_eq!(analysis.decision.action, Action::Sell);
        assert_eq!(analysis.decision.reason, "2/4 strategies signal SELL");
        assert_abs_diff_eq!(analysis.decision.strength, 132.5 / 4.0, epsilon = 1e-9);
    }

    #[test]
    fn fifteen_losses_signal_rsi_buy() {
        let prices: Vec<f64> = (0..16).map(|i| 200.0 - i as f64 * 2.0).collect();
        assert_eq!(rsi(&prices, 14), 0.0);

        let signal = strategy::evaluate(
            StrategyKind::Rsi,
            &series(prices),
            &EngineConfig::default(),
        );
        assert_eq!(signal.action, Action::Buy);
        assert_abs_diff_eq!(signal.strength, 90.0);
        assert_eq!(signal.confidence, 0.75);
    }

    #[test]
    fn capitulation_aggregates_to_buy() {
        let mut prices: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        prices.extend([86.0; 5]);
        let analysis = analyze(&series(prices), &EngineConfig::default());

        let rsi_signal = signal_of(&analysis, StrategyKind::Rsi);
        assert_eq!(rsi_signal.action, Action::Buy);
        assert_abs_diff_eq!(rsi_signal.strength, 90.0);

        // mean = 91.25, deviation = -5.7534%
        let mr = signal_of(&analysis, StrategyKind::MeanReversion);
        assert_eq!(mr.action, Action::Buy);
        assert_abs_diff_eq!(mr.strength, 5.25 / 91.25 * 1000.0, epsilon = 1e-9);

        let buy_score = 90.0 * 0.75 + mr.strength * 0.65;
        let sell_score = signal_of(&analysis, StrategyKind::MovingAverageCrossover).strength * 0.7;

        assert_eq!(analysis.decision.action, Action::Buy);
        assert_eq!(analysis.decision.reason, "2/4 strategies signal BUY");
        assert_abs_diff_eq!(analysis.decision.strength, buy_score / 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            analysis.decision.confidence,
            buy_score / (buy_score + sell_score + 1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn empty_series_holds_without_panicking() {
        let analysis = analyze(&series(vec![]), &EngineConfig::default());
        assert_eq!(analysis.signals.len(), 4);
        for (kind, signal) in &analysis.signals {
            assert_eq!(signal.action, Action::Hold, "{kind}");
            assert_eq!(signal.strength, 0.0, "{kind}");
        }
        assert_eq!(analysis.decision.action, Action::Hold);
    }

    #[test]
    fn single_price_holds() {
        let analysis = analyze(&series(vec![42.0]), &EngineConfig::default());
        assert!(analysis.signals.iter().all(|(_, s)| s.action == Action::Hold));
        assert_eq!(signal_of(&analysis, StrategyKind::Momentum).confidence, 0.0);
    }
}

mod configured_engine {
    use super::*;

    #[test]
    fn disabling_strategies_changes_denominator() {
        let mut config = EngineConfig::default();
        config.enabled = vec![StrategyKind::Rsi, StrategyKind::MeanReversion];

        let mut prices: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        prices.extend([86.0; 5]);
        let analysis = analyze(&series(prices), &config);

        assert_eq!(analysis.signals.len(), 2);
        assert_eq!(analysis.decision.action, Action::Buy);
        assert_eq!(analysis.decision.reason, "2/2 strategies signal BUY");
    }

    #[test]
    fn raising_min_score_suppresses_decision() {
        let mut config = EngineConfig::default();
        config.min_score = 500.0;

        let mut prices: Vec<f64> = (0..15).map(|i| 100.0 - i as f64).collect();
        prices.extend([86.0; 5]);
        let analysis = analyze(&series(prices), &config);
        assert_eq!(analysis.decision.action, Action::Hold);
    }

    #[test]
    fn shorter_periods_react_sooner() {
        let prices = linear(100.0, 110.0, 6);
        let default = analyze(&series(prices.clone()), &EngineConfig::default());
        assert_eq!(signal_of(&default, StrategyKind::Momentum).action, Action::Hold);

        let mut config = EngineConfig::default();
        config.momentum.period = 5;
        let tuned = analyze(&series(prices), &config);
        assert_eq!(signal_of(&tuned, StrategyKind::Momentum).action, Action::Buy);
    }
}

fn assert_in_bounds(analysis: &Analysis) -> Result<(), TestCaseError> {
    for (kind, s) in &analysis.signals {
        prop_assert!((0.0..=100.0).contains(&s.strength), "{kind} strength {}", s.strength);
        prop_assert!((0.0..=1.0).contains(&s.confidence), "{kind} confidence {}", s.confidence);
    }
    let d = &analysis.decision;
    prop_assert!((0.0..=100.0).contains(&d.strength), "decision strength {}", d.strength);
    prop_assert!((0.0..=1.0).contains(&d.confidence), "decision confidence {}", d.confidence);
    Ok(())
}

proptest! {
    #[test]
    fn signals_stay_in_bounds(prices in prop::collection::vec(0.01f64..10_000.0, 0..80)) {
        let analysis = analyze(&series(prices), &EngineConfig::default());
        assert_in_bounds(&analysis)?;
    }

    #[test]
    fn signals_stay_in_bounds_for_any_float(prices in prop::collection::vec(any::<f64>(), 0..40)) {
        let analysis = analyze(&series(prices), &EngineConfig::default());
        assert_in_bounds(&analysis)?;
    }

    #[test]
    fn analysis_is_deterministic(prices in prop::collection::vec(1.0f64..500.0, 0..60)) {
        let s = series(prices);
        let config = EngineConfig::default();
        let first = analyze(&s, &config);
        let second = analyze(&s, &config);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_series_yield_degenerate_indicators(
        period in 1usize..40,
        prices in prop::collection::vec(1.0f64..500.0, 0..40),
    ) {
        if prices.len() < period {
            prop_assert_eq!(sma(&prices, period), 0.0);
            prop_assert_eq!(ema(&prices, period), 0.0);
        }
        if prices.len() < period + 1 {
            prop_assert_eq!(rsi(&prices, period), 50.0);
        }
    }

    #[test]
    fn rising_series_never_signal_momentum_sell(
        start in 1.0f64..1_000.0,
        steps in prop::collection::vec(0.001f64..5.0, 19..60),
    ) {
        let mut prices = vec![start];
        for step in &steps {
            let last = *prices.last().unwrap();
            prices.push(last + step);
        }
        prop_assume!(*prices.last().unwrap() > start * 1.05);

        let analysis = analyze(&series(prices), &EngineConfig::default());
        prop_assert_ne!(signal_of(&analysis, StrategyKind::Momentum).action, Action::Sell);
        prop_assert_ne!(
            signal_of(&analysis, StrategyKind::MovingAverageCrossover).action,
            Action::Sell
        );
    }
}
