//! Property tests for the statistics engine.

use proptest::prelude::*;
use restbreak_core::{MetricId, MetricValue, StatsEngine};

const ACCUMULATIVE: [MetricId; 10] = [
    MetricId::TotalTime,
    MetricId::Activity,
    MetricId::Idleness,
    MetricId::MaxIdleness,
    MetricId::TinyBreaks,
    MetricId::TinyBreaksSkipped,
    MetricId::IdlenessSkippedTiny,
    MetricId::BigBreaks,
    MetricId::BigBreaksSkipped,
    MetricId::IdlenessSkippedBig,
];

fn accumulative_metric() -> impl Strategy<Value = MetricId> {
    prop::sample::select(ACCUMULATIVE.to_vec())
}

fn raw(value: MetricValue) -> u64 {
    match value {
        MetricValue::Count(n) | MetricValue::Duration(n) => n,
        other => panic!("not accumulative: {other:?}"),
    }
}

proptest! {
    #[test]
    fn increases_add_up(id in accumulative_metric(), deltas in prop::collection::vec(0u64..10_000, 1..20)) {
        let mut engine = StatsEngine::new();
        for &d in &deltas {
            engine.increase(id, d).unwrap();
        }
        prop_assert_eq!(raw(engine.get(id)), deltas.iter().sum::<u64>());
    }

    #[test]
    fn max_idleness_is_running_maximum(samples in prop::collection::vec(1u64..100_000, 1..30)) {
        let mut engine = StatsEngine::new();
        for &s in &samples {
            engine.set_value(MetricId::MaxIdleness, MetricValue::Duration(s), true).unwrap();
        }
        let max = samples.iter().copied().max().unwrap();
        prop_assert_eq!(engine.get(MetricId::MaxIdleness), MetricValue::Duration(max));
        prop_assert_eq!(engine.get(MetricId::Idleness), MetricValue::Duration(samples.len() as u64));
    }

    #[test]
    fn reset_is_idempotent(ops in prop::collection::vec((accumulative_metric(), 0u64..500), 0..40)) {
        let mut engine = StatsEngine::new();
        for (id, d) in ops {
            engine.increase(id, d).unwrap();
        }
        engine.reset();
        let once = engine.snapshot();
        engine.reset();
        prop_assert_eq!(engine.snapshot(), once);
        for id in MetricId::ALL {
            prop_assert_eq!(engine.get(id), MetricValue::zero(id.kind()));
        }
    }

    #[test]
    fn percentages_stay_in_range(
        total in 0u64..10_000,
        active in 0u64..10_000,
        tiny in 0u64..50,
        big in 0u64..50,
        tiny_skipped in 0u64..50,
        big_skipped in 0u64..50,
    ) {
        let mut engine = StatsEngine::new();
        // Activity never exceeds recorded time in practice.
        engine.increase(MetricId::TotalTime, total.max(active)).unwrap();
        engine.increase(MetricId::Activity, active).unwrap();
        engine.increase(MetricId::TinyBreaks, tiny.max(tiny_skipped)).unwrap();
        engine.increase(MetricId::BigBreaks, big.max(big_skipped)).unwrap();
        engine.increase(MetricId::TinyBreaksSkipped, tiny_skipped).unwrap();
        engine.increase(MetricId::BigBreaksSkipped, big_skipped).unwrap();

        for id in [MetricId::ActivityPercent, MetricId::PauseScore] {
            let MetricValue::Percentage(p) = engine.get(id) else {
                panic!("{id:?} is not a percentage");
            };
            prop_assert!((0.0..=100.0).contains(&p), "{:?} = {}", id, p);
        }
    }
}
