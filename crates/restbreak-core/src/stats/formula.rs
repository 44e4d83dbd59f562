//! Recompute formulas for derived metrics.
//!
//! The set is closed: one function per derived metric, registered in
//! [`registry`]. Each formula reads the store and the current time of day
//! and says how its metric should change.

use std::collections::BTreeMap;

use chrono::NaiveTime;

use super::metric::{MetricId, MetricValue};
use super::store::MetricStore;

/// What a formula asks the engine to do with its metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recompute {
    /// Overwrite with a freshly computed value.
    Set(MetricValue),
    /// Accumulate onto the current value.
    Increase(u64),
}

pub type Formula = fn(&MetricStore, NaiveTime) -> Recompute;

/// Formulas keyed by the derived metric they produce.
pub fn registry() -> BTreeMap<MetricId, Formula> {
    let mut formulas: BTreeMap<MetricId, Formula> = BTreeMap::new();
    formulas.insert(MetricId::PauseScore, pause_score);
    formulas.insert(MetricId::ActivityPercent, activity_percent);
    formulas.insert(MetricId::Idleness, idleness_tick);
    formulas.insert(MetricId::LastTinyBreak, stamp_now);
    formulas.insert(MetricId::LastBigBreak, stamp_now);
    formulas
}

/// Break compliance in percent. Skips caused by idleness are forgiven and
/// big breaks weigh double.
pub fn pause_score(store: &MetricStore, _now: NaiveTime) -> Recompute {
    let tiny_skipped = store.number(MetricId::TinyBreaksSkipped);
    let big_skipped = store.number(MetricId::BigBreaksSkipped);
    let tiny_idle = store.number(MetricId::IdlenessSkippedTiny);
    let big_idle = store.number(MetricId::IdlenessSkippedBig);

    let skipped = (tiny_skipped - tiny_skipped.min(tiny_idle))
        + 2.0 * (big_skipped - big_skipped.min(big_idle));
    let total = store.number(MetricId::TinyBreaks) + 2.0 * store.number(MetricId::BigBreaks);

    let score = if total > 0.0 {
        100.0 - (skipped / total) * 100.0
    } else {
        0.0
    };
    Recompute::Set(MetricValue::Percentage(score))
}

/// Share of recorded time spent active.
pub fn activity_percent(store: &MetricStore, _now: NaiveTime) -> Recompute {
    let activity = store.number(MetricId::Activity);
    let total = store.number(MetricId::TotalTime);

    let pct = if total > 0.0 {
        (activity / total) * 100.0
    } else {
        0.0
    };
    Recompute::Set(MetricValue::Percentage(pct))
}

/// Idleness grows by one second every time `MaxIdleness` is updated. The
/// scheduler updates `MaxIdleness` once per idle second, so this is what
/// accumulates total idle time.
pub fn idleness_tick(_store: &MetricStore, _now: NaiveTime) -> Recompute {
    Recompute::Increase(1)
}

pub fn stamp_now(_store: &MetricStore, now: NaiveTime) -> Recompute {
    Recompute::Set(MetricValue::Timestamp(Some(now)))
}
