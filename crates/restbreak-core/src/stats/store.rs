//! Typed storage for metric values and their static metadata.

use crate::error::StatsError;

use super::metric::{MetricId, MetricKind, MetricValue};

/// One slot per metric: value, label, and the metrics derived from it.
#[derive(Debug, Clone)]
pub struct MetricEntry {
    pub value: MetricValue,
    pub description: &'static str,
    /// Metrics recomputed whenever this one changes. Fixed at construction.
    pub dependents: Vec<MetricId>,
}

/// Storage for every [`MetricId`], indexed by declaration order.
#[derive(Debug, Clone)]
pub struct MetricStore {
    entries: Vec<MetricEntry>,
}

impl Default for MetricStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricStore {
    /// Build the store with every metric at its zero value and the fixed
    /// dependency graph wired in.
    pub fn new() -> Self {
        let entries = MetricId::ALL
            .iter()
            .map(|&id| MetricEntry {
                value: MetricValue::zero(id.kind()),
                description: id.label(),
                dependents: dependents_of(id).to_vec(),
            })
            .collect();
        Self { entries }
    }

    fn entry(&self, id: MetricId) -> &MetricEntry {
        &self.entries[id as usize]
    }

    fn entry_mut(&mut self, id: MetricId) -> &mut MetricEntry {
        &mut self.entries[id as usize]
    }

    pub fn get(&self, id: MetricId) -> MetricValue {
        self.entry(id).value
    }

    pub fn describe(&self, id: MetricId) -> &'static str {
        self.entry(id).description
    }

    pub fn help_text(&self, id: MetricId) -> &'static str {
        id.help_text()
    }

    pub fn dependents(&self, id: MetricId) -> &[MetricId] {
        &self.entry(id).dependents
    }

    /// Numeric view of a metric, for formulas.
    pub(crate) fn number(&self, id: MetricId) -> f64 {
        self.get(id).as_f64()
    }

    /// Overwrite a value. Rejects a value whose kind differs from the
    /// metric's declared kind without touching the slot.
    pub(crate) fn set_raw(&mut self, id: MetricId, value: MetricValue) -> Result<(), StatsError> {
        check_kind(id, value.kind())?;
        self.entry_mut(id).value = value;
        Ok(())
    }

    /// Add `delta` to a count or duration.
    pub(crate) fn add(&mut self, id: MetricId, delta: u64) -> Result<(), StatsError> {
        let slot = &mut self.entry_mut(id).value;
        match slot {
            MetricValue::Count(n) | MetricValue::Duration(n) => {
                *n = n.saturating_add(delta);
                Ok(())
            }
            other => Err(StatsError::NotAccumulative {
                metric: id,
                kind: other.kind(),
            }),
        }
    }

    /// Put every slot back to its zero value.
    pub(crate) fn clear(&mut self) {
        for (entry, id) in self.entries.iter_mut().zip(MetricId::ALL) {
            entry.value = MetricValue::zero(id.kind());
        }
    }
}

pub(crate) fn check_kind(id: MetricId, found: MetricKind) -> Result<(), StatsError> {
    let expected = id.kind();
    if expected == found {
        Ok(())
    } else {
        Err(StatsError::KindMismatch {
            metric: id,
            expected,
            found,
        })
    }
}

/// The static dependency graph: primary -> derived metrics.
fn dependents_of(id: MetricId) -> &'static [MetricId] {
    match id {
        MetricId::TotalTime | MetricId::Activity => &[MetricId::ActivityPercent],
        MetricId::MaxIdleness => &[MetricId::Idleness],
        MetricId::TinyBreaks => &[MetricId::PauseScore, MetricId::LastTinyBreak],
        MetricId::BigBreaks => &[MetricId::PauseScore, MetricId::LastBigBreak],
        MetricId::TinyBreaksSkipped | MetricId::BigBreaksSkipped => &[MetricId::PauseScore],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_zeroed() {
        let store = MetricStore::new();
        for id in MetricId::ALL {
            assert_eq!(store.get(id), MetricValue::zero(id.kind()));
            assert_eq!(store.describe(id), id.label());
        }
    }

    #[test]
    fn dependency_graph_is_one_level_deep() {
        let store = MetricStore::new();
        for id in MetricId::ALL {
            for &dep in store.dependents(id) {
                assert!(
                    store.dependents(dep).is_empty(),
                    "{dep:?} depends on {id:?} and has dependents of its own"
                );
            }
        }
    }

    #[test]
    fn dependency_table() {
        let store = MetricStore::new();
        assert_eq!(store.dependents(MetricId::TotalTime), &[MetricId::ActivityPercent]);
        assert_eq!(store.dependents(MetricId::Activity), &[MetricId::ActivityPercent]);
        assert_eq!(store.dependents(MetricId::MaxIdleness), &[MetricId::Idleness]);
        assert_eq!(
            store.dependents(MetricId::TinyBreaks),
            &[MetricId::PauseScore, MetricId::LastTinyBreak]
        );
        assert_eq!(store.dependents(MetricId::TinyBreaksSkipped), &[MetricId::PauseScore]);
        assert_eq!(
            store.dependents(MetricId::BigBreaks),
            &[MetricId::PauseScore, MetricId::LastBigBreak]
        );
        assert_eq!(store.dependents(MetricId::BigBreaksSkipped), &[MetricId::PauseScore]);
        assert!(store.dependents(MetricId::IdlenessSkippedTiny).is_empty());
        assert!(store.dependents(MetricId::PauseScore).is_empty());
    }

    #[test]
    fn set_raw_rejects_wrong_kind_without_mutating() {
        let mut store = MetricStore::new();
        store.set_raw(MetricId::TinyBreaks, MetricValue::Count(3)).unwrap();

        let err = store
            .set_raw(MetricId::TinyBreaks, MetricValue::Timestamp(None))
            .unwrap_err();

        assert_eq!(
            err,
            StatsError::KindMismatch {
                metric: MetricId::TinyBreaks,
                expected: MetricKind::Count,
                found: MetricKind::Timestamp,
            }
        );
        assert_eq!(store.get(MetricId::TinyBreaks), MetricValue::Count(3));
    }

    #[test]
    fn add_only_accumulates_counts_and_durations() {
        let mut store = MetricStore::new();
        store.add(MetricId::Activity, 5).unwrap();
        store.add(MetricId::Activity, 7).unwrap();
        assert_eq!(store.get(MetricId::Activity), MetricValue::Duration(12));

        assert!(store.add(MetricId::PauseScore, 1).is_err());
        assert!(store.add(MetricId::LastBigBreak, 1).is_err());
    }

    #[test]
    fn clear_restores_zero_values() {
        let mut store = MetricStore::new();
        store.add(MetricId::BigBreaks, 2).unwrap();
        store
            .set_raw(MetricId::PauseScore, MetricValue::Percentage(50.0))
            .unwrap();
        store.clear();
        assert_eq!(store.get(MetricId::BigBreaks), MetricValue::Count(0));
        assert_eq!(store.get(MetricId::PauseScore), MetricValue::Percentage(0.0));
    }
}
