//! Statistics propagation engine.
//!
//! Every mutation updates one primary metric, recomputes the metrics
//! derived from it, and refreshes the presentation of everything it
//! touched before returning. There are no threads and no deferred work;
//! the caller drives the engine from its own timer.
//!
//! ## Usage
//!
//! ```ignore
//! let mut stats = StatsEngine::new();
//! stats.increase(MetricId::TotalTime, 1)?;
//! stats.set_value(MetricId::MaxIdleness, MetricValue::Duration(42), true)?;
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, error, trace, warn};

use crate::error::StatsError;

use super::clock::{Clock, SystemClock};
use super::formula::{self, Formula, Recompute};
use super::metric::{MetricId, MetricValue};
use super::present::{Presenter, Rgb};
use super::sink::{NullSink, PresentationSink};
use super::store::{check_kind, MetricStore};

/// One metric as it is currently presented.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricReport {
    pub id: MetricId,
    pub description: &'static str,
    pub help: &'static str,
    pub value: MetricValue,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

/// The statistics engine.
///
/// Owned by the application's composition root and lent to whoever needs
/// to record or display statistics.
pub struct StatsEngine<S = NullSink, C = SystemClock> {
    store: MetricStore,
    formulas: BTreeMap<MetricId, Formula>,
    presenter: Presenter,
    sink: S,
    clock: C,
}

impl StatsEngine {
    /// Engine with no presentation surface, using the local clock.
    pub fn new() -> Self {
        Self::with_parts(NullSink, SystemClock, Presenter::default())
    }
}

impl Default for StatsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PresentationSink, C: Clock> StatsEngine<S, C> {
    /// Build an engine and push the initial text of every metric to `sink`.
    pub fn with_parts(sink: S, clock: C, presenter: Presenter) -> Self {
        let mut engine = Self {
            store: MetricStore::new(),
            formulas: formula::registry(),
            presenter,
            sink,
            clock,
        };
        engine.refresh_all();
        engine
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn get(&self, id: MetricId) -> MetricValue {
        self.store.get(id)
    }

    pub fn describe(&self, id: MetricId) -> &'static str {
        self.store.describe(id)
    }

    pub fn help_text(&self, id: MetricId) -> &'static str {
        self.store.help_text(id)
    }

    pub fn store(&self) -> &MetricStore {
        &self.store
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current value, text and color of every metric in declaration order.
    pub fn snapshot(&self) -> Vec<MetricReport> {
        MetricId::ALL
            .iter()
            .map(|&id| {
                let value = self.store.get(id);
                MetricReport {
                    id,
                    description: self.store.describe(id),
                    help: self.store.help_text(id),
                    value,
                    text: self.presenter.text(&value),
                    color: self.presenter.color(id, &value),
                }
            })
            .collect()
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Zero every count, duration and percentage and clear every timestamp.
    ///
    /// Derived metrics are zeroed directly rather than recomputed: running
    /// the timestamp formulas here would stamp "now" onto freshly cleared
    /// breaks.
    pub fn reset(&mut self) {
        debug!("resetting all statistics");
        self.store.clear();
        self.refresh_all();
    }

    /// Add `delta` to a count or a duration (in seconds).
    pub fn increase(&mut self, id: MetricId, delta: u64) -> Result<(), StatsError> {
        trace!("increase {:?} by {}", id, delta);
        if let Err(e) = self.store.add(id, delta) {
            warn!("rejected increase: {}", e);
            return Err(e);
        }
        self.update_stat(id);
        Ok(())
    }

    /// Store `value`, or with `only_if_greater` only when it beats the
    /// current value.
    ///
    /// Dependents are recomputed even when nothing was stored: `Idleness`
    /// keeps growing while `MaxIdleness` stays put.
    pub fn set_value(
        &mut self,
        id: MetricId,
        value: MetricValue,
        only_if_greater: bool,
    ) -> Result<(), StatsError> {
        if let Err(e) = check_kind(id, value.kind()) {
            warn!("rejected set: {}", e);
            return Err(e);
        }

        if !only_if_greater || value.exceeds(&self.store.get(id)) {
            trace!("set {:?} to {:?}", id, value);
            self.store.set_raw(id, value)?;
        }
        self.update_stat(id);
        Ok(())
    }

    /// Re-emit text and color for every metric.
    pub fn refresh_all(&mut self) {
        for id in MetricId::ALL {
            self.refresh(id);
        }
    }

    // ── Propagation ──────────────────────────────────────────────────

    fn update_stat(&mut self, id: MetricId) {
        self.update_dependents(id);
        self.refresh(id);
    }

    fn update_dependents(&mut self, id: MetricId) {
        let dependents = self.store.dependents(id).to_vec();
        if dependents.is_empty() {
            return;
        }
        let now = self.clock.time_of_day();

        for dep in dependents {
            let Some(formula) = self.formulas.get(&dep).copied() else {
                continue;
            };
            let outcome = match formula(&self.store, now) {
                Recompute::Set(value) => self.store.set_raw(dep, value),
                Recompute::Increase(delta) => self.store.add(dep, delta),
            };
            if let Err(e) = outcome {
                error!("formula for {:?} produced an unusable result: {}", dep, e);
                continue;
            }
            trace!("recomputed {:?} from {:?}", dep, id);
            // Derived metrics have no dependents, so this only refreshes.
            self.update_stat(dep);
        }
    }

    fn refresh(&mut self, id: MetricId) {
        let value = self.store.get(id);
        let text = self.presenter.text(&value);
        self.sink.on_metric_text_changed(id, &text);
        if let Some(color) = self.presenter.color(id, &value) {
            self.sink.on_metric_color_changed(id, color);
        }
    }
}
