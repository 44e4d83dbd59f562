use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, StatsError};
use crate::stats::{Clock, MetricId, MetricValue, PresentationSink, StatsEngine};

/// Longest idle run a single `Idle` event may carry: one week.
pub const MAX_IDLE_RUN_SECS: u64 = 7 * 24 * 3600;

/// Something the break scheduler observed.
///
/// This is the boundary through which a scheduler drives the statistics
/// engine; each event maps onto one or more metric mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatsEvent {
    /// One second passed. `idle_secs` is how long the user has been idle
    /// so far, zero when they were active during this second.
    Tick {
        #[serde(default)]
        idle_secs: u64,
    },
    /// A run of idle seconds: one tick per second with growing idle time.
    Idle { secs: u64 },
    TinyBreakTaken,
    /// The user dismissed a tiny break.
    TinyBreakSkipped,
    /// A tiny break was skipped because the user was away anyway.
    TinyBreakSkippedIdle,
    BigBreakTaken,
    BigBreakSkipped,
    BigBreakSkippedIdle,
    Reset,
}

impl StatsEvent {
    /// Reject events the engine would refuse, without touching any metric.
    pub fn validate(&self) -> Result<(), StatsError> {
        match *self {
            StatsEvent::Idle { secs } if secs > MAX_IDLE_RUN_SECS => {
                Err(StatsError::IdleRunTooLong {
                    secs,
                    max: MAX_IDLE_RUN_SECS,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn apply<S, C>(&self, engine: &mut StatsEngine<S, C>) -> Result<(), StatsError>
    where
        S: PresentationSink,
        C: Clock,
    {
        self.validate()?;
        match *self {
            StatsEvent::Tick { idle_secs } => tick(engine, idle_secs),
            StatsEvent::Idle { secs } => {
                for idle in 1..=secs {
                    tick(engine, idle)?;
                }
                Ok(())
            }
            StatsEvent::TinyBreakTaken => engine.increase(MetricId::TinyBreaks, 1),
            StatsEvent::TinyBreakSkipped => engine.increase(MetricId::TinyBreaksSkipped, 1),
            StatsEvent::TinyBreakSkippedIdle => {
                engine.increase(MetricId::IdlenessSkippedTiny, 1)
            }
            StatsEvent::BigBreakTaken => engine.increase(MetricId::BigBreaks, 1),
            StatsEvent::BigBreakSkipped => engine.increase(MetricId::BigBreaksSkipped, 1),
            StatsEvent::BigBreakSkippedIdle => engine.increase(MetricId::IdlenessSkippedBig, 1),
            StatsEvent::Reset => {
                engine.reset();
                Ok(())
            }
        }
    }
}

fn tick<S, C>(engine: &mut StatsEngine<S, C>, idle_secs: u64) -> Result<(), StatsError>
where
    S: PresentationSink,
    C: Clock,
{
    engine.increase(MetricId::TotalTime, 1)?;
    if idle_secs == 0 {
        engine.increase(MetricId::Activity, 1)
    } else {
        // Also accumulates Idleness through the MaxIdleness dependency.
        engine.set_value(MetricId::MaxIdleness, MetricValue::Duration(idle_secs), true)
    }
}

/// Parse and validate a JSON array of events.
pub fn parse_events(json: &str) -> Result<Vec<StatsEvent>> {
    let events: Vec<StatsEvent> = serde_json::from_str(json)?;
    events.iter().try_for_each(StatsEvent::validate)?;
    Ok(events)
}

/// Apply events in order, stopping at the first rejected one.
///
/// Every event is validated up front, so an invalid event anywhere in the
/// list leaves the engine untouched.
pub fn replay<S, C>(events: &[StatsEvent], engine: &mut StatsEngine<S, C>) -> Result<()>
where
    S: PresentationSink,
    C: Clock,
{
    debug!("replaying {} events", events.len());
    events.iter().try_for_each(StatsEvent::validate)?;
    for event in events {
        event.apply(engine)?;
    }
    Ok(())
}
