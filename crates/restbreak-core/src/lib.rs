//! # restbreak Core Library
//!
//! This library provides the statistics engine behind the restbreak break
//! reminder. A break scheduler feeds it raw observations (a second passed,
//! the user was idle, a break was taken or skipped) and the engine keeps a
//! fixed set of counters, durations, timestamps and percentages current,
//! formatting each one for whatever surface displays them.
//!
//! ## Architecture
//!
//! - **Metric Store**: one typed slot per [`MetricId`] plus the static
//!   dependency graph from primary to derived metrics
//! - **Propagation Engine**: [`StatsEngine`] mutations recompute derived
//!   metrics and notify a [`PresentationSink`] before returning
//! - **Presentation**: [`Presenter`] turns values into text and colors
//! - **Events**: [`StatsEvent`] maps scheduler observations onto mutations
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`StatsEngine`]: mutation API and propagation
//! - [`MetricValue`]: typed metric values
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod stats;
pub mod storage;

pub use error::{ConfigError, CoreError, StatsError};
pub use events::{parse_events, replay, StatsEvent, MAX_IDLE_RUN_SECS};
pub use stats::{
    Clock, DurationStyle, FixedClock, MetricId, MetricKind, MetricReport, MetricValue,
    NullSink, PresentationSink, Presenter, RecordingSink, Rgb, StatsEngine, SystemClock,
};
pub use storage::Config;
