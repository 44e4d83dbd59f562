//! Break statistics for restbreak.
//!
//! A closed set of typed metrics, a fixed one-level dependency graph from
//! primary to derived metrics, and the engine that keeps derived metrics
//! and their presentation up to date as primaries change.

mod clock;
mod engine;
pub mod formula;
mod metric;
mod present;
mod sink;
mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use engine::{MetricReport, StatsEngine};
pub use formula::{Formula, Recompute};
pub use metric::{MetricId, MetricKind, MetricValue};
pub use present::{
    activity_color, format_clock, format_words, pause_score_color, DurationStyle, Presenter,
    Rgb, DEFAULT_TIME_FORMAT,
};
pub use sink::{NullSink, PresentationSink, RecordingSink};
pub use store::{MetricEntry, MetricStore};
