//! Metric identifiers and the typed value model.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Every statistic the engine tracks.
///
/// The set is closed; declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricId {
    TotalTime,
    Activity,
    Idleness,
    ActivityPercent,
    MaxIdleness,
    TinyBreaks,
    LastTinyBreak,
    TinyBreaksSkipped,
    IdlenessSkippedTiny,
    BigBreaks,
    LastBigBreak,
    BigBreaksSkipped,
    IdlenessSkippedBig,
    PauseScore,
}

impl MetricId {
    pub const ALL: [MetricId; 14] = [
        MetricId::TotalTime,
        MetricId::Activity,
        MetricId::Idleness,
        MetricId::ActivityPercent,
        MetricId::MaxIdleness,
        MetricId::TinyBreaks,
        MetricId::LastTinyBreak,
        MetricId::TinyBreaksSkipped,
        MetricId::IdlenessSkippedTiny,
        MetricId::BigBreaks,
        MetricId::LastBigBreak,
        MetricId::BigBreaksSkipped,
        MetricId::IdlenessSkippedBig,
        MetricId::PauseScore,
    ];

    /// The kind of value this metric always holds.
    pub fn kind(self) -> MetricKind {
        match self {
            MetricId::TotalTime
            | MetricId::Activity
            | MetricId::Idleness
            | MetricId::MaxIdleness => MetricKind::Duration,
            MetricId::TinyBreaks
            | MetricId::TinyBreaksSkipped
            | MetricId::IdlenessSkippedTiny
            | MetricId::BigBreaks
            | MetricId::BigBreaksSkipped
            | MetricId::IdlenessSkippedBig => MetricKind::Count,
            MetricId::ActivityPercent | MetricId::PauseScore => MetricKind::Percentage,
            MetricId::LastTinyBreak | MetricId::LastBigBreak => MetricKind::Timestamp,
        }
    }

    /// Short label shown next to the value.
    pub fn label(self) -> &'static str {
        match self {
            MetricId::TotalTime => "Total recorded time",
            MetricId::Activity => "Total time of activity",
            MetricId::Idleness => "Total time being idle",
            MetricId::ActivityPercent => "Percentage of activity",
            MetricId::MaxIdleness => "Maximum idle period",
            MetricId::TinyBreaks => "Total amount of tiny breaks",
            MetricId::LastTinyBreak => "Last tiny break",
            MetricId::TinyBreaksSkipped => "Number of skipped tiny breaks (user)",
            MetricId::IdlenessSkippedTiny => "Number of skipped tiny breaks (idle)",
            MetricId::BigBreaks => "Total amount of big breaks",
            MetricId::LastBigBreak => "Last big break",
            MetricId::BigBreaksSkipped => "Number of skipped big breaks (user)",
            MetricId::IdlenessSkippedBig => "Number of skipped big breaks (idle)",
            MetricId::PauseScore => "Pause score",
        }
    }

    /// Tooltip explaining what the metric measures.
    pub fn help_text(self) -> &'static str {
        match self {
            MetricId::TotalTime => "This is the total time the break reminder is running.",
            MetricId::Activity => {
                "This is the total amount of time you used the keyboard or mouse."
            }
            MetricId::Idleness => {
                "This is the total amount of time you did not use the keyboard or mouse."
            }
            MetricId::ActivityPercent => {
                "This is a percentage of activity, based on the seconds of activity \
                 vs. total time the break reminder is running."
            }
            MetricId::MaxIdleness => {
                "This is the biggest period of inactivity measured while the break \
                 reminder is running."
            }
            MetricId::TinyBreaks => "This is the total amount of tiny breaks.",
            MetricId::LastTinyBreak => "This is the time of the last tiny break.",
            MetricId::TinyBreaksSkipped => {
                "This is the total amount of tiny breaks which you skipped."
            }
            MetricId::IdlenessSkippedTiny => {
                "This is the total amount of tiny breaks which are skipped because you were idle."
            }
            MetricId::BigBreaks => "This is the total amount of big breaks.",
            MetricId::LastBigBreak => "This is the time of the last big break.",
            MetricId::BigBreaksSkipped => {
                "This is the total amount of big breaks which you skipped."
            }
            MetricId::IdlenessSkippedBig => {
                "This is the total amount of big breaks which are skipped because you were idle."
            }
            MetricId::PauseScore => "This is an indication of how well you behaved with the breaks.",
        }
    }
}

/// Tag of a [`MetricValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Count,
    Duration,
    Percentage,
    Timestamp,
}

/// A metric's current value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum MetricValue {
    Count(u64),
    /// Elapsed seconds.
    Duration(u64),
    /// Conventionally 0..=100.
    Percentage(f64),
    /// Time of day; `None` until first set.
    Timestamp(Option<NaiveTime>),
}

impl MetricValue {
    pub fn kind(&self) -> MetricKind {
        match self {
            MetricValue::Count(_) => MetricKind::Count,
            MetricValue::Duration(_) => MetricKind::Duration,
            MetricValue::Percentage(_) => MetricKind::Percentage,
            MetricValue::Timestamp(_) => MetricKind::Timestamp,
        }
    }

    /// The reset value for a kind.
    pub fn zero(kind: MetricKind) -> Self {
        match kind {
            MetricKind::Count => MetricValue::Count(0),
            MetricKind::Duration => MetricValue::Duration(0),
            MetricKind::Percentage => MetricValue::Percentage(0.0),
            MetricKind::Timestamp => MetricValue::Timestamp(None),
        }
    }

    /// Numeric view used by the recompute formulas. Timestamps read as 0.
    pub fn as_f64(&self) -> f64 {
        match *self {
            MetricValue::Count(n) | MetricValue::Duration(n) => n as f64,
            MetricValue::Percentage(p) => p,
            MetricValue::Timestamp(_) => 0.0,
        }
    }

    /// Whether `self` is strictly greater than `other` in the kind's natural
    /// order. Values of different kinds never compare greater.
    ///
    /// A present timestamp is greater than an absent one.
    pub fn exceeds(&self, other: &MetricValue) -> bool {
        match (self, other) {
            (MetricValue::Count(a), MetricValue::Count(b)) => a > b,
            (MetricValue::Duration(a), MetricValue::Duration(b)) => a > b,
            (MetricValue::Percentage(a), MetricValue::Percentage(b)) => a > b,
            (MetricValue::Timestamp(a), MetricValue::Timestamp(b)) => a > b,
            _ => false,
        }
    }
}
