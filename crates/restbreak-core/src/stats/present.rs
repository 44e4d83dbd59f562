//! Display text and color coding for metric values.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::metric::{MetricId, MetricValue};

pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self::new(channel(r), channel(g), channel(b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Truncating conversion, clamped into a color channel.
fn channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0) as u8
}

/// How elapsed seconds are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationStyle {
    /// `1:02:03`
    #[default]
    Clock,
    /// `1h 02m 03s`
    Words,
}

impl DurationStyle {
    pub fn format(self, secs: u64) -> String {
        match self {
            DurationStyle::Clock => format_clock(secs),
            DurationStyle::Words => format_words(secs),
        }
    }
}

/// `H:MM:SS`; hours are not wrapped at 24.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// `1h 02m 03s`, dropping leading zero units.
pub fn format_words(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{h}h {m:02}m {s:02}s")
    } else if m > 0 {
        format!("{m}m {s:02}s")
    } else {
        format!("{s}s")
    }
}

/// Color for the pause score: red at 0, green at 100.
pub fn pause_score_color(v: f64) -> Rgb {
    Rgb::from_channels(255.0 - 2.55 * v, 1.60 * v, 0.0)
}

/// Color for the activity percentage: green when mostly idle, red when
/// mostly active.
pub fn activity_color(v: f64) -> Rgb {
    Rgb::from_channels(2.55 * v, 160.0 - 1.60 * v, 0.0)
}

/// Turns metric values into display text and colors.
#[derive(Debug, Clone)]
pub struct Presenter {
    time_format: String,
    duration_style: DurationStyle,
}

impl Default for Presenter {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            duration_style: DurationStyle::Clock,
        }
    }
}

impl Presenter {
    /// Build a presenter, validating `time_format` as a strftime pattern.
    pub fn new(time_format: &str, duration_style: DurationStyle) -> Result<Self, ConfigError> {
        if StrftimeItems::new(time_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::InvalidValue {
                key: "display.time_format".into(),
                message: format!("'{time_format}' is not a valid strftime pattern"),
            });
        }
        Ok(Self {
            time_format: time_format.to_string(),
            duration_style,
        })
    }

    pub fn text(&self, value: &MetricValue) -> String {
        match *value {
            MetricValue::Duration(secs) => self.duration_style.format(secs),
            MetricValue::Count(n) => n.to_string(),
            MetricValue::Percentage(p) => format!("{p:.1}%"),
            MetricValue::Timestamp(Some(t)) => self.time(t),
            MetricValue::Timestamp(None) => String::new(),
        }
    }

    /// Only the two percentage metrics are color coded.
    pub fn color(&self, id: MetricId, value: &MetricValue) -> Option<Rgb> {
        match id {
            MetricId::PauseScore => Some(pause_score_color(value.as_f64())),
            MetricId::ActivityPercent => Some(activity_color(value.as_f64())),
            _ => None,
        }
    }

    fn time(&self, t: NaiveTime) -> String {
        let mut out = String::new();
        if write!(out, "{}", t.format(&self.time_format)).is_err() {
            out.clear();
            let _ = write!(out, "{}", t.format(DEFAULT_TIME_FORMAT));
        }
        out
    }
}
