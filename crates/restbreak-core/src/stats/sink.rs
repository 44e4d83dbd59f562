//! The presentation surface the engine reports to.
//!
//! The engine never owns widgets. It hands formatted text and colors to a
//! [`PresentationSink`] implemented by whatever renders them.

use std::collections::BTreeMap;

use super::metric::MetricId;
use super::present::Rgb;

pub trait PresentationSink {
    fn on_metric_text_changed(&mut self, id: MetricId, text: &str);
    fn on_metric_color_changed(&mut self, id: MetricId, color: Rgb);
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl PresentationSink for NullSink {
    fn on_metric_text_changed(&mut self, _id: MetricId, _text: &str) {}
    fn on_metric_color_changed(&mut self, _id: MetricId, _color: Rgb) {}
}

/// Keeps the latest text and color per metric.
///
/// Built with [`RecordingSink::with_touch_log`], it also records the order
/// in which metrics were refreshed since the last
/// [`RecordingSink::take_touched`].
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    texts: BTreeMap<MetricId, String>,
    colors: BTreeMap<MetricId, Rgb>,
    touched: Option<Vec<MetricId>>,
}

impl RecordingSink {
    /// Latest values only; memory stays bounded by the number of metrics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_touch_log() -> Self {
        Self {
            touched: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn text(&self, id: MetricId) -> Option<&str> {
        self.texts.get(&id).map(String::as_str)
    }

    pub fn color(&self, id: MetricId) -> Option<Rgb> {
        self.colors.get(&id).copied()
    }

    /// Metrics whose text was refreshed, in notification order. Always
    /// empty without a touch log.
    pub fn touched(&self) -> &[MetricId] {
        self.touched.as_deref().unwrap_or_default()
    }

    pub fn take_touched(&mut self) -> Vec<MetricId> {
        self.touched.as_mut().map(std::mem::take).unwrap_or_default()
    }
}

impl PresentationSink for RecordingSink {
    fn on_metric_text_changed(&mut self, id: MetricId, text: &str) {
        self.texts.insert(id, text.to_string());
        if let Some(touched) = self.touched.as_mut() {
            touched.push(id);
        }
    }

    fn on_metric_color_changed(&mut self, id: MetricId, color: Rgb) {
        self.colors.insert(id, color);
    }
}

impl<S: PresentationSink + ?Sized> PresentationSink for &mut S {
    fn on_metric_text_changed(&mut self, id: MetricId, text: &str) {
        (**self).on_metric_text_changed(id, text);
    }

    fn on_metric_color_changed(&mut self, id: MetricId, color: Rgb) {
        (**self).on_metric_color_changed(id, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_sink_keeps_latest_values() {
        let mut sink = RecordingSink::with_touch_log();
        sink.on_metric_text_changed(MetricId::TinyBreaks, "1");
        sink.on_metric_text_changed(MetricId::TinyBreaks, "2");
        sink.on_metric_color_changed(MetricId::PauseScore, Rgb::new(1, 2, 3));

        assert_eq!(sink.text(MetricId::TinyBreaks), Some("2"));
        assert_eq!(sink.color(MetricId::PauseScore), Some(Rgb::new(1, 2, 3)));
        assert_eq!(sink.text(MetricId::BigBreaks), None);
        assert_eq!(sink.take_touched(), vec![MetricId::TinyBreaks, MetricId::TinyBreaks]);
        assert!(sink.touched().is_empty());
    }

    #[test]
    fn plain_sink_does_not_log_notifications() {
        let mut sink = RecordingSink::new();
        for _ in 0..1_000 {
            sink.on_metric_text_changed(MetricId::TotalTime, "0:00:01");
        }
        assert_eq!(sink.text(MetricId::TotalTime), Some("0:00:01"));
        assert!(sink.touched().is_empty());
        assert!(sink.take_touched().is_empty());
    }
}
