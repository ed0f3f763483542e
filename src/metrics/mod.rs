use serde_json::json;

use crate::logging::{LogEvent, LogFields, LogLevel};

/// Counters the engine advances as its derived state is rebuilt.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    recomputes: u64,
    axis_solves: u64,
    area_definitions: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_recompute(&mut self, axes: usize) {
        self.recomputes = self.recomputes.saturating_add(1);
        self.axis_solves = self.axis_solves.saturating_add(axes as u64);
    }

    pub fn record_area_definitions(&mut self, count: usize) {
        if count > 0 {
            self.area_definitions = self.area_definitions.saturating_add(count as u64);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            recomputes: self.recomputes,
            axis_solves: self.axis_solves,
            area_definitions: self.area_definitions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub recomputes: u64,
    pub axis_solves: u64,
    pub area_definitions: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("recomputes".to_string(), json!(self.recomputes));
        map.insert("axis_solves".to_string(), json!(self.axis_solves));
        map.insert("area_definitions".to_string(), json!(self.area_definitions));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        let mut event = LogEvent::new(LogLevel::Info, target, "layout_metrics");
        event.fields = self.as_fields();
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_recompute(2);
        metrics.record_recompute(2);
        metrics.record_area_definitions(4);
        metrics.record_area_definitions(0);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.recomputes, 2);
        assert_eq!(snapshot.axis_solves, 4);
        assert_eq!(snapshot.area_definitions, 4);
    }

    #[test]
    fn snapshot_converts_to_log_fields() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_recompute(2);
        let event = metrics.snapshot().to_log_event("gridpanel::metrics");
        assert_eq!(event.fields["recomputes"], 1);
        assert_eq!(event.message, "layout_metrics");
    }
}
