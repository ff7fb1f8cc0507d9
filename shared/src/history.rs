use chrono::{DateTime, Utc};

use crate::model::{DetectionResult, SourceKind};

pub const HISTORY_CAPACITY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub result: DetectionResult,
    pub submitted_at: DateTime<Utc>,
    pub source: SourceKind,
    pub filename: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SessionStats {
    pub total_detections: u64,
    pub total_confidence: f64,
}

impl SessionStats {
    /// Mean confidence, or `None` before the first detection.
    pub fn average_confidence(&self) -> Option<f64> {
        (self.total_detections > 0).then(|| self.total_confidence / self.total_detections as f64)
    }
}

/// Recent results for the current page session, newest first.
#[derive(Debug, Clone, Default)]
pub struct HistoryTracker {
    entries: Vec<HistoryEntry>,
    stats: SessionStats,
}

impl HistoryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: DetectionResult, source: SourceKind, filename: Option<String>) {
        self.record_at(result, source, filename, Utc::now());
    }

    pub fn record_at(
        &mut self,
        result: DetectionResult,
        source: SourceKind,
        filename: Option<String>,
        submitted_at: DateTime<Utc>,
    ) {
        self.stats.total_detections += 1;
        self.stats.total_confidence += result.confidence_score;

        self.entries.insert(
            0,
            HistoryEntry {
                result,
                submitted_at,
                source,
                filename,
            },
        );
        self.entries.truncate(HISTORY_CAPACITY);
    }

    pub fn recent(&self, n: usize) -> &[HistoryEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn average_confidence(&self) -> Option<f64> {
        self.stats.average_confidence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn result_with(confidence: f64) -> DetectionResult {
        DetectionResult {
            verdict: "AI-Generated".into(),
            ai_probability: 0.9,
            human_probability: 0.1,
            confidence_score: confidence,
            detection_methods: vec![],
            traits_detected: vec![],
            analysis_details: None,
        }
    }

    #[test]
    fn test_empty_tracker_has_no_average() {
        let tracker = HistoryTracker::new();
        assert!(tracker.is_empty());
        assert_eq!(tracker.average_confidence(), None);
        assert!(tracker.recent(5).is_empty());
    }

    #[test]
    fn test_running_average() {
        let mut tracker = HistoryTracker::new();
        tracker.record(result_with(82.5), SourceKind::Text, None);
        assert_eq!(tracker.stats().total_detections, 1);
        assert!((tracker.average_confidence().unwrap() - 82.5).abs() < 1e-9);

        tracker.record(result_with(91.3), SourceKind::File, Some("b.pdf".into()));
        assert_eq!(tracker.stats().total_detections, 2);
        assert!((tracker.average_confidence().unwrap() - 86.9).abs() < 1e-9);
    }

    #[test]
    fn test_eleventh_record_evicts_the_first() {
        let mut tracker = HistoryTracker::new();
        for i in 1..=11 {
            tracker.record(result_with(i as f64), SourceKind::Text, None);
        }

        assert_eq!(tracker.len(), HISTORY_CAPACITY);
        let confidences: Vec<f64> = tracker
            .recent(usize::MAX)
            .iter()
            .map(|e| e.result.confidence_score)
            .collect();
        let expected: Vec<f64> = (2..=11).rev().map(|i| i as f64).collect();
        assert_eq!(confidences, expected);
        // Stats keep counting evicted entries.
        assert_eq!(tracker.stats().total_detections, 11);
    }

    #[test]
    fn test_recent_is_newest_first_and_bounded_by_n() {
        let mut tracker = HistoryTracker::new();
        tracker.record(result_with(10.0), SourceKind::Text, None);
        tracker.record(result_with(20.0), SourceKind::File, Some("x.txt".into()));
        tracker.record(result_with(30.0), SourceKind::Text, None);

        let recent = tracker.recent(2);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].result.confidence_score, 30.0);
        assert_eq!(recent[1].filename.as_deref(), Some("x.txt"));
        assert_eq!(tracker.recent(50).len(), 3);
    }

    proptest! {
        #[test]
        fn prop_history_never_exceeds_capacity(scores in proptest::collection::vec(0.0f64..=100.0, 0..40)) {
            let mut tracker = HistoryTracker::new();
            for score in &scores {
                tracker.record(result_with(*score), SourceKind::Text, None);
            }
            prop_assert!(tracker.len() <= HISTORY_CAPACITY);
            prop_assert_eq!(tracker.stats().total_detections, scores.len() as u64);
            if let Some(last) = scores.last() {
                prop_assert_eq!(tracker.recent(1)[0].result.confidence_score, *last);
            }
        }
    }
}
