//! Classification result types shared across the engine

use crate::label::{Category, Label, Urgency};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Ordered label-to-score mapping.
///
/// Insertion order is preserved and is expected to follow label
/// declaration order; `best` scans with a strictly-greater comparison so
/// the first label reaching the maximum wins exact ties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreMap<L: Label> {
    entries: Vec<(L, f32)>,
}

impl<L: Label> ScoreMap<L> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, label: L, score: f32) {
        self.entries.push((label, score));
    }

    pub fn get(&self, label: L) -> Option<f32> {
        self.entries
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, s)| *s)
    }

    pub fn iter(&self) -> impl Iterator<Item = (L, f32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The label with the maximum score, first-inserted winning ties.
    pub fn best(&self) -> Option<(L, f32)> {
        let mut best: Option<(L, f32)> = None;
        for &(label, score) in &self.entries {
            let replace = match best {
                None => true,
                Some((_, top)) => score > top,
            };
            if replace {
                best = Some((label, score));
            }
        }
        best
    }

    /// Apply `f` to every score, preserving order.
    pub fn map_scores(mut self, f: impl Fn(f32) -> f32) -> Self {
        for (_, score) in &mut self.entries {
            *score = f(*score);
        }
        self
    }
}

impl<L: Label> Serialize for ScoreMap<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, score) in &self.entries {
            map.serialize_entry(label.as_str(), score)?;
        }
        map.end()
    }
}

/// Raw output of one classifier for one label set.
#[derive(Debug, Clone)]
pub struct LabelScore<L: Label> {
    /// Winning label
    pub label: L,

    /// Winning raw score, not yet clamped or boosted
    pub confidence: f32,

    /// Score for every label in the set, declaration order
    pub scores: ScoreMap<L>,
}

/// Raw classifier output for both label sets, before the rule overlay.
#[derive(Debug, Clone)]
pub struct RawClassification {
    pub category: LabelScore<Category>,
    pub urgency: LabelScore<Urgency>,
}

/// Final classification after rule-overlay correction.
///
/// Confidences are clamped to [0, 1]; all numeric fields are rounded to
/// three decimal places.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub urgency: Urgency,
    pub category_confidence: f32,
    pub urgency_confidence: f32,
    pub category_scores: ScoreMap<Category>,
    pub urgency_scores: ScoreMap<Urgency>,
}

/// Outcome of one batch item, tagged with the original index.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchItemResult {
    Success {
        index: usize,
        title: String,
        description: String,
        category: Category,
        urgency: Urgency,
        category_confidence: f32,
        urgency_confidence: f32,
    },
    Failure {
        index: usize,
        error: String,
    },
}

impl BatchItemResult {
    pub fn index(&self) -> usize {
        match self {
            Self::Success { index, .. } | Self::Failure { index, .. } => *index,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// Aggregate batch outcome; `results` holds every input index exactly
/// once, in original order.
#[derive(Debug, Clone, Serialize)]
pub struct BatchSummary {
    pub total_bugs: usize,
    pub processed_successfully: usize,
    pub failed: usize,
    pub results: Vec<BatchItemResult>,
}
