//! Reference embeddings for the semantic-similarity strategy
//!
//! Each label carries a handful of exemplar descriptions; the label's
//! reference vector is the element-wise mean of their embeddings. Built
//! once at startup and shared read-only for the process lifetime.

use crate::embedding::{mean_vector, Embedder};
use bugtriage_core::{Category, Error, Label, Result, Urgency};
use tracing::debug;

const UI_EXEMPLARS: &[&str] = &[
    "User interface issues, visual problems, layout issues, responsive design problems",
    "Button not working, form validation errors, display glitches, CSS styling issues",
    "Mobile responsiveness, navigation problems, modal popup issues, color scheme problems",
];

const BACKEND_EXEMPLARS: &[&str] = &[
    "Server errors, API failures, database connection issues, backend service problems",
    "500 errors, timeout issues, database query failures, microservice communication problems",
    "Server crashes, API endpoint failures, database performance issues, backend logic errors",
];

const AUTHENTICATION_EXEMPLARS: &[&str] = &[
    "Login problems, password issues, user authentication failures, session management",
    "User access denied, permission errors, token validation failures, OAuth problems",
    "Account lockout, password reset issues, user registration problems, security access",
];

const PERFORMANCE_EXEMPLARS: &[&str] = &[
    "Slow loading, performance degradation, memory leaks, CPU usage problems",
    "Page load time issues, response time delays, optimization problems, scalability issues",
    "Resource consumption, bottleneck identification, performance monitoring, speed issues",
];

const SECURITY_EXEMPLARS: &[&str] = &[
    "Security vulnerabilities, data breaches, injection attacks, access control issues",
    "XSS vulnerabilities, SQL injection, CSRF attacks, authentication bypass",
    "Data privacy issues, encryption problems, security compliance, threat detection",
];

const CRITICAL_EXEMPLARS: &[&str] = &[
    "System completely down, production outage, data loss, security breach",
    "Critical functionality broken, users cannot access system, emergency situation",
    "System crash, complete failure, urgent security vulnerability, blocking all users",
];

const HIGH_EXEMPLARS: &[&str] = &[
    "Major functionality broken, affecting many users, significant impact on operations",
    "Important feature not working, blocking user workflow, significant performance degradation",
    "Security concern, data integrity issue, affecting production environment",
];

const MEDIUM_EXEMPLARS: &[&str] = &[
    "Minor functionality issues, affecting some users, moderate impact on operations",
    "Feature partially working, occasional errors, performance degradation",
    "UI inconsistencies, minor bugs, non-critical functionality problems",
];

const LOW_EXEMPLARS: &[&str] = &[
    "Cosmetic issues, minor UI improvements, documentation updates, nice-to-have features",
    "Minor visual glitches, typo corrections, enhancement suggestions, optimization opportunities",
    "Non-critical improvements, user experience enhancements, minor bug fixes",
];

/// Exemplar descriptions per category, declaration order.
pub fn category_exemplars() -> Vec<(Category, &'static [&'static str])> {
    vec![
        (Category::Ui, UI_EXEMPLARS),
        (Category::Backend, BACKEND_EXEMPLARS),
        (Category::Authentication, AUTHENTICATION_EXEMPLARS),
        (Category::Performance, PERFORMANCE_EXEMPLARS),
        (Category::Security, SECURITY_EXEMPLARS),
    ]
}

/// Exemplar descriptions per urgency level, declaration order.
pub fn urgency_exemplars() -> Vec<(Urgency, &'static [&'static str])> {
    vec![
        (Urgency::Critical, CRITICAL_EXEMPLARS),
        (Urgency::High, HIGH_EXEMPLARS),
        (Urgency::Medium, MEDIUM_EXEMPLARS),
        (Urgency::Low, LOW_EXEMPLARS),
    ]
}

/// A label's exemplars and aggregated reference vector.
#[derive(Debug, Clone)]
pub struct ReferenceEntry<L: Label> {
    pub label: L,
    pub exemplars: &'static [&'static str],
    pub vector: Vec<f32>,
}

/// All reference entries for one label set, declaration order.
#[derive(Debug, Clone)]
pub struct ReferenceSet<L: Label> {
    entries: Vec<ReferenceEntry<L>>,
}

impl<L: Label> ReferenceSet<L> {
    /// Embed every exemplar and store the mean vector per label.
    ///
    /// Any embedding failure is fatal to the semantic strategy and is
    /// propagated as `ModelUnavailable`, not retried; the caller decides
    /// whether to fall back to the keyword strategy.
    pub async fn build(
        exemplars: &[(L, &'static [&'static str])],
        embedder: &dyn Embedder,
    ) -> Result<Self> {
        let mut entries = Vec::with_capacity(exemplars.len());

        for (label, texts) in exemplars {
            let mut vectors = Vec::with_capacity(texts.len());
            for text in *texts {
                let vector = embedder.embed(text).await.map_err(|e| {
                    Error::model_unavailable(format!(
                        "failed to embed exemplar for {label}: {e}"
                    ))
                })?;
                vectors.push(vector);
            }

            let vector = mean_vector(&vectors)?;
            debug!(label = %label, exemplars = texts.len(), dimension = vector.len(), "built reference vector");

            entries.push(ReferenceEntry {
                label: *label,
                exemplars: *texts,
                vector,
            });
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[ReferenceEntry<L>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dimension of the reference vectors.
    pub fn dimension(&self) -> usize {
        self.entries.first().map_or(0, |e| e.vector.len())
    }
}
