//! Keyword-frequency classifier
//!
//! Fallback strategy used when no embedding provider is available. Pure
//! function over static keyword tables; no failure mode.
//!
//! Scoring: every keyword contributes twice its non-overlapping substring
//! count in the normalized text, and single-word keywords additionally
//! contribute their exact token-match count. Single-word keywords
//! therefore double-count relative to phrases; the asymmetry is part of
//! the scoring contract and must not be "fixed".

use crate::classifier::{Classifier, Strategy};
use bugtriage_core::{Category, Label, LabelScore, RawClassification, Result, ScoreMap, Urgency};

const UI_KEYWORDS: &[&str] = &[
    "ui", "interface", "button", "display", "visual", "layout", "css", "style", "responsive",
    "mobile", "desktop", "color", "font", "menu", "navigation", "modal", "popup", "dropdown",
    "form", "input", "checkbox", "radio",
];

const BACKEND_KEYWORDS: &[&str] = &[
    "server", "api", "endpoint", "database", "sql", "query", "backend", "service",
    "microservice", "rest", "graphql", "json", "xml", "response", "request", "timeout",
    "error 500", "500 error", "internal server",
];

const AUTHENTICATION_KEYWORDS: &[&str] = &[
    "login", "logout", "password", "auth", "authentication", "authorization", "session",
    "token", "jwt", "oauth", "sso", "user", "account", "permission", "role", "access",
    "forbidden", "unauthorized", "401", "403",
];

const PERFORMANCE_KEYWORDS: &[&str] = &[
    "slow", "performance", "speed", "lag", "latency", "memory", "cpu", "loading", "timeout",
    "optimization", "cache", "heavy", "bottleneck", "scalability", "response time",
    "page load", "rendering",
];

const SECURITY_KEYWORDS: &[&str] = &[
    "security", "vulnerability", "xss", "csrf", "injection", "sql injection", "malware",
    "phishing", "breach", "exploit", "attack", "hacking", "encryption", "ssl", "tls",
    "certificate", "privacy", "gdpr", "pii",
];

const CRITICAL_KEYWORDS: &[&str] = &[
    "critical", "urgent", "emergency", "down", "crash", "broken", "not working", "data loss",
    "security breach", "vulnerability", "exploit", "production down", "system failure",
];

const HIGH_KEYWORDS: &[&str] = &[
    "high", "important", "major", "significant", "affecting users", "blocking", "cannot",
    "error", "failed", "bug", "issue", "problem",
];

const MEDIUM_KEYWORDS: &[&str] = &[
    "medium", "moderate", "minor", "sometimes", "occasionally", "inconsistent", "improvement",
    "enhancement",
];

const LOW_KEYWORDS: &[&str] = &[
    "low", "cosmetic", "suggestion", "nice to have", "feature request", "documentation",
    "typo", "minor",
];

/// Keyword table per category, declaration order.
pub fn category_keywords() -> Vec<(Category, &'static [&'static str])> {
    vec![
        (Category::Ui, UI_KEYWORDS),
        (Category::Backend, BACKEND_KEYWORDS),
        (Category::Authentication, AUTHENTICATION_KEYWORDS),
        (Category::Performance, PERFORMANCE_KEYWORDS),
        (Category::Security, SECURITY_KEYWORDS),
    ]
}

/// Keyword table per urgency level, declaration order.
pub fn urgency_keywords() -> Vec<(Urgency, &'static [&'static str])> {
    vec![
        (Urgency::Critical, CRITICAL_KEYWORDS),
        (Urgency::High, HIGH_KEYWORDS),
        (Urgency::Medium, MEDIUM_KEYWORDS),
        (Urgency::Low, LOW_KEYWORDS),
    ]
}

/// Lowercase the text and replace every punctuation character with a
/// space, keeping word characters and existing whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect()
}

pub struct KeywordClassifier {
    name: String,
    categories: Vec<(Category, &'static [&'static str])>,
    urgencies: Vec<(Urgency, &'static [&'static str])>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            name: "keyword".to_string(),
            categories: category_keywords(),
            urgencies: urgency_keywords(),
        }
    }

    fn score_table<L: Label>(
        table: &[(L, &'static [&'static str])],
        normalized: &str,
        tokens: &[&str],
        default: L,
    ) -> LabelScore<L> {
        let mut scores = ScoreMap::new();

        for (label, keywords) in table {
            let mut score = 0u32;
            for &keyword in *keywords {
                // Phrase occurrences count double.
                score += 2 * normalized.matches(keyword).count() as u32;

                // Single-word keywords also count exact token matches,
                // on top of their substring occurrences.
                if !keyword.contains(' ') {
                    score += tokens.iter().filter(|&&t| t == keyword).count() as u32;
                }
            }
            scores.insert(*label, score as f32);
        }

        // All-zero scores fall back to the fixed default label.
        let (label, confidence) = match scores.best() {
            Some((label, score)) if score > 0.0 => (label, score),
            _ => (default, 0.0),
        };

        LabelScore {
            label,
            confidence,
            scores,
        }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl Classifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Result<RawClassification> {
        let normalized = normalize(text);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();

        Ok(RawClassification {
            category: Self::score_table(&self.categories, &normalized, &tokens, Category::Backend),
            urgency: Self::score_table(&self.urgencies, &normalized, &tokens, Urgency::Medium),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn strategy(&self) -> Strategy {
        Strategy::KeywordFrequency
    }
}
