use once_cell::sync::Lazy;
use regex::Regex;

use super::segment::{default_segmenter, Segmenter};
use crate::capability::Capabilities;
use crate::skills::SkillSet;

/// Vocabulary searched when the caller does not supply one.
pub const DEFAULT_SKILL_VOCABULARY: [&str; 19] = [
    "Python",
    "Java",
    "Excel",
    "Machine Learning",
    "Django",
    "React",
    "SQL",
    "Project Management",
    "Communication",
    "Leadership",
    "AWS",
    "Docker",
    "Kubernetes",
    "REST",
    "GraphQL",
    "TypeScript",
    "JavaScript",
    "HTML",
    "CSS",
];

pub const DEFAULT_EXPERIENCE_LIMIT: usize = 5;

const EXPERIENCE_KEYWORDS: [&str; 5] = [
    "experience",
    "worked at",
    "responsible for",
    "role:",
    "position:",
];

// Bare calendar year, 1900-2099.
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

static EDUCATION_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(university|college|bachelor|master|degree|phd|mba)\b").unwrap()
});

// Best-effort catch for framework/language names missing from the vocabulary
// ("TensorFlow", "PyTorch"). Over-matches acronyms and sentence-initial
// proper nouns; callers get a guess, not a guarantee.
static CAPITALIZED_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z0-9+#.\-]{2,}\b").unwrap());

// Organization-shaped phrase ending in University/College, e.g.
// "Acme University" or "University of Somewhere".
static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Z][\w&.'\-]*\s+){0,4}(?:University|College)(?:\s+of(?:\s+[A-Z][\w'\-]*)+)?")
        .unwrap()
});

/// Heuristic extraction of skills, experience, and education lines. The
/// segmentation strategy is fixed at construction; the rest is regex and
/// keyword scanning.
pub struct EntityExtractor {
    segmenter: Box<dyn Segmenter>,
    experience_limit: usize,
    institution_fallback: bool,
}

impl EntityExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            segmenter: default_segmenter(),
            experience_limit: DEFAULT_EXPERIENCE_LIMIT,
            institution_fallback: Capabilities::get().sentence_segmenter,
        }
    }

    #[must_use]
    pub fn with_segmenter(mut self, segmenter: Box<dyn Segmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    #[must_use]
    pub fn with_experience_limit(mut self, limit: usize) -> Self {
        self.experience_limit = limit;
        self
    }

    #[must_use]
    pub fn with_institution_fallback(mut self, enabled: bool) -> Self {
        self.institution_fallback = enabled;
        self
    }

    /// Skills found in `text`, searched against the built-in vocabulary.
    #[must_use]
    pub fn extract_skills(&self, text: &str) -> SkillSet {
        self.extract_skills_with(text, &DEFAULT_SKILL_VOCABULARY)
    }

    /// Skills found in `text`, searched against `vocabulary` in vocabulary
    /// order via case-insensitive containment. When nothing matches, falls
    /// back to the capitalized-token heuristic.
    #[must_use]
    pub fn extract_skills_with<S: AsRef<str>>(&self, text: &str, vocabulary: &[S]) -> SkillSet {
        if text.is_empty() {
            return SkillSet::new();
        }

        let haystack = text.to_lowercase();
        let mut found = SkillSet::new();
        for candidate in vocabulary {
            let candidate = candidate.as_ref().trim();
            if !candidate.is_empty() && haystack.contains(&candidate.to_lowercase()) {
                found.insert(candidate);
            }
        }

        if found.is_empty() {
            found = CAPITALIZED_TOKEN
                .find_iter(text)
                .map(|m| m.as_str())
                .collect();
        }

        found
    }

    /// Segments likely to describe work history, in text order, at most
    /// the configured limit.
    #[must_use]
    pub fn extract_experience(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut entries = Vec::new();
        for segment in self.segmenter.segment(text) {
            if entries.len() >= self.experience_limit {
                break;
            }
            let lower = segment.to_lowercase();
            if EXPERIENCE_KEYWORDS.iter().any(|k| lower.contains(k)) || YEAR.is_match(&segment) {
                entries.push(segment);
            }
        }
        entries
    }

    /// First segment mentioning a degree or institution; `None` when the
    /// text has no recognizable education line.
    #[must_use]
    pub fn extract_education(&self, text: &str) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        for segment in self.segmenter.segment(text) {
            if EDUCATION_KEYWORD.is_match(&segment) {
                return Some(segment);
            }
        }

        if self.institution_fallback {
            if let Some(m) = INSTITUTION.find(text) {
                return Some(m.as_str().trim().to_string());
            }
        }

        None
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
