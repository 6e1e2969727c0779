use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::document::DocumentSource;
use crate::extract::{EntityExtractor, TextExtractor};
use crate::skills::SkillSet;

/// Length cap for the stored profile summary.
pub const SUMMARY_MAX_CHARS: usize = 500;

/// Everything one parse produces; the caller persists it (or doesn't).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub skills: SkillSet,
    pub experience: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    pub chars: usize,
    pub skill_count: usize,
    pub experience_count: usize,
    pub education_found: bool,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub profile: ResumeProfile,
    pub stats: ParseStats,
}

/// Runs the full sequence a résumé upload needs: text extraction, entity
/// extraction, summary. Stateless between calls; safe to share behind a
/// reference across worker threads.
pub struct ResumePipeline {
    text_extractor: TextExtractor,
    entity_extractor: EntityExtractor,
}

impl ResumePipeline {
    #[must_use]
    pub fn new() -> Self {
        Self {
            text_extractor: TextExtractor::new(),
            entity_extractor: EntityExtractor::new(),
        }
    }

    #[must_use]
    pub fn with_entity_extractor(mut self, extractor: EntityExtractor) -> Self {
        self.entity_extractor = extractor;
        self
    }

    /// Total like its parts: an unreadable document yields an empty profile,
    /// never an error.
    #[must_use]
    pub fn parse(&self, source: &DocumentSource) -> ParseOutput {
        let start = Instant::now();

        let text = self.text_extractor.extract(source);
        let skills = self.entity_extractor.extract_skills(&text);
        let experience = self.entity_extractor.extract_experience(&text);
        let education = self.entity_extractor.extract_education(&text);
        let summary = if text.is_empty() {
            None
        } else {
            Some(text.chars().take(SUMMARY_MAX_CHARS).collect())
        };

        let stats = ParseStats {
            chars: text.chars().count(),
            skill_count: skills.len(),
            experience_count: experience.len(),
            education_found: education.is_some(),
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            chars = stats.chars,
            skills = stats.skill_count,
            "resume parsed"
        );

        ParseOutput {
            profile: ResumeProfile {
                text,
                summary,
                skills,
                experience,
                education,
            },
            stats,
        }
    }
}

impl Default for ResumePipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Senior engineer with Python and AWS experience.\n\
        Worked at Acme from 2016 to 2021.\n\
        BSc, Acme University, 2015.\n";

    #[test]
    fn test_parse_plain_text_resume() {
        let output = ResumePipeline::new().parse(&DocumentSource::bytes_named(
            RESUME.as_bytes().to_vec(),
            "jane.txt",
        ));

        let profile = &output.profile;
        assert!(profile.skills.contains("Python"));
        assert!(profile.skills.contains("AWS"));
        assert!(!profile.experience.is_empty());
        assert!(profile.education.as_deref().unwrap().contains("University"));
        assert_eq!(output.stats.skill_count, profile.skills.len());
        assert_eq!(output.stats.experience_count, profile.experience.len());
        assert!(output.stats.education_found);
    }

    #[test]
    fn test_summary_is_capped_and_char_safe() {
        let long = "é".repeat(2000);
        let output = ResumePipeline::new().parse(&DocumentSource::bytes_named(
            long.into_bytes(),
            "long.txt",
        ));

        let summary = output.profile.summary.unwrap();
        assert_eq!(summary.chars().count(), SUMMARY_MAX_CHARS);
        assert!(summary.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_unreadable_document_yields_empty_profile() {
        let output = ResumePipeline::new().parse(&DocumentSource::path("/no/such/file.txt"));

        assert_eq!(output.profile, ResumeProfile::default());
        assert_eq!(output.stats.chars, 0);
        assert!(!output.stats.education_found);
    }

    #[test]
    fn test_profile_serializes_for_storage() {
        let output = ResumePipeline::new().parse(&DocumentSource::bytes_named(
            RESUME.as_bytes().to_vec(),
            "jane.txt",
        ));

        let json = serde_json::to_value(&output.profile).unwrap();
        assert!(json["skills"].is_array());
        assert!(json["experience"].is_array());
        assert!(json["summary"].is_string());

        let back: ResumeProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, output.profile);
    }
}
