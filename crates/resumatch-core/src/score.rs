use crate::skills::SkillSet;

/// Accessor for domain objects that carry a skill name (a stored skill row,
/// a tag record). Lets callers score straight from their own types.
pub trait SkillName {
    fn name(&self) -> &str;
}

/// Scorer input, normalized from either an already-split list of names or a
/// single comma/semicolon-delimited string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillsInput {
    Delimited(String),
    Items(Vec<String>),
}

impl SkillsInput {
    #[must_use]
    pub fn from_named<T: SkillName>(items: &[T]) -> Self {
        Self::Items(items.iter().map(|item| item.name().to_string()).collect())
    }

    /// Trim, drop empties, dedupe case-insensitively.
    #[must_use]
    pub fn normalize(&self) -> SkillSet {
        match self {
            Self::Delimited(s) => s.split(|c| c == ',' || c == ';').collect(),
            Self::Items(items) => items.iter().collect(),
        }
    }
}

impl From<&str> for SkillsInput {
    fn from(s: &str) -> Self {
        Self::Delimited(s.to_string())
    }
}

impl From<String> for SkillsInput {
    fn from(s: String) -> Self {
        Self::Delimited(s)
    }
}

impl From<Vec<String>> for SkillsInput {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}

impl From<Vec<&str>> for SkillsInput {
    fn from(items: Vec<&str>) -> Self {
        Self::Items(items.into_iter().map(str::to_string).collect())
    }
}

impl From<&[String]> for SkillsInput {
    fn from(items: &[String]) -> Self {
        Self::Items(items.to_vec())
    }
}

impl From<&[&str]> for SkillsInput {
    fn from(items: &[&str]) -> Self {
        Self::Items(items.iter().map(|s| (*s).to_string()).collect())
    }
}

impl From<SkillSet> for SkillsInput {
    fn from(set: SkillSet) -> Self {
        Self::Items(set.into_vec())
    }
}

impl From<&SkillSet> for SkillsInput {
    fn from(set: &SkillSet) -> Self {
        Self::Items(set.iter().map(str::to_string).collect())
    }
}

/// Fraction of the job's required skills present in the résumé skill set,
/// in `[0.0, 1.0]`, rounded to two decimal places.
///
/// An empty requirement set scores exactly `0.0`: there is nothing to match
/// against. Membership is case-insensitive and résumé-side duplicates never
/// count twice, so the result is deterministic under reordering and
/// re-casing of either input.
#[must_use]
pub fn calculate_match_score<R, J>(resume_skills: R, job_requirements: J) -> f64
where
    R: Into<SkillsInput>,
    J: Into<SkillsInput>,
{
    let resume = resume_skills.into().normalize();
    let job = job_requirements.into().normalize();

    if job.is_empty() {
        return 0.0;
    }

    let overlap = job.iter().filter(|req| resume.contains(req)).count();
    round_to_hundredths(overlap as f64 / job.len() as f64)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
