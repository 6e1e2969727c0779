use serde::{Deserialize, Deserializer, Serialize};

/// Ordered collection of distinct skill names. Deduplication is
/// case-insensitive; the casing of the first occurrence is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillSet {
    items: Vec<String>,
}

impl SkillSet {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Trims the name, drops empties, dedupes case-insensitively.
    /// Returns whether the skill was actually added.
    pub fn insert(&mut self, name: impl AsRef<str>) -> bool {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() || self.contains(trimmed) {
            return false;
        }
        self.items.push(trimmed.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let key = name.trim().to_lowercase();
        self.items.iter().any(|s| s.to_lowercase() == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl IntoIterator for SkillSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

// Re-normalizes on the way in so a hand-edited or duplicated stored list
// cannot break the distinctness invariant.
impl<'de> Deserialize<'de> for SkillSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<String>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

impl std::fmt::Display for SkillSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.items.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_dedupes_case_insensitively() {
        let mut set = SkillSet::new();
        assert!(set.insert("Python"));
        assert!(!set.insert("python"));
        assert!(!set.insert("  PYTHON  "));
        assert_eq!(set.as_slice(), ["Python"]);
    }

    #[test]
    fn test_first_seen_casing_wins() {
        let set: SkillSet = ["SQL", "sql", "Sql"].into_iter().collect();
        assert_eq!(set.as_slice(), ["SQL"]);
    }

    #[test]
    fn test_blank_items_are_dropped() {
        let set: SkillSet = ["", "  ", "Rust"].into_iter().collect();
        assert_eq!(set.len(), 1);
        assert!(set.contains("rust"));
    }

    #[test]
    fn test_display_joins_with_comma() {
        let set: SkillSet = ["Python", "AWS"].into_iter().collect();
        assert_eq!(set.to_string(), "Python, AWS");
    }

    #[test]
    fn test_deserialize_renormalizes() {
        let set: SkillSet = serde_json::from_str(r#"["Python", "python", " SQL "]"#).unwrap();
        assert_eq!(set.as_slice(), ["Python", "SQL"]);
    }

    #[test]
    fn test_serialize_is_plain_array() {
        let set: SkillSet = ["Python", "SQL"].into_iter().collect();
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["Python","SQL"]"#);
    }
}
