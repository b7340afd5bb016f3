/// Domain vocabulary recognised in case text
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "database",
    "connection",
    "timeout",
    "pool",
    "postgresql",
    "mysql",
    "oracle",
    "performance",
    "tuning",
    "scaling",
    "infrastructure",
    "monitoring",
    "aws",
    "api",
    "backend",
    "integration",
    "troubleshooting",
    "architect",
    "administration",
];

/// Strategy for pulling relevance keywords out of free text
///
/// Returned keywords are lower-case and in a stable order so that
/// scoring stays deterministic.
pub trait KeywordExtractor {
    fn extract(&self, text: &str) -> Vec<String>;
}

/// Case-insensitive substring match against a fixed vocabulary
#[derive(Debug, Clone)]
pub struct VocabularyExtractor {
    vocabulary: Vec<String>,
}

impl VocabularyExtractor {
    pub fn new<I, S>(vocabulary: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            vocabulary: vocabulary
                .into_iter()
                .map(|word| word.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }
}

impl Default for VocabularyExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_VOCABULARY)
    }
}

impl KeywordExtractor for VocabularyExtractor {
    fn extract(&self, text: &str) -> Vec<String> {
        let haystack = text.to_lowercase();
        self.vocabulary
            .iter()
            .filter(|keyword| haystack.contains(keyword.as_str()))
            .cloned()
            .collect()
    }
}
