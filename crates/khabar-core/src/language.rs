use serde::{Deserialize, Deserializer};
use std::fmt;

/// Request language, parsed from the two-letter codes the front-end sends.
///
/// The language picks the news source (English uses the article search,
/// everything else the Google News feed) and the language name used in the
/// summarization prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Language {
    English,
    Hindi,
    Marathi,
    /// Any code outside the supported set, preserved verbatim
    Other(String),
}

impl Language {
    /// Parse a wire code ("en", "hi", "mr", ...) into a language
    pub fn parse(code: &str) -> Self {
        match code {
            "en" => Language::English,
            "hi" => Language::Hindi,
            "mr" => Language::Marathi,
            other => Language::Other(other.to_string()),
        }
    }

    /// The wire code, as embedded in feed URLs
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Marathi => "mr",
            Language::Other(code) => code,
        }
    }

    /// Language name used in summarization prompts.
    /// Unsupported languages are summarized in English.
    pub fn prompt_name(&self) -> &str {
        match self {
            Language::English | Language::Other(_) => "English",
            Language::Hindi => "Hindi",
            Language::Marathi => "Marathi",
        }
    }

    /// Whether articles for this language come from the search API
    /// instead of the news feed
    pub fn uses_search_api(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// Custom deserializer: the language arrives as the bare wire code
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Ok(Language::parse(&code))
    }
}
