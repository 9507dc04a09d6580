//! Translation instructions
//!
//! The instruction sent as the first conversation message is built from a
//! target language, a tone and optional user-supplied rules.

use crate::error::AppError;

/// Target languages and the instruction used for each
pub const LANGUAGES: &[(&str, &str)] = &[
    (
        "German",
        "Please translate the following text from English to German, ensuring accuracy and cultural relevance.",
    ),
    (
        "French",
        "Translate this English passage into French, considering regional linguistic variations where applicable.",
    ),
    (
        "Spanish Mexico",
        "Convert the below English text into Mexican Spanish, paying close attention to local expressions and idiomatic usage.",
    ),
    (
        "Spanish Neutral",
        "Translate the following English text into a neutral Spanish that is universally understood, while being mindful of idiomatic expressions.",
    ),
    (
        "Spanish Spain",
        "Please adapt the English content into Castilian Spanish, incorporating cultural and regional nuances specific to Spain.",
    ),
    (
        "Portuguese",
        "Translate the following English text into Portuguese, ensuring that regional differences are respected.",
    ),
    (
        "Italian",
        "Please render the following English passage into Italian, taking care to reflect the linguistic richness and regional variations of Italy.",
    ),
    (
        "Japanese",
        "Convert the English text below into Japanese, being mindful of the cultural context and nuances.",
    ),
    (
        "English Australia",
        "Translate the following English text into Australian English, incorporating local slang and expressions where appropriate.",
    ),
    (
        "English US",
        "Adapt the following English content into American English, considering regional variations and idiomatic usage.",
    ),
];

/// Tones and the instruction appended for each
pub const TONES: &[(&str, &str)] = &[
    (
        "Documentation/Instructions",
        "Translate the text with a formal and instructional tone.",
    ),
    (
        "Product Page",
        "Translate the text with a persuasive and customer-centric tone.",
    ),
    (
        "Email Marketing",
        "Translate the text with an engaging and informal tone.",
    ),
    ("General Translation", "Translate the text with a neutral tone."),
];

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name.trim()))
        .map(|(_, prompt)| *prompt)
}

/// Instruction for a target language (case-insensitive)
pub fn language_prompt(language: &str) -> Result<&'static str, AppError> {
    lookup(LANGUAGES, language)
        .ok_or_else(|| AppError::ConfigError(format!("Unknown language: {}", language)))
}

/// Instruction for a tone (case-insensitive)
pub fn tone_prompt(tone: &str) -> Result<&'static str, AppError> {
    lookup(TONES, tone).ok_or_else(|| AppError::ConfigError(format!("Unknown tone: {}", tone)))
}

/// Build the instruction message for a translation conversation
pub fn build_system_prompt(
    language: &str,
    tone: &str,
    rules: Option<&str>,
) -> Result<String, AppError> {
    let mut prompt = format!("{} {}", language_prompt(language)?, tone_prompt(tone)?);

    if let Some(rules) = rules.map(str::trim).filter(|r| !r.is_empty()) {
        prompt.push_str(&format!(
            "\n\nPlease follow these translation rules: {}.",
            rules
        ));
    }

    Ok(prompt)
}

/// Language, tone and rules behind a conversation's instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSettings {
    pub language: String,
    pub tone: String,
    pub rules: Option<String>,
}

impl TranslationSettings {
    /// Validated settings; unknown language or tone names are rejected
    pub fn new(
        language: impl Into<String>,
        tone: impl Into<String>,
        rules: Option<String>,
    ) -> Result<Self, AppError> {
        let settings = Self {
            language: language.into(),
            tone: tone.into(),
            rules: rules.filter(|r| !r.trim().is_empty()),
        };
        settings.prompt()?;
        Ok(settings)
    }

    pub fn prompt(&self) -> Result<String, AppError> {
        build_system_prompt(&self.language, &self.tone, self.rules.as_deref())
    }

    /// Same settings with another target language
    pub fn with_language(&self, language: &str) -> Result<Self, AppError> {
        Self::new(language.trim(), self.tone.clone(), self.rules.clone())
    }

    /// Same settings with another tone
    pub fn with_tone(&self, tone: &str) -> Result<Self, AppError> {
        Self::new(self.language.clone(), tone.trim(), self.rules.clone())
    }

    /// Same settings with new rules; blank rules clear them
    pub fn with_rules(&self, rules: Option<&str>) -> Result<Self, AppError> {
        Self::new(
            self.language.clone(),
            self.tone.clone(),
            rules.map(|r| r.trim().to_string()),
        )
    }
}
