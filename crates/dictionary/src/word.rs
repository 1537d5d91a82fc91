#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub word: String,
    pub romanization: Option<String>,
    pub ipa: Option<String>,
    pub definitions: Vec<Definition>,
    pub example: Option<Example>,
    /// Identifier used to address the audio resources for this entry.
    /// Assigned by the lookup (or by the fallback table), never read from
    /// the raw payload.
    pub numeric_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub part_of_speech: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    pub text: String,
    pub romanization: Option<String>,
    pub translation: Option<String>,
}

impl Word {
    /// The pronunciation guide to display: IPA when present, the
    /// romanization otherwise.
    pub fn pronunciation(&self) -> Option<&str> {
        self.ipa.as_deref().or(self.romanization.as_deref())
    }
}
