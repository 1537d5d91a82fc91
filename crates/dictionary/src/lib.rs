use std::fmt;

use word_api::get_word_by_id;

mod audio;
mod word;
mod word_api;

pub use audio::AudioSources;
pub use word::{Definition, Example, Word};

pub const DEFAULT_BASE_URL: &str = "https://gujarati.shivvtrivedi.com";

#[derive(Debug)]
pub enum DictionaryError {
    Fetch(reqwest::Error),
    Status(reqwest::StatusCode),
    Deserialize(reqwest::Error),
    Malformed(MalformedPayload),
}

#[derive(Debug)]
pub struct MalformedPayload {
    message: String,
}

impl MalformedPayload {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(error) => write!(f, "request failed: {error}"),
            Self::Status(status) => write!(f, "server answered with status {status}"),
            Self::Deserialize(error) => write!(f, "could not decode the response: {error}"),
            Self::Malformed(payload) => write!(f, "malformed word record: {}", payload.message),
        }
    }
}

impl std::error::Error for DictionaryError {}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: String,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Looks up the word record stored under `id`. The returned word's
    /// `numeric_id` is `id`, regardless of what the payload contains.
    pub async fn get_word_by_id(&self, id: u32) -> Result<Word, DictionaryError> {
        get_word_by_id(&self.client, &self.base_url, id).await
    }

    pub fn audio_sources(&self, numeric_id: u32) -> AudioSources {
        AudioSources::for_word(&self.base_url, numeric_id)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::new()
    }
}
