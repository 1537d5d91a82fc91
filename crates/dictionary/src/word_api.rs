use serde::Deserialize;

use crate::word::{Definition, Example, Word};
use crate::{DictionaryError, MalformedPayload};

#[derive(Debug, Deserialize)]
pub(crate) struct WordPayload {
    word: String,
    #[serde(default)]
    romanization: Option<String>,
    #[serde(default)]
    ipa: Option<String>,
    #[serde(default)]
    ipa_alt: Option<String>,
    #[serde(default)]
    definitions: Vec<DefinitionPayload>,
    #[serde(default)]
    example: Option<String>,
    #[serde(default)]
    example_romanization: Option<String>,
    #[serde(default)]
    example_translation: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DefinitionPayload {
    pos: String,
    definition: String,
}

pub(crate) async fn get_word_by_id(
    client: &reqwest::Client,
    base_url: &str,
    id: u32,
) -> Result<Word, DictionaryError> {
    let response = client
        .get(format!("{base_url}/api/v1/words/{id}"))
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = response.status();
    if !status.is_success() {
        return Err(DictionaryError::Status(status));
    }
    let payload = response
        .json::<WordPayload>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    payload.into_word(id)
}

impl WordPayload {
    /// Builds the public word record. `numeric_id` is always the id the
    /// lookup was issued for; the payload carries no trusted identifier.
    pub(crate) fn into_word(self, numeric_id: u32) -> Result<Word, DictionaryError> {
        if self.word.trim().is_empty() {
            return Err(DictionaryError::Malformed(MalformedPayload::new(
                "word record has an empty display text",
            )));
        }
        let ipa = self.ipa.or(self.ipa_alt);
        let example = self.example.map(|text| Example {
            text,
            romanization: self.example_romanization,
            translation: self.example_translation,
        });
        Ok(Word {
            word: self.word,
            romanization: self.romanization,
            ipa,
            definitions: self
                .definitions
                .into_iter()
                .map(|definition| Definition {
                    part_of_speech: definition.pos,
                    text: definition.definition,
                })
                .collect(),
            example,
            numeric_id,
        })
    }
}
