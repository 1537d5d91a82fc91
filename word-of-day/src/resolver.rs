use chrono::NaiveDate;
use dictionary::{Dictionary, DictionaryError, Word};
use tracing::{debug, warn};

use crate::fallback::fallback_word_for;
use crate::selector::{select_daily_id, select_random_id};

/// Size of the remote dictionary's identifier space.
pub const WORD_COUNT: u32 = 6776;

/// Lookup collaborator seam. `Dictionary` is the production source; tests
/// substitute stubs to simulate outages.
pub trait WordSource {
    async fn word_by_id(&self, id: u32) -> Result<Word, DictionaryError>;
}

impl WordSource for Dictionary {
    async fn word_by_id(&self, id: u32) -> Result<Word, DictionaryError> {
        self.get_word_by_id(id).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordOrigin {
    Api,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub word: Word,
    pub origin: WordOrigin,
}

pub struct WordResolver<S> {
    pub(crate) source: S,
}

impl<S: WordSource> WordResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Resolves the record stored under `id`. Never fails outward: any
    /// lookup error degrades to the built-in set, seeded by `today` so the
    /// degraded word stays the same for the whole day no matter which id
    /// was being fetched.
    pub async fn resolve(&self, id: u32, today: NaiveDate) -> Resolution {
        debug!(id, "looking up word");
        match self.source.word_by_id(id).await {
            Ok(word) => Resolution {
                word,
                origin: WordOrigin::Api,
            },
            Err(error) => {
                warn!("lookup for word {id} failed, using the built-in set: {error}");
                Resolution {
                    word: fallback_word_for(today),
                    origin: WordOrigin::Fallback,
                }
            }
        }
    }

    /// Today's word: the date-seeded identifier against the full id space.
    pub async fn resolve_daily(&self, today: NaiveDate) -> Resolution {
        self.resolve(select_daily_id(today, WORD_COUNT), today).await
    }

    /// A fresh word on user request, uniformly random over the id space.
    pub async fn resolve_random(&self, today: NaiveDate) -> Resolution {
        self.resolve(select_random_id(WORD_COUNT), today).await
    }
}
