/// Addressable audio resources for one word entry. Playback and its
/// completion/error signals belong to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSources {
    pub word_url: String,
    pub example_url: String,
}

impl AudioSources {
    pub fn for_word(base_url: &str, numeric_id: u32) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            word_url: format!("{base}/api/v1/audio/word/{numeric_id}"),
            example_url: format!("{base}/api/v1/audio/example/{numeric_id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_address_both_resources() {
        let sources = AudioSources::for_word("https://gujarati.shivvtrivedi.com", 1883);
        assert_eq!(
            sources.word_url,
            "https://gujarati.shivvtrivedi.com/api/v1/audio/word/1883"
        );
        assert_eq!(
            sources.example_url,
            "https://gujarati.shivvtrivedi.com/api/v1/audio/example/1883"
        );
    }

    #[test]
    fn trailing_slash_on_base_url_is_tolerated() {
        let sources = AudioSources::for_word("http://localhost:8080/", 4);
        assert_eq!(sources.word_url, "http://localhost:8080/api/v1/audio/word/4");
    }
}
