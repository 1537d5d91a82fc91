use dictionary::Word;

pub const SHARE_TITLE: &str = "Gujarati Word of the Day";

/// Title/text/url triple handed to a native share surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

pub fn share_payload(word: &Word, page_url: &str) -> SharePayload {
    SharePayload {
        title: SHARE_TITLE.to_owned(),
        text: format!("Today's Gujarati Word of the Day: {}", word.word),
        url: page_url.to_owned(),
    }
}

impl SharePayload {
    /// What gets presented for manual copying when no share surface exists.
    pub fn manual_copy_text(&self) -> String {
        format!("{}\n{}", self.text, self.url)
    }
}
