use chrono::NaiveDate;
use dictionary::{Definition, Example, Word};

use crate::selector::select_daily_id;

struct FallbackEntry {
    numeric_id: u32,
    word: &'static str,
    ipa: &'static str,
    romanization: &'static str,
    definitions: &'static [(&'static str, &'static str)],
    example: Option<(&'static str, &'static str, &'static str)>,
}

// Built-in entries shown when the dictionary service is unreachable. The
// audio ids are fixed and unrelated to the remote id space.
const FALLBACK_ENTRIES: &[FallbackEntry] = &[
    FallbackEntry {
        numeric_id: 1,
        word: "નમસ્તે",
        ipa: "/nəməste/",
        romanization: "namaste",
        definitions: &[("interjection", "Hello; Greetings (a common greeting)")],
        example: Some((
            "નમસ્તે, તમે કેમ છો?",
            "namaste, tame kem cho?",
            "Hello, how are you?",
        )),
    },
    FallbackEntry {
        numeric_id: 2,
        word: "આભાર",
        ipa: "/ābhār/",
        romanization: "ābhār",
        definitions: &[("noun", "Thanks; Gratitude")],
        example: Some((
            "તમારી મદદ માટે આભાર.",
            "tamārī madad māṭe ābhār.",
            "Thank you for your help.",
        )),
    },
    FallbackEntry {
        numeric_id: 3,
        word: "પ્રેમ",
        ipa: "/prem/",
        romanization: "prem",
        definitions: &[("noun", "Love; Affection")],
        example: Some((
            "માનો પ્રેમ અનમોલ છે.",
            "māno prem anmol che.",
            "A mother's love is priceless.",
        )),
    },
    FallbackEntry {
        numeric_id: 4,
        word: "પાણી",
        ipa: "/pāṇī/",
        romanization: "pāṇī",
        definitions: &[("noun", "Water")],
        example: Some((
            "મને થોડું પાણી આપો.",
            "mane thoḍuṁ pāṇī āpo.",
            "Please give me some water.",
        )),
    },
    FallbackEntry {
        numeric_id: 5,
        word: "પુસ્તક",
        ipa: "/pustək/",
        romanization: "pustak",
        definitions: &[("noun", "Book")],
        example: Some((
            "આ પુસ્તક ખૂબ સરસ છે.",
            "ā pustak khūb saras che.",
            "This book is very nice.",
        )),
    },
    FallbackEntry {
        numeric_id: 6,
        word: "મિત્ર",
        ipa: "/mitrə/",
        romanization: "mitra",
        definitions: &[("noun", "Friend")],
        example: Some((
            "તે મારો સારો મિત્ર છે.",
            "te māro sāro mitra che.",
            "He is my good friend.",
        )),
    },
];

impl FallbackEntry {
    fn to_word(&self) -> Word {
        Word {
            word: self.word.to_owned(),
            romanization: Some(self.romanization.to_owned()),
            ipa: Some(self.ipa.to_owned()),
            definitions: self
                .definitions
                .iter()
                .map(|(part_of_speech, text)| Definition {
                    part_of_speech: (*part_of_speech).to_owned(),
                    text: (*text).to_owned(),
                })
                .collect(),
            example: self.example.map(|(text, romanization, translation)| Example {
                text: text.to_owned(),
                romanization: Some(romanization.to_owned()),
                translation: Some(translation.to_owned()),
            }),
            numeric_id: self.numeric_id,
        }
    }
}

/// The built-in word for `date`. Seeded by the date alone so a day-long
/// outage shows one consistent word, whatever was being fetched.
pub fn fallback_word_for(date: NaiveDate) -> Word {
    let index = select_daily_id(date, FALLBACK_ENTRIES.len() as u32) - 1;
    FALLBACK_ENTRIES[index as usize].to_word()
}
