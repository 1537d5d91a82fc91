use std::fmt::Write;

use dictionary::Word;

use crate::controller::ViewMode;

pub fn render(word: &Word, mode: ViewMode) -> String {
    match mode {
        ViewMode::Normal => render_normal(word),
        ViewMode::Flashcard => render_flashcard(word),
    }
}

fn render_normal(word: &Word) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", word.word);
    if let Some(pronunciation) = word.pronunciation() {
        let _ = writeln!(out, "    {pronunciation}");
    }
    for definition in &word.definitions {
        let _ = writeln!(out, "    {}:", definition.part_of_speech);
        let _ = writeln!(out, "        {}", definition.text);
    }
    if let Some(example) = &word.example {
        let _ = writeln!(out, "    example: {}", example.text);
        if let Some(romanization) = &example.romanization {
            let _ = writeln!(out, "      romanization: {romanization}");
        }
        if let Some(translation) = &example.translation {
            let _ = writeln!(out, "      translation: {translation}");
        }
    }
    out
}

/// Flashcard front: the word and its pronunciation only. Flipping back to
/// the normal view reveals the definitions.
fn render_flashcard(word: &Word) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "+----------------------------------------+");
    let _ = writeln!(out, "  {}", word.word);
    if let Some(pronunciation) = word.pronunciation() {
        let _ = writeln!(out, "  {pronunciation}");
    }
    let _ = writeln!(out, "+----------------------------------------+");
    let _ = writeln!(out, "(flip to reveal the definition)");
    out
}
