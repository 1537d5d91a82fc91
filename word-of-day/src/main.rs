use std::io::{self, Write};

use chrono::{Local, NaiveDate};
use dictionary::{AudioSources, Dictionary, DEFAULT_BASE_URL};
use tracing::Level;

use controller::DailyWordController;
use resolver::{WordOrigin, WordResolver, WordSource};
use share::share_payload;

mod controller;
mod fallback;
mod render;
mod resolver;
mod selector;
mod share;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::WARN).init();
    let _ = dotenv::dotenv();
    let base_url =
        dotenv::var("DICTIONARY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let dict = Dictionary::with_base_url(&base_url);
    let mut controller = DailyWordController::new(WordResolver::new(dict));

    let today = Local::now().date_naive();
    println!("{}", format_display_date(today));
    controller.show_daily(today).await;
    show_current(&controller);

    loop {
        let line = input(">> ")?;
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        if let Some(command) = command_parts.next() {
            match command {
                "exit" | "leave" | "quit" | "e" | "q" => {
                    break;
                }
                "new" | "n" => {
                    controller.show_random(today).await;
                    show_current(&controller);
                }
                "today" | "t" => {
                    controller.show_daily(today).await;
                    show_current(&controller);
                }
                "flip" | "f" => {
                    controller.toggle_view();
                    show_current(&controller);
                }
                "share" | "s" => {
                    share_current(&controller, &base_url);
                }
                "listen" | "audio" | "a" => {
                    listen_current(&controller, &base_url);
                }
                "help" | "h" => {
                    print_help();
                }
                _ => {
                    println!("Unknown command {command}.");
                }
            }
        }
    }
    Ok(())
}

fn show_current<S: WordSource>(controller: &DailyWordController<S>) {
    match controller.current() {
        Some(resolution) => {
            if resolution.origin == WordOrigin::Fallback {
                println!("(the dictionary service is unreachable, showing a built-in word)");
            }
            print!("{}", render::render(&resolution.word, controller.view_mode()));
        }
        None => {
            println!("No word has been resolved yet.");
        }
    }
}

fn share_current<S: WordSource>(controller: &DailyWordController<S>, page_url: &str) {
    if let Some(resolution) = controller.current() {
        let payload = share_payload(&resolution.word, page_url);
        println!("{}", payload.title);
        println!("{}", payload.manual_copy_text());
    } else {
        println!("Nothing to share yet.");
    }
}

fn listen_current<S: WordSource>(controller: &DailyWordController<S>, base_url: &str) {
    if let Some(resolution) = controller.current() {
        let sources = AudioSources::for_word(base_url, resolution.word.numeric_id);
        println!("word audio:    {}", sources.word_url);
        if resolution.word.example.is_some() {
            println!("example audio: {}", sources.example_url);
        }
    } else {
        println!("Nothing to play yet.");
    }
}

fn print_help() {
    println!("new     fetch a random word");
    println!("today   back to the word of the day");
    println!("flip    toggle the flashcard view");
    println!("share   print the share text");
    println!("listen  print the audio resource addresses");
    println!("exit    leave");
}

/// Display date in the "Wednesday, April 23, 2025" shape.
fn format_display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn input(prompt: &str) -> io::Result<String> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_date_is_long_form_without_padding() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 23).unwrap();
        assert_eq!(format_display_date(date), "Wednesday, April 23, 2025");
        let date = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(format_display_date(date), "Tuesday, August 5, 2025");
    }
}
