//! Interactive chat session
//!
//! Reads one line at a time. Numbers and `/<topic>` pick a quick topic
//! directly; anything else is classified as free text. The session log lives
//! only as long as this command.

use colored::*;
use eyre::Result;
use std::io::{self, BufRead, Write};

use crate::config::Config;
use crate::display;
use crate::profile::Profile;
use crate::session::{ChatLog, Resolution, Role};
use crate::topic::TopicKey;

/// A parsed line of chat input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Empty,
    Quit,
    Help,
    Topics,
    History,
    Select(TopicKey),
    UnknownCommand(String),
    Text(String),
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    if let Ok(n) = trimmed.parse::<usize>()
        && let Some(topic) = TopicKey::from_number(n)
    {
        return Input::Select(topic);
    }

    if let Some(command) = trimmed.strip_prefix('/') {
        return match command.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Input::Quit,
            "help" | "?" => Input::Help,
            "topics" => Input::Topics,
            "history" => Input::History,
            other => match TopicKey::from_key(other) {
                Some(topic) => Input::Select(topic),
                None => Input::UnknownCommand(trimmed.to_string()),
            },
        };
    }

    Input::Text(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn run(config: &Config) -> Result<()> {
    let profile = super::load_profile(config)?;
    let stdin = io::stdin();
    run_session(&profile, config, stdin.lock())
}

fn run_session<R: BufRead>(profile: &Profile, config: &Config, mut input: R) -> Result<()> {
    let styled = display::styling_enabled(config.chat.color);
    let mut log = ChatLog::new(profile);

    display::print_header(profile, config.chat.show_disclaimer);
    println!();
    print_reply(log.messages()[0].content.as_str(), styled);
    println!();
    display::print_quick_topics();

    loop {
        print!("\n{} ", ">".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_input(&line) {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => print_help(),
            Input::Topics => display::print_quick_topics(),
            Input::History => print_history(&log, styled),
            Input::UnknownCommand(command) => {
                println!("{} Unknown command: {} (try /help)", "✗".red(), command);
            }
            Input::Select(topic) => {
                let resolution = log.select(profile, topic);
                log::debug!("Quick topic selected: {:?}", resolution);
                answer(&log, styled);
            }
            Input::Text(text) => {
                let resolution = log.submit(profile, &text);
                match resolution {
                    Resolution::Matched(topic, keyword) => {
                        log::debug!("Classified as {} via '{}'", topic, keyword)
                    }
                    _ => log::debug!("No topic matched"),
                }
                answer(&log, styled);
            }
        }
    }

    log::info!("Chat session ended after {} messages", log.len());
    Ok(())
}

fn answer(log: &ChatLog, styled: bool) {
    if let Some(reply) = log.last_reply() {
        println!();
        print_reply(reply, styled);
        println!();
        println!("{}", "Ask more:".dimmed());
        display::print_quick_topics();
    }
}

fn print_reply(text: &str, styled: bool) {
    println!("{}", "Bot:".cyan().bold());
    println!("{}", display::style(text, styled));
}

fn print_history(log: &ChatLog, styled: bool) {
    println!("{}", "Conversation so far:".bold());
    for message in log.messages() {
        let who = match message.role {
            Role::User => "You:".green().bold(),
            Role::Assistant => "Bot:".cyan().bold(),
        };
        println!();
        println!("{} {}", who, message.at.format("%H:%M:%S").to_string().dimmed());
        println!("{}", display::style(&message.content, styled));
    }
}

fn print_help() {
    println!("{}", "Commands:".bold());
    println!("  {:12} pick a quick topic", "1-9".cyan());
    println!("  {:12} pick a topic by key, e.g. /projects", "/<topic>".cyan());
    println!("  {:12} list quick topics", "/topics".cyan());
    println!("  {:12} show this conversation", "/history".cyan());
    println!("  {:12} leave", "/quit".cyan());
    println!();
    println!("Anything else is matched against topic keywords.");
}
