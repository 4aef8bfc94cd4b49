//! Terminal presentation of rendered answers
//!
//! Answers are Markdown-flavoured text. On a terminal, `**bold**` markers are
//! turned into real bold and `---` lines into a full-width rule; otherwise the
//! text is printed unchanged.

use colored::*;
use lazy_regex::regex_replace_all;
use std::io::IsTerminal;
use terminal_size::{Width, terminal_size};

use crate::profile::Profile;
use crate::topic::TopicKey;

pub const APP_TITLE: &str = "Interactive Portfolio Bot";

const DEFAULT_WIDTH: usize = 60;
const MAX_WIDTH: usize = 80;

/// Width used for rules and dividers
pub fn rule_width() -> usize {
    match terminal_size() {
        Some((Width(w), _)) => (w as usize).min(MAX_WIDTH),
        None => DEFAULT_WIDTH,
    }
}

/// Styling is applied only when color is enabled and stdout is a terminal
pub fn styling_enabled(color: bool) -> bool {
    color && std::io::stdout().is_terminal()
}

/// Style answer text for the terminal
pub fn style(text: &str, styled: bool) -> String {
    if !styled {
        return text.to_string();
    }

    let width = rule_width();
    text.lines()
        .map(|line| {
            if line.trim() == "---" {
                "─".repeat(width).dimmed().to_string()
            } else {
                regex_replace_all!(r"\*\*(.+?)\*\*", line, |_, inner: &str| inner.bold().to_string()).into_owned()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Title, caption and disclaimer shown above every page
pub fn print_header(profile: &Profile, show_disclaimer: bool) {
    println!("{}", APP_TITLE.bold());
    let caption = profile.caption();
    if !caption.is_empty() {
        println!("{}", caption.dimmed());
    }
    if show_disclaimer && let Some(disclaimer) = profile.disclaimer() {
        println!();
        println!("{} {}", "ℹ".blue(), disclaimer);
    }
    println!("{}", "═".repeat(rule_width()));
}

/// Numbered quick-topic menu, three per row
pub fn print_quick_topics() {
    let entries: Vec<String> = TopicKey::ALL
        .iter()
        .enumerate()
        .map(|(i, topic)| format!("{} {:<18}", format!("[{}]", i + 1).cyan(), topic.label()))
        .collect();
    for row in entries.chunks(3) {
        println!("  {}", row.join(" ").trim_end());
    }
}

/// Print a page section heading
pub fn print_heading(label: &str, styled: bool) {
    if styled {
        println!("{}", format!("### {}", label).bold().cyan());
    } else {
        println!("### {}", label);
    }
}
