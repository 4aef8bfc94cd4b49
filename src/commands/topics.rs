use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::classify::keywords_for;
use crate::cli::OutputFormat;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct TopicInfo {
    number: usize,
    key: TopicKey,
    label: &'static str,
    keywords: &'static [&'static str],
}

pub fn run(format: OutputFormat) -> Result<()> {
    let topics: Vec<TopicInfo> = TopicKey::ALL
        .iter()
        .enumerate()
        .map(|(i, topic)| TopicInfo {
            number: i + 1,
            key: *topic,
            label: topic.label(),
            keywords: keywords_for(*topic),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&topics)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&topics)?),
        OutputFormat::Text => {
            println!("{}", "Quick topics:".bold());
            println!();
            for info in &topics {
                println!(
                    "  {} {:18} {:12} {}",
                    format!("[{}]", info.number).cyan(),
                    info.label,
                    info.key.as_str().dimmed(),
                    info.keywords.join(", ")
                );
            }
            println!();
            println!("Keywords are matched in this order; the first one found in a question wins.");
        }
    }

    Ok(())
}
