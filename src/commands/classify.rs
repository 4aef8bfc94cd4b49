use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::classify::match_keyword;
use crate::cli::OutputFormat;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct Classification<'a> {
    text: &'a str,
    topic: Option<TopicKey>,
    keyword: Option<&'static str>,
}

pub fn run(text: &str, format: OutputFormat) -> Result<()> {
    let matched = match_keyword(text);
    let output = Classification {
        text,
        topic: matched.map(|(topic, _)| topic),
        keyword: matched.map(|(_, keyword)| keyword),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Text => match matched {
            Some((topic, keyword)) => println!(
                "{} {} ({}) via keyword '{}'",
                "→".blue(),
                topic.as_str().cyan(),
                topic.label(),
                keyword.green()
            ),
            None => println!("{} {}", "✗".red(), "no topic matched".dimmed()),
        },
    }

    Ok(())
}
