use eyre::Result;
use serde::Serialize;

use crate::classify::classify;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::render;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct Answer<'a> {
    question: &'a str,
    topic: Option<TopicKey>,
    answer: String,
}

pub fn run(text: &str, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let profile = super::load_profile(config)?;

    let topic = classify(text);
    log::debug!("ask {:?} -> {:?}", text, topic);

    let output = Answer {
        question: text,
        topic,
        answer: match topic {
            Some(topic) => render::render(&profile, topic),
            None => render::guidance(&profile),
        },
    };

    match OutputFormat::resolve(format) {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&output)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&output)?),
        OutputFormat::Text => {
            let styled = display::styling_enabled(config.chat.color);
            println!("{}", display::style(&output.answer, styled));
        }
    }

    Ok(())
}
