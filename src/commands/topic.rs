use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::render;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct TopicAnswer {
    topic: Option<TopicKey>,
    label: Option<&'static str>,
    answer: String,
}

pub fn run(key: &str, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let profile = super::load_profile(config)?;

    let topic = TopicKey::from_key(key);
    if topic.is_none() {
        log::warn!("Unknown topic key: {}", key);
    }

    let output = TopicAnswer {
        topic,
        label: topic.map(|t| t.label()),
        answer: render::render_key(&profile, key),
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
