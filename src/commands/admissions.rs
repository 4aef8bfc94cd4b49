//! Admissions view
//!
//! Every topic rendered on one page, in quick-topic order.

use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::render;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct Section {
    topic: TopicKey,
    label: &'static str,
    answer: String,
}

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let profile = super::load_profile(config)?;

    let sections: Vec<Section> = TopicKey::ALL
        .into_iter()
        .map(|topic| Section {
            topic,
            label: topic.label(),
            answer: render::render(&profile, topic),
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sections)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&sections)?),
        OutputFormat::Text => {
            let styled = display::styling_enabled(config.chat.color);
            display::print_header(&profile, config.chat.show_disclaimer);
            println!("Admissions View (Deterministic Summary)");
            for section in &sections {
                println!();
                display::print_heading(section.label, styled);
                println!("{}", display::style(&section.answer, styled));
            }
        }
    }

    Ok(())
}
