use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display;
use crate::render;
use crate::topic::TopicKey;

#[derive(Serialize)]
struct LinksPage {
    label: &'static str,
    answer: String,
}

pub fn run(format: OutputFormat, config: &Config) -> Result<()> {
    let profile = super::load_profile(config)?;

    let page = LinksPage {
        label: TopicKey::ReposLinks.label(),
        answer: render::render(&profile, TopicKey::ReposLinks),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page)?),
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(&page)?),
        OutputFormat::Text => {
            display::print_header(&profile, config.chat.show_disclaimer);
            let styled = display::styling_enabled(config.chat.color);
            display::print_heading(page.label, styled);
            println!("{}", display::style(&page.answer, styled));
        }
    }

    Ok(())
}
