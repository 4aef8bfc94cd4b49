//! Deterministic topic rendering
//!
//! `render` is a pure function of the profile and a topic key. Each topic has
//! its own formatter; missing fields degrade silently and a topic with no
//! content at all falls back to a fixed sentence, so output is never empty.

use crate::profile::Profile;
use crate::topic::TopicKey;

mod entries;
mod links;
mod sections;

/// Reply for a topic key string that is not one of the nine topics
pub const UNKNOWN_TOPIC: &str = "I don't have that topic filled in yet.";

/// Render the answer for a topic
pub fn render(profile: &Profile, topic: TopicKey) -> String {
    match topic {
        TopicKey::About => sections::about(profile),
        TopicKey::Academics => sections::academics(profile),
        TopicKey::Ns => sections::national_service(profile),
        TopicKey::WhyIctAi => sections::why_ict_ai(profile),
        TopicKey::Learning => entries::learning(profile.section("learning")),
        TopicKey::Projects => entries::projects(profile.section("projects")),
        TopicKey::Skills => sections::skills(profile),
        TopicKey::ReposLinks => links::repos_and_links(profile),
        TopicKey::Contact => sections::contact(profile),
    }
}

/// Render by wire name, answering unknown keys with [`UNKNOWN_TOPIC`]
pub fn render_key(profile: &Profile, key: &str) -> String {
    match TopicKey::from_key(key) {
        Some(topic) => render(profile, topic),
        None => UNKNOWN_TOPIC.to_string(),
    }
}

/// Reply for free text that matched no topic
pub fn guidance(profile: &Profile) -> String {
    format!(
        "I can only answer using the data in {}.\n\n\
         Try: About, Academics, National Service, Why ICT/AI, Learning, Projects, Skills, Repos & Links, Contact.",
        profile.source_name()
    )
}

/// "- item" lines
pub(crate) fn bullets(lines: &[String]) -> String {
    lines.iter().map(|line| format!("- {}", line)).collect::<Vec<_>>().join("\n")
}

/// Accumulates "**Heading**" blocks, dropping empty ones
#[derive(Default)]
pub(crate) struct Sections {
    parts: Vec<String>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a heading + body block if the body has content
    pub fn push(&mut self, heading: &str, body: String) {
        if !body.trim().is_empty() {
            self.parts.push(format!("**{}**\n\n{}", heading, body));
        }
    }

    /// Add a bullet-list block if the list is non-empty
    pub fn push_list(&mut self, heading: &str, lines: &[String]) {
        self.push(heading, bullets(lines));
    }

    /// Join blocks with a blank line, or return `fallback` when there are none
    pub fn finish(self, fallback: &str) -> String {
        let text = self.parts.join("\n\n").trim().to_string();
        if text.is_empty() { fallback.to_string() } else { text }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn profile(doc: Value) -> Profile {
        Profile::from_value(doc, "profile.json").unwrap()
    }

    #[test]
    fn test_every_topic_non_empty_for_empty_profile() {
        let p = profile(json!({}));
        for topic in TopicKey::ALL {
            assert!(!render(&p, topic).trim().is_empty(), "{} rendered empty", topic);
        }
    }

    #[test]
    fn test_every_topic_survives_wrongly_typed_sections() {
        let p = profile(json!({
            "meta": 5,
            "about": "text",
            "academics": [1, 2],
            "ns": null,
            "why_ict_ai": true,
            "learning": {"title": "x"},
            "projects": "none",
            "skills": [],
            "evidence_and_links": "x",
            "links": [1],
            "contact": 42
        }));
        for topic in TopicKey::ALL {
            assert!(!render(&p, topic).is_empty());
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let p = profile(json!({
            "about": {"short_bio": ["Student"]},
            "projects": [{"name": "Bot", "tech": ["Rust"]}],
            "skills": {"technical": ["Python"]}
        }));
        for topic in TopicKey::ALL {
            assert_eq!(render(&p, topic), render(&p, topic));
        }
    }

    #[test]
    fn test_render_key_unknown() {
        let p = profile(json!({}));
        assert_eq!(render_key(&p, "hobbies"), UNKNOWN_TOPIC);
        assert_eq!(render_key(&p, "skills"), "I haven't added skills yet.");
    }

    #[test]
    fn test_guidance_names_profile_file() {
        let p = Profile::from_value(json!({}), "/tmp/me.json").unwrap();
        let text = guidance(&p);
        assert!(text.starts_with("I can only answer using the data in me.json."));
        assert!(text.ends_with("Repos & Links, Contact."));
    }

    #[test]
    fn test_sections_skip_empty_blocks() {
        let mut sections = Sections::new();
        sections.push_list("Empty", &[]);
        sections.push_list("Full", &["a".to_string(), "b".to_string()]);
        assert_eq!(sections.finish("fallback"), "**Full**\n\n- a\n- b");
        assert_eq!(Sections::default().finish("fallback"), "fallback");
    }
}
