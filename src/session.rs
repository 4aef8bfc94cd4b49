//! Chat session log
//!
//! An ordered, append-only list of messages for one interactive run. The log
//! is owned by the caller and handed to each interaction; nothing here is
//! written to disk.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::classify;
use crate::profile::Profile;
use crate::render;
use crate::topic::TopicKey;

/// Who sent a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single chat message
#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub at: DateTime<Local>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            at: Local::now(),
        }
    }
}

/// What produced an assistant reply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A quick topic was picked directly
    Selected(TopicKey),
    /// Free text matched a topic keyword
    Matched(TopicKey, &'static str),
    /// Free text matched nothing
    Unrecognized,
}

/// The session's message history
#[derive(Debug, Clone, Serialize)]
pub struct ChatLog {
    messages: Vec<Message>,
}

impl ChatLog {
    /// Start a session seeded with the welcome message
    pub fn new(profile: &Profile) -> Self {
        Self {
            messages: vec![Message::new(Role::Assistant, welcome(profile))],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Most recent assistant reply
    pub fn last_reply(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|m| m.role == Role::Assistant)
            .map(|m| m.content.as_str())
    }

    /// Quick-topic selection: logs the label and answers without classification
    pub fn select(&mut self, profile: &Profile, topic: TopicKey) -> Resolution {
        self.exchange(topic.label(), render::render(profile, topic));
        Resolution::Selected(topic)
    }

    /// Free-text submission: classify, then answer or guide
    pub fn submit(&mut self, profile: &Profile, text: &str) -> Resolution {
        match classify::match_keyword(text) {
            Some((topic, keyword)) => {
                self.exchange(text, render::render(profile, topic));
                Resolution::Matched(topic, keyword)
            }
            None => {
                self.exchange(text, render::guidance(profile));
                Resolution::Unrecognized
            }
        }
    }

    fn exchange(&mut self, question: &str, answer: String) {
        self.messages.push(Message::new(Role::User, question));
        self.messages.push(Message::new(Role::Assistant, answer));
    }
}

/// Opening message of every session
pub fn welcome(profile: &Profile) -> String {
    format!(
        "Hello. I am an interactive portfolio bot.\n\n\
         I answer strictly from {} (deterministic; no LLM).\n\n\
         Topics you can ask:\n\
         - About\n- Academics\n- National Service\n\
         - Why ICT/AI\n- Learning\n- Projects\n- Skills\n\
         - Repos & Links\n- Contact\n\n\
         Tip: Use the numbered quick topics (1-9) after each reply.",
        profile.source_name()
    )
}
