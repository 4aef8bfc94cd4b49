//! Topic keys
//!
//! The nine fixed categories a question can be routed to, in quick-topic order.

use serde::{Deserialize, Serialize};

/// A topic the bot can answer about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicKey {
    About,
    Academics,
    Ns,
    WhyIctAi,
    Learning,
    Projects,
    Skills,
    ReposLinks,
    Contact,
}

impl TopicKey {
    /// All topics, in the order the quick-topic buttons are shown
    pub const ALL: [TopicKey; 9] = [
        TopicKey::About,
        TopicKey::Academics,
        TopicKey::Ns,
        TopicKey::WhyIctAi,
        TopicKey::Learning,
        TopicKey::Projects,
        TopicKey::Skills,
        TopicKey::ReposLinks,
        TopicKey::Contact,
    ];

    /// Wire name used in profile-facing APIs and `/<key>` chat commands
    pub fn as_str(&self) -> &'static str {
        match self {
            TopicKey::About => "about",
            TopicKey::Academics => "academics",
            TopicKey::Ns => "ns",
            TopicKey::WhyIctAi => "why_ict_ai",
            TopicKey::Learning => "learning",
            TopicKey::Projects => "projects",
            TopicKey::Skills => "skills",
            TopicKey::ReposLinks => "repos_links",
            TopicKey::Contact => "contact",
        }
    }

    /// Button label shown for the quick topic
    pub fn label(&self) -> &'static str {
        match self {
            TopicKey::About => "About",
            TopicKey::Academics => "Academics",
            TopicKey::Ns => "National Service",
            TopicKey::WhyIctAi => "Why ICT / AI",
            TopicKey::Learning => "Learning",
            TopicKey::Projects => "Projects",
            TopicKey::Skills => "Skills",
            TopicKey::ReposLinks => "Repos & Links",
            TopicKey::Contact => "Contact",
        }
    }

    /// Parse a wire name. Matching is exact apart from surrounding whitespace and case.
    pub fn from_key(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|topic| topic.as_str() == key)
    }

    /// Quick topic by its 1-based button number
    pub fn from_number(n: usize) -> Option<Self> {
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

impl std::fmt::Display for TopicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
