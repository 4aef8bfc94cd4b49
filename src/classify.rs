//! Free-text topic classification
//!
//! Maps user text to a topic by keyword substring matching. The table is
//! scanned in order and the first keyword found anywhere in the text wins,
//! so the order of both topics and keywords decides overlapping matches
//! (e.g. "email" contains "ai" and resolves to `why_ict_ai`).

use crate::topic::TopicKey;

/// Ordered (topic, keywords) table
const KEYWORDS: &[(TopicKey, &[&str])] = &[
    (
        TopicKey::About,
        &["about", "who are you", "introduce", "introduction", "bio", "purpose"],
    ),
    (
        TopicKey::Academics,
        &["academic", "academics", "grades", "o level", "olevel", "elr2b2", "math", "emath"],
    ),
    (
        TopicKey::Ns,
        &["ns", "national service", "army", "ord", "sergeant", "3sg"],
    ),
    (
        TopicKey::WhyIctAi,
        &["why", "ict", "ai", "computing", "infocomm", "motivation", "interest"],
    ),
    (TopicKey::Learning, &["learning", "course", "codecademy", "practice"]),
    (
        TopicKey::Projects,
        &["project", "projects", "build", "built", "portfolio bot", "chatbot", "jarvis", "trader"],
    ),
    (TopicKey::Skills, &["skill", "skills", "strengths", "tools"]),
    (
        TopicKey::ReposLinks,
        &["repo", "repos", "repository", "repositories", "github", "links", "demo", "streamlit"],
    ),
    (TopicKey::Contact, &["contact", "email", "reach", "message"]),
];

/// Classify free text into a topic, or `None` when nothing matches
pub fn classify(text: &str) -> Option<TopicKey> {
    match_keyword(text).map(|(topic, _)| topic)
}

/// Classify and also report which keyword decided the match
pub fn match_keyword(text: &str) -> Option<(TopicKey, &'static str)> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    for (topic, keywords) in KEYWORDS {
        for keyword in keywords.iter() {
            if normalized.contains(keyword) {
                return Some((*topic, *keyword));
            }
        }
    }

    None
}

/// Keywords registered for a topic, in match order
pub fn keywords_for(topic: TopicKey) -> &'static [&'static str] {
    KEYWORDS
        .iter()
        .find(|(t, _)| *t == topic)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_topic_in_quick_topic_order() {
        let order: Vec<TopicKey> = KEYWORDS.iter().map(|(t, _)| *t).collect();
        assert_eq!(order, TopicKey::ALL.to_vec());
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   \t\n"), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("PROJECTS"), Some(TopicKey::Projects));
        assert_eq!(classify("projects"), Some(TopicKey::Projects));
    }

    #[test]
    fn test_earlier_topic_wins() {
        // "why" (why_ict_ai) is listed before "course" (learning)
        assert_eq!(classify("why did I learn this course"), Some(TopicKey::WhyIctAi));
    }

    #[test]
    fn test_keyword_inside_word_matches() {
        assert_eq!(match_keyword("email"), Some((TopicKey::WhyIctAi, "ai")));
        assert_eq!(match_keyword("Tell me about yourself"), Some((TopicKey::About, "about")));
    }

    #[test]
    fn test_common_questions() {
        assert_eq!(classify("What are your grades?"), Some(TopicKey::Academics));
        assert_eq!(classify("national service"), Some(TopicKey::Ns));
        assert_eq!(classify("show me your github"), Some(TopicKey::ReposLinks));
        assert_eq!(classify("skills"), Some(TopicKey::Skills));
        assert_eq!(classify("learning"), Some(TopicKey::Learning));
        assert_eq!(classify("contact"), Some(TopicKey::Contact));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("hello there"), None);
    }

    #[test]
    fn test_keywords_for() {
        assert_eq!(keywords_for(TopicKey::Skills), &["skill", "skills", "strengths", "tools"]);
    }
}
