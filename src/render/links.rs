//! Repos & Links topic

use crate::profile::Profile;

pub fn repos_and_links(profile: &Profile) -> String {
    let evidence = profile.section("evidence_and_links");
    let links = profile.section("links");

    let github = evidence.get("github").or(links.get("github")).text();
    let streamlit_demo = evidence.get("streamlit_demo").or(links.get("streamlit_demo")).text();
    let project_repos = evidence.get("project_repos").items();

    let mut parts = Vec::new();
    if !github.is_empty() {
        parts.push(format!("GitHub: {}", github));
    }
    if !streamlit_demo.is_empty() {
        parts.push(format!("Streamlit demo: {}", streamlit_demo));
    }

    if !project_repos.is_empty() {
        parts.push("Projects:".to_string());

        let mut lines = Vec::new();
        for item in project_repos.into_iter().filter(|item| item.is_object()) {
            let project = item.get("project").text_or("Project");
            let repo = item.get("repo").text();
            let demo = item.get("demo").text();

            if repo.is_empty() {
                lines.push(format!("- {}", project));
            } else {
                lines.push(format!("- {}\n  - Repo: {}", project, repo));
            }
            if !demo.is_empty() {
                lines.push(format!("  - Demo: {}", demo));
            }
        }
        if !lines.is_empty() {
            parts.push(lines.join("\n"));
        }
    }

    if parts.is_empty() {
        return "No links added yet.".to_string();
    }
    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn profile(doc: Value) -> Profile {
        Profile::from_value(doc, "profile.json").unwrap()
    }

    #[test]
    fn test_evidence_preferred_over_links() {
        let p = profile(json!({
            "evidence_and_links": {"github": "https://github.com/primary"},
            "links": {"github": "https://github.com/fallback", "streamlit_demo": "https://demo.example.com"}
        }));
        assert_eq!(
            repos_and_links(&p),
            "GitHub: https://github.com/primary\n\nStreamlit demo: https://demo.example.com"
        );
    }

    #[test]
    fn test_project_repo_without_demo() {
        let p = profile(json!({
            "evidence_and_links": {
                "project_repos": [{"project": "Portfolio Bot", "repo": "https://github.com/me/bot"}]
            }
        }));
        let text = repos_and_links(&p);
        assert_eq!(text, "Projects:\n\n- Portfolio Bot\n  - Repo: https://github.com/me/bot");
        assert!(!text.contains("Demo:"));
    }

    #[test]
    fn test_project_repos_mixed_entries() {
        let p = profile(json!({
            "evidence_and_links": {
                "project_repos": [
                    {"project": "Jarvis", "demo": "https://jarvis.example.com"},
                    "not an object",
                    {"repo": "https://github.com/me/trader", "demo": "https://trader.example.com"}
                ]
            }
        }));
        assert_eq!(
            repos_and_links(&p),
            "Projects:\n\n- Jarvis\n  - Demo: https://jarvis.example.com\n\
             - Project\n  - Repo: https://github.com/me/trader\n  - Demo: https://trader.example.com"
        );
    }

    #[test]
    fn test_no_links() {
        let p = profile(json!({"evidence_and_links": {"project_repos": []}, "links": "none"}));
        assert_eq!(repos_and_links(&p), "No links added yet.");
    }
}
