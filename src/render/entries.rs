//! Topics rendered as a list of profile entries

use super::bullets;
use crate::profile::Node;

/// Learning entries. Repo and demo links are left to the Repos & Links topic.
pub fn learning(items: Node<'_>) -> String {
    let blocks: Vec<String> = items
        .items()
        .into_iter()
        .filter(|item| item.is_object())
        .map(|item| {
            let mut block = format!(
                "**{}** ({}) — {}",
                item.get("title").text_or("Untitled"),
                item.get("provider").text_or("Unknown provider"),
                item.get("status").text_or("Unknown status"),
            );
            let learned = item.get("what_i_learned").lines();
            if !learned.is_empty() {
                block.push_str("\nWhat I learned:\n");
                block.push_str(&bullets(&learned));
            }
            block
        })
        .collect();

    if blocks.is_empty() {
        return "I haven't added learning items yet.".to_string();
    }
    blocks.join("\n\n")
}

/// Project entries, each closed by a horizontal rule
pub fn projects(items: Node<'_>) -> String {
    let mut out: Vec<String> = Vec::new();

    for project in items.items().into_iter().filter(|item| item.is_object()) {
        out.push(format!("**{}**", project.get("name").text_or("Untitled project")));

        let status = project.get("status").text();
        if !status.is_empty() {
            out.push(format!("Status: {}", status));
        }
        let summary = project.get("summary").text();
        if !summary.is_empty() {
            out.push(summary);
        }

        for (heading, field) in [("Tech", "tech"), ("Highlights", "highlights")] {
            let lines = project.get(field).lines();
            if !lines.is_empty() {
                out.push(String::new());
                out.push(format!("**{}**", heading));
                out.push(bullets(&lines));
            }
        }

        let repo = project.get("repo").text();
        if !repo.is_empty() {
            out.push(String::new());
            out.push(format!("Repo: {}", repo));
        }
        let demo = project.get("demo").text();
        if !demo.is_empty() {
            out.push(format!("Demo: {}", demo));
        }

        out.push("\n---\n".to_string());
    }

    let text = out.join("\n").trim().to_string();
    if text.is_empty() {
        "I haven't added projects yet.".to_string()
    } else {
        text
    }
}
