//! Topics made of headed sub-sections of a single profile section

use super::{Sections, bullets};
use crate::profile::{Node, Profile};

pub fn about(profile: &Profile) -> String {
    let about = profile.section("about");
    let mut out = Sections::new();

    out.push_list("Purpose of this portfolio", &about.get("purpose_of_portfolio").lines());
    out.push_list("Introduction", &about.get("short_bio").lines());
    out.push("Values", labelled(about.get("values"), "value", "evidence", "Value"));
    out.push(
        "Growth areas",
        labelled(about.get("growth_areas"), "area", "mitigation", "Area"),
    );

    out.finish("I haven't filled in my About section yet.")
}

/// "- **label**: detail" per item, detail omitted when blank
fn labelled(items: Node<'_>, label_key: &str, detail_key: &str, default_label: &str) -> String {
    items
        .items()
        .into_iter()
        .map(|item| {
            let label = item.get(label_key).text_or(default_label);
            let detail = item.get(detail_key).text();
            if detail.is_empty() {
                format!("- **{}**", label)
            } else {
                format!("- **{}**: {}", label, detail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn academics(profile: &Profile) -> String {
    let academics = profile.section("academics");
    let mut out = Sections::new();

    out.push_list("Context", &academics.get("context").lines());

    let snapshot = academics
        .get("elr2b2_snapshot")
        .pairs()
        .into_iter()
        .map(|(subject, grade)| format!("- {}: {}", subject, grade))
        .collect::<Vec<_>>()
        .join("\n");
    out.push("Snapshot", snapshot);

    let math = academics.get("math_statement");
    let mut statement = Vec::new();
    let what_happened = math.get("what_happened").text();
    if !what_happened.is_empty() {
        statement.push(format!("- What happened: {}", what_happened));
    }
    let view = math.get("how_i_view_it").text();
    if !view.is_empty() {
        statement.push(format!("- How I view it: {}", view));
    }
    let doing = math.get("what_i_am_doing_now").lines();
    if !doing.is_empty() {
        statement.push(format!("**What I'm doing now**\n{}", bullets(&doing)));
    }
    out.push("Math (statement)", statement.join("\n"));

    out.finish("I haven't added academics details yet.")
}

pub fn national_service(profile: &Profile) -> String {
    let ns = profile.section("ns");
    let mut out = Sections::new();

    let mut service = Vec::new();
    let status = ns.get("status").text();
    if !status.is_empty() {
        service.push(format!("Status: {}", status));
    }
    let ord_date = ns.get("ord_date").text();
    if !ord_date.is_empty() {
        service.push(format!("ORD: {}", ord_date));
    }
    if !service.is_empty() {
        out.push("National Service", format!("- {}", service.join(" | ")));
    }

    let rank = ns.get("rank").text();
    if !rank.is_empty() {
        out.push("Rank", format!("- {}", rank));
    }

    out.push_list("Highlights", &ns.get("highlights").lines());

    out.finish("I haven't added my NS details yet.")
}

pub fn why_ict_ai(profile: &Profile) -> String {
    let why = profile.section("why_ict_ai");
    let mut out = Sections::new();

    out.push_list("Why ICT", &why.get("why_ict").lines());
    out.push_list("Why AI", &why.get("why_ai").lines());
    out.push_list("Career interests", &why.get("career_interests").lines());
    out.push_list("Teamwork", &why.get("teamwork").lines());

    out.finish("I haven't added my Why ICT/AI section yet.")
}

pub fn skills(profile: &Profile) -> String {
    let skills = profile.section("skills");
    let mut out = Sections::new();

    out.push_list("Technical skills", &skills.get("technical").lines());
    out.push_list("Professional skills", &skills.get("professional").lines());

    out.finish("I haven't added skills yet.")
}

/// Contact details; all-or-nothing on whether an email can be resolved
pub fn contact(profile: &Profile) -> String {
    let contact = profile.section("contact");
    let email = contact
        .get("email")
        .or(profile.section("meta").get("contact_email"))
        .text();

    if email.is_empty() {
        return "I haven't added contact details yet.".to_string();
    }

    let mut lines = vec![
        format!("Preferred contact: {}", contact.get("preferred").text_or("Email")),
        format!("Email: {}", email),
    ];
    let notes = contact.get("notes").text();
    if !notes.is_empty() {
        lines.push(format!("Notes: {}", notes));
    }
    lines.join("\n")
}
