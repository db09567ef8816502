// src/services/chatbot.rs
use super::profile::Profile;

/// What a message asks about, as far as the mock replies care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Name,
    Projects,
    Skills,
    General,
}

/// First keyword hit wins, in declaration order.
pub fn detect_topic(msg: &str) -> Topic {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("name") {
        Topic::Name
    } else if msg_lower.contains("project") {
        Topic::Projects
    } else if msg_lower.contains("skill") {
        Topic::Skills
    } else {
        Topic::General
    }
}

/// Reply used whenever the provider is not (or cannot be) asked.
pub fn mock_reply(profile: &Profile, user_msg: &str) -> String {
    use Topic::*;

    match detect_topic(user_msg) {
        Name => format!("You're chatting with {}.", profile.name),

        Projects => format!(
            "Recent projects: {}. Want details on one?",
            profile.projects.join(", ")
        ),

        Skills => format!(
            "Core skills: {}. I also enjoy building AI features.",
            profile.skills.join(", ")
        ),

        General => format!(
            "I'm a demo assistant for {}, a {}. Ask about skills, projects, or the portfolio.",
            profile.name, profile.role
        ),
    }
}
