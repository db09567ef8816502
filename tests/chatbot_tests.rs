use portfolio_chat::services::chatbot::{Topic, detect_topic, mock_reply};
use portfolio_chat::services::profile::Profile;

#[test]
fn test_detect_topic() {
    assert_eq!(detect_topic("What is your NAME?"), Topic::Name);
    assert_eq!(detect_topic("Show me a project"), Topic::Projects);
    assert_eq!(detect_topic("Any skills?"), Topic::Skills);
    assert_eq!(detect_topic("random text"), Topic::General);
}

#[test]
fn test_name_wins_over_everything() {
    let profile = Profile::default();
    let reply = mock_reply(&profile, "what is your name");
    assert_eq!(reply, "You're chatting with Kachi Nwadiogu.");
    assert!(!reply.contains("demo assistant"));

    assert_eq!(
        detect_topic("name your favourite project and skill"),
        Topic::Name
    );
}

#[test]
fn test_project_checked_before_skill() {
    let profile = Profile::default();
    let reply = mock_reply(&profile, "tell me about your skills and projects");
    assert_eq!(
        reply,
        "Recent projects: AI Portfolio Website, Employee Management System, SpaceX API Viewer. Want details on one?"
    );
}

#[test]
fn test_skill_reply_lists_skills() {
    let profile = Profile::default();
    let reply = mock_reply(&profile, "What SKILLS do you have?");
    assert_eq!(
        reply,
        "Core skills: HTML, CSS, JavaScript, Node/Express, AI APIs. I also enjoy building AI features."
    );
}

#[test]
fn test_generic_reply() {
    let profile = Profile::default();
    let reply = mock_reply(&profile, "hello");
    assert!(reply.contains("Kachi Nwadiogu"));
    assert!(reply.contains("Information Technology student"));
    assert!(reply.contains("skills, projects, or the portfolio"));
}

#[test]
fn test_custom_profile() {
    let profile = Profile {
        name: "Ada".to_string(),
        role: "engineer".to_string(),
        skills: vec!["Rust".to_string()],
        projects: vec!["Engine".to_string(), "Notes".to_string()],
    };
    assert_eq!(mock_reply(&profile, "name?"), "You're chatting with Ada.");
    assert!(mock_reply(&profile, "projects").contains("Engine, Notes"));
    assert!(mock_reply(&profile, "skill").starts_with("Core skills: Rust."));
}

#[test]
fn test_profile_load_from_file() {
    let path = std::env::temp_dir().join(format!("profile-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"name":"Ada","role":"engineer","skills":["Rust"],"projects":["Engine"]}"#,
    )
    .unwrap();

    let profile = Profile::load_or_default(Some(path.as_path())).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(profile.name, "Ada");
    assert_eq!(profile.projects, vec!["Engine".to_string()]);

    assert_eq!(Profile::load_or_default(None).unwrap(), Profile::default());
    assert!(Profile::load(std::path::Path::new("/definitely/not/here.json")).is_err());
}
