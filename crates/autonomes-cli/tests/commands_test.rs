use autonomes_cli::commands::{Command, HELP};

#[test]
fn test_slash_commands() {
    assert_eq!(Command::parse("/models"), Command::Models);
    assert_eq!(Command::parse("/refresh"), Command::Refresh);
    assert_eq!(Command::parse("/status"), Command::Status);
    assert_eq!(Command::parse("/health"), Command::Health);
    assert_eq!(Command::parse("/help"), Command::Help);
    assert_eq!(Command::parse("/quit"), Command::Quit);
    assert_eq!(Command::parse("/EXIT"), Command::Quit);
}

#[test]
fn test_commands_with_arguments() {
    assert_eq!(
        Command::parse("/select  mistral:7b "),
        Command::Select("mistral:7b".to_string())
    );
    assert_eq!(
        Command::parse("/pull library/phi3:mini"),
        Command::Pull("library/phi3:mini".to_string())
    );
    assert_eq!(Command::parse("/use qwen2:7b"), Command::Select("qwen2:7b".to_string()));
}

#[test]
fn test_missing_argument_reports_usage() {
    assert_eq!(Command::parse("/select"), Command::Usage("/select <model>"));
    assert_eq!(Command::parse("/pull   "), Command::Usage("/pull <model>"));
}

#[test]
fn test_unknown_command() {
    assert_eq!(Command::parse("/frobnicate now"), Command::Unknown("frobnicate".to_string()));
}

#[test]
fn test_slash_inside_text_is_chat() {
    assert_eq!(
        Command::parse("what does a/b mean?"),
        Command::Chat("what does a/b mean?".to_string())
    );
}

#[test]
fn test_help_lists_every_command() {
    let usages: Vec<&str> = HELP.iter().map(|(usage, _)| *usage).collect();
    for command in ["/models", "/refresh", "/select <model>", "/pull <model>", "/status", "/health", "/quit"] {
        assert!(usages.contains(&command), "missing {}", command);
    }
}
