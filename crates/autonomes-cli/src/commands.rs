/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Anything that is not a slash command is a chat turn
    Chat(String),
    Models,
    Refresh,
    Select(String),
    Pull(String),
    Status,
    Health,
    Help,
    Quit,
    Empty,
    /// A known command missing its argument; holds the usage line
    Usage(&'static str),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Empty;
        }

        let Some(rest) = line.strip_prefix('/') else {
            return Command::Chat(line.to_string());
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name.to_lowercase().as_str() {
            "models" => Command::Models,
            "refresh" => Command::Refresh,
            "select" | "use" if arg.is_empty() => Command::Usage("/select <model>"),
            "select" | "use" => Command::Select(arg.to_string()),
            "pull" if arg.is_empty() => Command::Usage("/pull <model>"),
            "pull" => Command::Pull(arg.to_string()),
            "status" => Command::Status,
            "health" => Command::Health,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(name.to_string()),
        }
    }
}

pub const HELP: &[(&str, &str)] = &[
    ("<text>", "Send a chat message to the selected model"),
    ("/models", "Show available models"),
    ("/refresh", "Reload the model list"),
    ("/select <model>", "Switch the active model"),
    ("/pull <model>", "Ask the server to download a model"),
    ("/status", "Show system health and details"),
    ("/health", "Refresh system health and details"),
    ("/help", "Show this help"),
    ("/quit", "Leave the dashboard"),
];
