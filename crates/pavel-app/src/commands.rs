//! Parsing of REPL input lines into prompts and slash commands.

use std::path::PathBuf;

use pavel_common::ModelTier;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Prompt(String),
    Command(Command),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Key,
    /// `None` shows the current tier.
    Model(Option<ModelTier>),
    Attach(Vec<PathBuf>),
    Detach,
    Files,
    History,
    Usage,
    Reset,
    Help,
    Quit,
    /// A recognised command with bad arguments; carries the message to show.
    Invalid(String),
    Unknown(String),
}

pub const HELP: &str = "\
Commands:
  /key                  enter the Gemini API key (masked, kept in memory only)
  /model [flash|pro]    show or switch the model tier
  /attach <path>...     add PDF/PNG/JPG files to send with every prompt
  /detach               clear the selected files
  /files                list the selected files
  /history              show the transcript
  /usage                show token usage for this session
  /reset                start a new session
  /help                 show this help
  /quit                 exit (also /exit or Ctrl-D)
Anything else is sent to Pavel as a prompt.";

/// Classify one line of input. Lines not starting with `/` are prompts and
/// keep their original whitespace.
pub fn parse(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Input::Prompt(line.to_string());
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or("").to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match name.as_str() {
        "key" => Command::Key,
        "model" => match args.as_slice() {
            [] => Command::Model(None),
            [tier] => match tier.parse::<ModelTier>() {
                Ok(tier) => Command::Model(Some(tier)),
                Err(e) => Command::Invalid(e.to_string()),
            },
            _ => Command::Invalid("usage: /model [flash|pro]".into()),
        },
        "attach" if args.is_empty() => Command::Invalid("usage: /attach <path>...".into()),
        "attach" => Command::Attach(args.iter().map(PathBuf::from).collect()),
        "detach" => Command::Detach,
        "files" => Command::Files,
        "history" => Command::History,
        "usage" => Command::Usage,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(format!("/{name}")),
    };
    Input::Command(command)
}
