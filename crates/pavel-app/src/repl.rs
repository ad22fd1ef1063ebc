//! Interactive chat loop.

use std::path::PathBuf;

use pavel_ai::{ModelTier, RequestAssembler, Session};
use pavel_common::PavelError;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::{debug, info};

use crate::commands::{self, Command, Input, HELP};
use crate::picker::FilePicker;
use crate::render;

/// Terminal I/O failures keep their `io::Error`; anything else is opaque.
fn input_error(e: ReadlineError) -> PavelError {
    match e {
        ReadlineError::Io(e) => PavelError::Io(e),
        other => PavelError::Other(format!("input error: {other}")),
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Everything one interactive session needs; dropped when the user quits.
pub struct Repl {
    session: Session,
    assembler: RequestAssembler,
    picker: FilePicker,
    tier: ModelTier,
    /// Held in memory only.
    api_key: String,
}

impl Repl {
    pub fn new(session: Session, assembler: RequestAssembler, tier: ModelTier) -> Self {
        Self {
            session,
            assembler,
            picker: FilePicker::new(),
            tier,
            api_key: String::new(),
        }
    }

    pub fn attach(&mut self, paths: &[PathBuf]) {
        for path in paths {
            match self.picker.select(path) {
                Ok(attachment) => println!("attached {}", attachment.name()),
                Err(e) => render::warn(e),
            }
        }
    }

    /// Prompt for the API key without echoing it.
    fn read_api_key(&mut self) {
        match rpassword::prompt_password("Enter Gemini API Key (blank to skip): ") {
            Ok(key) => {
                self.api_key = key.trim().to_string();
                debug!(present = !self.api_key.is_empty(), "API key updated");
            }
            Err(e) => render::warn(format!("could not read API key: {e}")),
        }
    }

    pub async fn run(&mut self) -> Result<(), PavelError> {
        let mut rl = DefaultEditor::new().map_err(input_error)?;

        render::banner(self.tier);
        self.read_api_key();
        self.session.initialize();
        render::print_transcript(&self.session);

        loop {
            match rl.readline(">> ") {
                Ok(line) => match commands::parse(&line) {
                    Input::Empty => continue,
                    Input::Prompt(prompt) => {
                        let _ = rl.add_history_entry(line.as_str());
                        self.submit(&prompt).await;
                    }
                    Input::Command(command) => {
                        if let Flow::Quit = self.execute(command) {
                            break;
                        }
                    }
                },
                Err(ReadlineError::Interrupted) => {
                    render::warn("CTRL-C detected. Type /quit to exit.");
                }
                Err(ReadlineError::Eof) => break,
                Err(e) => return Err(input_error(e)),
            }
        }

        info!(session = %self.session.id(), turns = self.session.len(), "session ended");
        Ok(())
    }

    async fn submit(&mut self, prompt: &str) {
        let spinner = render::spinner(self.picker.len());
        let exchange = self
            .session
            .submit(
                &self.assembler,
                prompt,
                self.picker.attachments(),
                &self.api_key,
                self.tier,
            )
            .await;
        spinner.finish_and_clear();
        render::print_exchange(&exchange, &self.session);
    }

    fn execute(&mut self, command: Command) -> Flow {
        match command {
            Command::Key => self.read_api_key(),
            Command::Model(None) => println!("{} ({})", self.tier.label(), self.tier.identifier()),
            Command::Model(Some(tier)) => {
                self.tier = tier;
                println!("switched to {}", tier.label());
            }
            Command::Attach(paths) => self.attach(&paths),
            Command::Detach => {
                self.picker.clear();
                println!("selection cleared");
            }
            Command::Files => render::print_files(&self.picker),
            Command::History => render::print_transcript(&self.session),
            Command::Usage => render::print_usage(self.session.tracker()),
            Command::Reset => {
                self.session.reset();
                self.session.initialize();
                println!("new session {}", self.session.id());
                render::print_transcript(&self.session);
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => return Flow::Quit,
            Command::Invalid(message) => render::warn(message),
            Command::Unknown(name) => {
                render::warn(format!("unknown command {name}"));
                println!("{HELP}");
            }
        }
        Flow::Continue
    }
}
