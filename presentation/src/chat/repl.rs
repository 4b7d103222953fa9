//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::ConsoleFormatter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use solver_application::RespondUseCase;
use solver_domain::{OutputFormat, ProblemQuery};
use std::path::PathBuf;
use std::sync::Arc;

/// What a slash command asks the loop to do
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Quit,
    Help,
    Solve(&'a str),
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let (name, rest) = line.split_once(' ').unwrap_or((line, ""));
    match name {
        "/quit" | "/exit" | "/q" => Command::Quit,
        "/help" | "/h" | "/?" => Command::Help,
        "/solve" => Command::Solve(rest.trim()),
        _ => Command::Unknown(line),
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    responder: Arc<RespondUseCase>,
    format: OutputFormat,
    history_file: Option<PathBuf>,
}

impl ChatRepl {
    pub fn new(responder: Arc<RespondUseCase>) -> Self {
        Self {
            responder,
            format: OutputFormat::Reply,
            history_file: Self::default_history_file(),
        }
    }

    /// Set the output format for replies
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the history file location
    pub fn with_history_file(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.history_file = path;
        }
        self
    }

    fn default_history_file() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("chat-solver").join("history.txt"))
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_file {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    self.process_message(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_file {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│            chat-solver - Chat Mode          │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Mode: {}", self.responder.config().mode);
        println!();
        Self::print_help();
    }

    fn print_help() {
        println!("Commands:");
        println!("  /help, /h, /?     - Show this help");
        println!("  /solve <problem>  - Run the problem solver directly");
        println!("  /quit, /exit, /q  - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(&self, line: &str) -> bool {
        match parse_command(line) {
            Command::Quit => {
                println!("Bye!");
                true
            }
            Command::Help => {
                println!();
                Self::print_help();
                false
            }
            Command::Solve("") => {
                println!("Usage: /solve <problem>");
                false
            }
            Command::Solve(problem) => {
                let solution = self.responder.solver().solve(&ProblemQuery::new(problem));
                println!();
                println!("{}", ConsoleFormatter::solution(self.format, problem, &solution));
                println!();
                false
            }
            Command::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_message(&self, message: &str) {
        let reply = self.responder.respond(message).await;
        println!();
        println!("{}", ConsoleFormatter::reply(self.format, message, &reply));
        println!();
    }
}
