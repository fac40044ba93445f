//! The interactive console loop.
//!
//! Lines starting with `:` are console commands; everything else is handed
//! to the parser and each response line is printed.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use parley_foundation::{Error, Result};
use parley_parser::Pattern;

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// Console commands, offered for completion next to command keywords.
pub const META_COMMANDS: [&str; 6] = [":help", ":env", ":set", ":save", ":load", ":quit"];

/// What evaluating one line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lines to print, possibly none.
    Output(Vec<String>),
    /// The user asked to leave.
    Quit,
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    editor: E,
    session: Session,
    show_banner: bool,
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a REPL with the rustyline editor and a demo session.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the session fails to initialize.
    pub fn new() -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, Session::new()?))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a REPL with the given editor and session.
    pub fn with_editor(editor: E, session: Session) -> Self {
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the session mutably.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL until EOF or `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }
        self.refresh_keywords();

        while self.read_eval_print()? {}

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        if input.trim().is_empty() {
            return Ok(true);
        }
        self.editor.add_history(&input);

        match self.eval(&input) {
            Ok(Outcome::Output(lines)) => {
                for line in lines {
                    println!("{line}");
                }
                Ok(true)
            }
            Ok(Outcome::Quit) => Ok(false),
            Err(e) => {
                print_error(&e);
                Ok(true)
            }
        }
    }

    /// Evaluates one line of input.
    ///
    /// # Errors
    ///
    /// Returns an error if a console command fails, e.g. a snapshot cannot
    /// be written. Input that matches no command is not an error.
    pub fn eval(&mut self, input: &str) -> Result<Outcome> {
        let trimmed = input.trim();
        let Some(meta) = trimmed.strip_prefix(':') else {
            return Ok(Outcome::Output(self.session.submit(input).into_lines()));
        };

        let (name, rest) = meta.split_once(' ').unwrap_or((meta, ""));
        let rest = rest.trim();
        match name {
            "help" | "h" => Ok(Outcome::Output(self.help())),
            "env" => Ok(Outcome::Output(self.env_lines())),
            "set" => {
                let (key, value) = rest
                    .split_once(' ')
                    .ok_or_else(|| Error::internal("usage: :set <key> <value>"))?;
                self.session.set_env(key, value.trim());
                Ok(Outcome::Output(Vec::new()))
            }
            "save" => {
                let path = required_path(rest, "save")?;
                self.session.save_env(path)?;
                Ok(Outcome::Output(vec![format!("saved env to {path}")]))
            }
            "load" => {
                let path = required_path(rest, "load")?;
                self.session.load_env(path)?;
                Ok(Outcome::Output(vec![format!("loaded env from {path}")]))
            }
            "quit" | "q" => Ok(Outcome::Quit),
            other => Err(Error::internal(format!(
                "unknown console command ':{other}' (try :help)"
            ))),
        }
    }

    /// Evaluates a file line by line and collects the output.
    ///
    /// Stops early at `:quit`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a console command in it
    /// fails.
    pub fn eval_file(&mut self, path: &Path) -> Result<Vec<String>> {
        let source = fs::read_to_string(path)
            .map_err(|e| Error::io(format!("failed to read {}: {e}", path.display())))?;

        let mut output = Vec::new();
        for line in source.lines().filter(|line| !line.trim().is_empty()) {
            match self.eval(line)? {
                Outcome::Output(lines) => output.extend(lines),
                Outcome::Quit => break,
            }
        }
        Ok(output)
    }

    fn refresh_keywords(&mut self) {
        let mut keywords = self.session.keywords();
        keywords.extend(META_COMMANDS.iter().map(ToString::to_string));
        self.editor.set_keywords(keywords);
    }

    fn help(&self) -> Vec<String> {
        let mut lines = vec![
            "Console commands:".to_string(),
            "  :help               Show this help".to_string(),
            "  :env                List the base env".to_string(),
            "  :set <key> <value>  Set a base env entry".to_string(),
            "  :save <path>        Save the base env".to_string(),
            "  :load <path>        Load the base env".to_string(),
            "  :quit               Leave the console".to_string(),
            "Commands:".to_string(),
        ];
        for command in self.session.parser().commands() {
            let syntax: Vec<&str> = command.patterns().iter().map(Pattern::source).collect();
            lines.push(format!("  {:<8} {}", command.name(), syntax.join(" | ")));
        }
        lines
    }

    fn env_lines(&self) -> Vec<String> {
        let env = self.session.env();
        if env.is_empty() {
            return vec!["(env is empty)".to_string()];
        }
        env.sorted_keys()
            .into_iter()
            .filter_map(|key| env.get(key).map(|value| format!("{key} = {value}")))
            .collect()
    }
}

fn required_path<'a>(rest: &'a str, command: &str) -> Result<&'a str> {
    if rest.is_empty() {
        Err(Error::internal(format!("usage: :{command} <path>")))
    } else {
        Ok(rest)
    }
}

fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

fn print_banner() {
    println!("\x1b[1;36mParley\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Type a command, :help for help, or Ctrl+D to exit.\n");
    let _ = io::stdout().flush();
}
