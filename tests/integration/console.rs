//! Console flows: a scripted editor feeding the REPL.

use parley::foundation::{Result, Value};
use parley::runtime::{LineEditor, Outcome, ReadResult, Repl, Session};

struct ScriptEditor {
    lines: std::vec::IntoIter<String>,
}

impl ScriptEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(|line| (*line).to_string())
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for ScriptEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn console() -> Repl<ScriptEditor> {
    Repl::with_editor(ScriptEditor::new(&[]), Session::new().unwrap()).without_banner()
}

fn output(repl: &mut Repl<ScriptEditor>, input: &str) -> Vec<String> {
    match repl.eval(input).unwrap() {
        Outcome::Output(lines) => lines,
        Outcome::Quit => panic!("unexpected quit on {input:?}"),
    }
}

#[test]
fn demo_commands_through_console() {
    let mut repl = console();
    assert_eq!(output(&mut repl, "hello"), vec!["Hello!"]);
    assert_eq!(output(&mut repl, "go north"), vec!["Went", "north"]);
    assert_eq!(output(&mut repl, "zoop1 suffix"), vec!["Zoop!"]);
    assert_eq!(output(&mut repl, "say  it   twice\r\n"), vec!["it twice"]);
    assert!(output(&mut repl, "xyzzy").is_empty());
}

#[test]
fn console_env_reaches_handlers() {
    let mut repl = console();
    assert_eq!(output(&mut repl, "env mood"), vec!["mood is not set"]);
    output(&mut repl, ":set mood cheerful");
    assert_eq!(output(&mut repl, "env mood"), vec!["mood = cheerful"]);
}

#[test]
fn validator_message_reaches_console() {
    let mut repl = console();
    assert_eq!(output(&mut repl, "go2 sideways"), vec!["You can't go sideways."]);
    assert_eq!(output(&mut repl, "go2 an e"), vec!["Went", "east"]);
}

#[test]
fn scripted_run_stops_at_quit() {
    let editor = ScriptEditor::new(&[":set a 1", ":quit", ":set b 2"]);
    let mut repl = Repl::with_editor(editor, Session::new().unwrap()).without_banner();
    repl.run().unwrap();

    let env = repl.session().env();
    assert_eq!(env.get("a"), Some(&Value::from("1")));
    assert!(env.get("b").is_none());
}

#[test]
fn batch_file() {
    let path = std::env::temp_dir().join("parley_integration_batch.txt");
    std::fs::write(&path, ":set test 1\nenv test\nadd 20 22\n").unwrap();

    let mut repl = console();
    let lines = repl.eval_file(&path).unwrap();
    assert_eq!(lines, vec!["test = 1", "42"]);

    let _ = std::fs::remove_file(&path);
}
