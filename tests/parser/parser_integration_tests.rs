//! Full parse and dispatch tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use parley_foundation::{Env, ErrorKind, Value};
use parley_parser::{Command, Evaluation, Mode, Parser, Pattern, Validation};

fn parser() -> Parser {
    Parser::new().with_standard_validators()
}

async fn lines(parser: &Parser, input: &str) -> Vec<String> {
    parser.parse(input).await.into_lines()
}

#[tokio::test]
async fn hello() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("hello")
                .syntax(["hello"])
                .handler(|_| async { "Hello!" }),
        )
        .unwrap();

    assert_eq!(lines(&parser, "hello").await, vec!["Hello!"]);
    assert_eq!(lines(&parser, "HELLO").await, vec!["Hello!"]);
}

#[tokio::test]
async fn go_direction() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("go")
                .syntax(["go <string:direction>"])
                .handler(|invocation| async move {
                    let direction = invocation.args.get_str("direction").unwrap_or_default();
                    vec!["Went".to_string(), direction.to_string()]
                }),
        )
        .unwrap();

    assert_eq!(lines(&parser, "go north").await, vec!["Went", "north"]);
}

#[tokio::test]
async fn suffix_expansion() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("zoop")
                .syntax_with_suffix(["zoop1", "zoop2"], "suffix")
                .handler(|_| async { "zooped" }),
        )
        .unwrap();

    let sources: Vec<&str> = parser
        .command("zoop")
        .unwrap()
        .patterns()
        .iter()
        .map(Pattern::source)
        .collect();
    assert_eq!(sources, vec!["zoop1 suffix", "zoop2 suffix"]);
    assert_eq!(lines(&parser, "zoop1 suffix").await, vec!["zooped"]);
    assert_eq!(lines(&parser, "zoop2 suffix").await, vec!["zooped"]);
    assert!(lines(&parser, "zoop1").await.is_empty());
}

#[tokio::test]
async fn scoped_env_overlays_base_concurrently() {
    let mut parser = parser().with_env(Env::new().with("test", 1));
    parser
        .register(
            Command::builder("hello2")
                .syntax(["hello2"])
                .handler(|invocation| async move {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    invocation.env.get("test").cloned().unwrap_or(Value::Nil)
                }),
        )
        .unwrap();

    let scoped = Env::new().with("test", 2);
    let (with_scope, without_scope) =
        tokio::join!(parser.parse_scoped("hello2", &scoped), parser.parse("hello2"));

    assert_eq!(with_scope.into_lines(), vec!["2"]);
    assert_eq!(without_scope.into_lines(), vec!["1"]);
    assert_eq!(parser.env().get("test"), Some(&Value::Int(1)));
}

#[tokio::test]
async fn shared_parser_across_tasks() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("echo")
                .syntax(["echo <int:n>"])
                .handler(|invocation| async move {
                    invocation.args.get_int("n").map(Value::Int).unwrap_or(Value::Nil)
                }),
        )
        .unwrap();
    let parser = Arc::new(parser);

    let tasks: Vec<_> = (0..8)
        .map(|n| {
            let parser = Arc::clone(&parser);
            tokio::spawn(async move { parser.parse(&format!("echo {n}")).await })
        })
        .collect();

    for (n, task) in tasks.into_iter().enumerate() {
        assert_eq!(task.await.unwrap().into_lines(), vec![n.to_string()]);
    }
}

#[tokio::test]
async fn validator_message_short_circuits() {
    let later = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&later);

    let mut parser = parser();
    parser.add_validator("closed", |_, _| Validation::reject_with("It's locked."));
    parser.add_validator("counted", move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Validation::accept()
    });
    parser
        .register(
            Command::builder("open")
                .syntax(["open <closed:door> <counted:with>"])
                .handler(|_| async { "opened" }),
        )
        .unwrap();

    assert_eq!(lines(&parser, "open door key").await, vec!["It's locked."]);
    assert_eq!(later.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn silent_rejection_falls_through_to_next_pattern() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("wait")
                .syntax(["wait <int:turns>", "wait <string:reason>"])
                .handler(|invocation| async move {
                    match invocation.args.get_int("turns") {
                        Some(turns) => format!("waited {turns}"),
                        None => format!(
                            "waited for {}",
                            invocation.args.get_str("reason").unwrap_or_default()
                        ),
                    }
                }),
        )
        .unwrap();

    assert_eq!(lines(&parser, "wait 3").await, vec!["waited 3"]);
    assert_eq!(lines(&parser, "wait dawn").await, vec!["waited for dawn"]);
}

#[tokio::test]
async fn first_registered_command_wins() {
    let mut parser = parser();
    for name in ["first", "second"] {
        parser
            .register(
                Command::builder(name)
                    .syntax(["look"])
                    .handler(move |_| async move { name }),
            )
            .unwrap();
    }

    assert_eq!(lines(&parser, "look").await, vec!["first"]);
}

#[tokio::test]
async fn empty_handler_result_still_stops_dispatch() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("quiet")
                .syntax(["look"])
                .handler(|_| async { Vec::<String>::new() }),
        )
        .unwrap();
    parser
        .register(
            Command::builder("loud")
                .syntax(["look"])
                .handler(|_| async { "LOUD" }),
        )
        .unwrap();

    assert!(lines(&parser, "look").await.is_empty());
}

#[tokio::test]
async fn no_match_is_empty_response() {
    let mut parser = parser();
    parser
        .register(
            Command::builder("hello")
                .syntax(["hello"])
                .handler(|_| async { "Hello!" }),
        )
        .unwrap();

    assert!(parser.parse("dance").await.is_empty());
    assert!(parser.parse("").await.is_empty());
}

#[tokio::test]
async fn probing_never_runs_the_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let mut parser = parser();
    parser
        .register(
            Command::builder("count")
                .syntax(["count"])
                .handler(move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    async { "counted" }
                }),
        )
        .unwrap();

    let command = parser.command("count").unwrap();
    let tokens = parser.tokens("count", parser.env());
    let probe = command
        .evaluate(parser.validators(), parser.env(), &tokens, Mode::Probe)
        .await;
    assert_eq!(probe, Evaluation::Matched);
    assert_eq!(parser.candidates(&tokens, parser.env()).len(), 1);
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(lines(&parser, "count").await, vec!["counted"]);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn transforms_rewrite_tokens_before_matching() {
    let mut parser = parser();
    parser.add_transform(parley_parser::transform::synonyms(&[("n", "north")]));
    parser.add_transform(|tokens, env: &Env| {
        if env.contains("dark") {
            vec!["stumble".to_string()]
        } else {
            tokens
        }
    });
    parser
        .register(
            Command::builder("go")
                .syntax(["go <string:direction>"])
                .handler(|invocation| async move {
                    invocation.args.get_str("direction").unwrap_or_default().to_string()
                }),
        )
        .unwrap();

    assert_eq!(lines(&parser, "go n").await, vec!["north"]);
    let dark = Env::new().with("dark", true);
    assert!(parser.parse_scoped("go n", &dark).await.is_empty());
}

#[test]
fn duplicate_registration_fails() {
    let mut parser = parser();
    let build = || {
        Command::builder("hello")
            .syntax(["hello"])
            .handler(|_| async { "Hello!" })
    };
    parser.register(build()).unwrap();

    let err = parser.register(build()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand(ref name) if name == "hello"));
    assert_eq!(err.to_string(), "you already have a command named hello");
}

#[test]
fn missing_handler_fails() {
    let err = Command::builder("mute").syntax(["mute"]).build().unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingHandler(_)));
}
