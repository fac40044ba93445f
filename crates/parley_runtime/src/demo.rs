//! A small command set for trying the parser from the console.

use parley_foundation::{Env, Result, Value};
use parley_parser::{Command, Parser, Validation, transform};

/// Directions the `direction` validator recognizes.
pub const DIRECTIONS: [&str; 6] = ["north", "south", "east", "west", "up", "down"];

/// Registers the demo validators, transforms, and commands.
///
/// | Input                  | Response                         |
/// |------------------------|----------------------------------|
/// | `hello`                | `Hello!`                         |
/// | `go <direction>`       | `Went` and the direction         |
/// | `go2 <direction>`      | same, refusing unknown ones      |
/// | `zoop1 suffix`         | `Zoop!` (also `zoop2 suffix`)    |
/// | `say <text...>`        | the text                         |
/// | `add <a> <b>`          | the sum of two integers          |
/// | `env <key>`            | the env value for `key`          |
///
/// Single-letter directions are expanded and articles dropped before
/// matching, so `go2 the n` reaches `go2` as `go2 north`.
///
/// # Errors
///
/// Returns an error if a command name is already taken.
pub fn install(parser: &mut Parser) -> Result<()> {
    parser.add_validator("direction", direction);
    parser.add_transform(transform::strip_words(&["the", "a", "an"]));
    parser.add_transform(transform::synonyms(&[
        ("n", "north"),
        ("s", "south"),
        ("e", "east"),
        ("w", "west"),
        ("u", "up"),
        ("d", "down"),
    ]));

    parser.register(
        Command::builder("hello")
            .syntax(["hello", "hi"])
            .handler(|_| async { "Hello!" }),
    )?;

    parser.register(
        Command::builder("go")
            .syntax(["go <string:direction>", "walk <string:direction>"])
            .handler(|invocation| async move {
                let direction = invocation.args.get_str("direction").unwrap_or_default();
                vec!["Went".to_string(), direction.to_string()]
            }),
    )?;

    parser.register(
        Command::builder("go2")
            .syntax(["go2 <direction>"])
            .handler(|invocation| async move {
                let direction = invocation.args.get_str("direction").unwrap_or_default();
                vec!["Went".to_string(), direction.to_string()]
            }),
    )?;

    parser.register(
        Command::builder("zoop")
            .syntax_with_suffix(["zoop1", "zoop2"], "suffix")
            .handler(|_| async { "Zoop!" }),
    )?;

    parser.register(
        Command::builder("say")
            .syntax(["say <string:text*>"])
            .handler(|invocation| async move {
                invocation.args.get_str("text").unwrap_or_default().to_string()
            }),
    )?;

    parser.register(
        Command::builder("add")
            .syntax(["add <int:a> <int:b>", "add <int:a> to <int:b>"])
            .handler(|invocation| async move {
                let a = invocation.args.get_int("a").unwrap_or_default();
                let b = invocation.args.get_int("b").unwrap_or_default();
                Value::Int(a.saturating_add(b))
            }),
    )?;

    parser.register(
        Command::builder("env")
            .syntax(["env <string:key>"])
            .handler(|invocation| async move {
                let key = invocation.args.get_str("key").unwrap_or_default();
                match invocation.env.get(key) {
                    Some(value) => format!("{key} = {value}"),
                    None => format!("{key} is not set"),
                }
            }),
    )?;

    Ok(())
}

/// Accepts one of [`DIRECTIONS`], refusing anything else with a message.
#[must_use]
pub fn direction(token: &str, _env: &Env) -> Validation {
    let lower = token.to_lowercase();
    if DIRECTIONS.contains(&lower.as_str()) {
        Validation::accept_with(lower)
    } else {
        Validation::reject_with(format!("You can't go {token}."))
    }
}
