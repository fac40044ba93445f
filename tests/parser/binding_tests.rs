//! Argument binding tests.

use parley_foundation::{Env, Value};
use parley_parser::input::lex;
use parley_parser::{
    ArgumentBinder, BindOutcome, MatchOutcome, Pattern, PatternMatcher, Validation,
    ValidatorRegistry,
};

fn bind(source: &str, input: &str, validators: &ValidatorRegistry, env: &Env) -> BindOutcome {
    let pattern = Pattern::parse(source).unwrap();
    let MatchOutcome::Match(tokens) = PatternMatcher::matches(&pattern, &lex(input), false) else {
        panic!("{input:?} should match {source:?}");
    };
    ArgumentBinder::bind(&pattern, &tokens, validators, env)
}

fn standard() -> ValidatorRegistry {
    let mut validators = ValidatorRegistry::new();
    parley_parser::stdlib::register(&mut validators);
    validators
}

#[test]
fn binds_converted_values() {
    let outcome = bind("add <int:a> <int:b>", "add 2 40", &standard(), &Env::new());
    let BindOutcome::Bound(args) = outcome else {
        panic!("expected a binding, got {outcome:?}");
    };
    assert_eq!(args.get_int("a"), Some(2));
    assert_eq!(args.get("b"), Some(&Value::Int(40)));
}

#[test]
fn binds_wildcard_tail() {
    let outcome = bind("say <string:text*>", "say good  day", &standard(), &Env::new());
    let BindOutcome::Bound(args) = outcome else {
        panic!("expected a binding, got {outcome:?}");
    };
    assert_eq!(args.get_str("text"), Some("good day"));
}

#[test]
fn silent_rejection_is_incomplete() {
    let outcome = bind("wait <int:turns>", "wait forever", &standard(), &Env::new());
    assert!(matches!(outcome, BindOutcome::Incomplete(ref args) if args.is_empty()));
}

#[test]
fn message_rejection_aborts() {
    let mut validators = standard();
    validators.register("door", |token, _| {
        Validation::reject_with(format!("There is no {token} door."))
    });

    let outcome = bind("open <door>", "open red", &validators, &Env::new());
    assert_eq!(outcome, BindOutcome::Rejected("There is no red door.".into()));
}

#[test]
fn validators_see_the_env() {
    let mut validators = ValidatorRegistry::new();
    validators.register("item", |token, env: &Env| {
        match env.get("inventory").and_then(Value::as_vec) {
            Some(items) if items.contains(&Value::from(token)) => Validation::accept(),
            _ => Validation::reject_with(format!("You don't have a {token}.")),
        }
    });

    let env = Env::new().with("inventory", Value::from(vec!["lamp", "key"]));
    assert!(matches!(
        bind("drop <item>", "drop lamp", &validators, &env),
        BindOutcome::Bound(_)
    ));
    assert_eq!(
        bind("drop <item>", "drop sword", &validators, &env),
        BindOutcome::Rejected("You don't have a sword.".into())
    );
}

#[test]
fn unvalidated_placeholders() {
    let validators = ValidatorRegistry::new();
    let env = Env::new();

    // Bare placeholders bind anything.
    assert!(matches!(
        bind("take <thing>", "take lamp", &validators, &env),
        BindOutcome::Bound(ref args) if args.get_str("thing") == Some("lamp")
    ));

    // Qualified ones bind only when the token's type tag agrees, and raw
    // tokens are always strings.
    assert!(matches!(
        bind("take <string:thing>", "take lamp", &validators, &env),
        BindOutcome::Bound(_)
    ));
    assert!(matches!(
        bind("wait <int:turns>", "wait 3", &validators, &env),
        BindOutcome::Incomplete(_)
    ));
}
