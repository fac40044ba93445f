//! Standard validators.
//!
//! Common placeholder types most command sets want:
//!
//! | Tag      | Accepts                          | Binds          |
//! |----------|----------------------------------|----------------|
//! | `string` | any token                        | the raw token  |
//! | `word`   | a non-empty token with no spaces | the raw token  |
//! | `int`    | a base-10 `i64`                  | `Value::Int`   |
//! | `float`  | anything `f64` parses            | `Value::Float` |
//! | `bool`   | `true/false/yes/no/on/off`       | `Value::Bool`  |
//!
//! Every standard validator rejects silently, so a command can offer
//! several patterns that differ only in placeholder type.

use parley_foundation::Env;

use crate::validator::{Validation, ValidatorRegistry};

/// Registers all standard validators.
pub fn register(validators: &mut ValidatorRegistry) {
    validators.register("string", string);
    validators.register("word", word);
    validators.register("int", int);
    validators.register("float", float);
    validators.register("bool", boolean);
}

/// Accepts any token verbatim.
#[must_use]
pub fn string(_token: &str, _env: &Env) -> Validation {
    Validation::accept()
}

/// Accepts a single non-empty word.
///
/// Wildcard captures contain spaces and are rejected.
#[must_use]
pub fn word(token: &str, _env: &Env) -> Validation {
    if token.is_empty() || token.contains(' ') {
        Validation::reject()
    } else {
        Validation::accept()
    }
}

/// Accepts a base-10 integer.
#[must_use]
pub fn int(token: &str, _env: &Env) -> Validation {
    token
        .parse::<i64>()
        .map_or_else(|_| Validation::reject(), Validation::accept_with)
}

/// Accepts a floating point number.
#[must_use]
pub fn float(token: &str, _env: &Env) -> Validation {
    token
        .parse::<f64>()
        .map_or_else(|_| Validation::reject(), Validation::accept_with)
}

/// Accepts common spellings of true and false.
#[must_use]
pub fn boolean(token: &str, _env: &Env) -> Validation {
    match token.to_lowercase().as_str() {
        "true" | "yes" | "on" => Validation::accept_with(true),
        "false" | "no" | "off" => Validation::accept_with(false),
        _ => Validation::reject(),
    }
}
