//! Env snapshots shared between sessions.

use parley::foundation::{Env, ErrorKind, Value};
use parley::runtime::{Session, snapshot};

#[test]
fn snapshot_carries_env_between_sessions() {
    let path = std::env::temp_dir().join("parley_integration_env.msgpack");

    let mut first = Session::new().unwrap();
    first.set_env("test", 1);
    first.set_env("exits", Value::from(vec!["north", "east"]));
    first.save_env(&path).unwrap();

    let mut second = Session::new().unwrap();
    second.load_env(&path).unwrap();
    assert_eq!(second.submit("env test").into_lines(), vec!["test = 1"]);
    assert_eq!(
        second.submit("env exits").into_lines(),
        vec!["exits = [north east]"]
    );

    let _ = std::fs::remove_file(&path);
}

#[test]
fn scoped_env_is_not_saved() {
    let path = std::env::temp_dir().join("parley_integration_scoped.msgpack");

    let session = Session::new().unwrap();
    let scoped = Env::new().with("secret", true);
    assert_eq!(
        session.submit_scoped("env secret", &scoped).into_lines(),
        vec!["secret = true"]
    );
    session.save_env(&path).unwrap();

    let restored = snapshot::load_from_file(&path).unwrap();
    assert!(restored.is_empty());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn corrupt_snapshot_is_a_serialization_error() {
    let path = std::env::temp_dir().join("parley_integration_corrupt.msgpack");
    std::fs::write(&path, b"\xc1not msgpack").unwrap();

    let err = snapshot::load_from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Serialization(_)));

    let _ = std::fs::remove_file(&path);
}
