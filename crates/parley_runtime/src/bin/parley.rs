//! Parley console entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use parley_runtime::{Repl, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Debug, Default, PartialEq)]
struct CliConfig {
    files: Vec<PathBuf>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
    env_file: Option<PathBuf>,
    env_vars: Vec<(String, String)>,
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--env-file" => {
                let path = args.next().ok_or("--env-file requires a path")?;
                config.env_file = Some(PathBuf::from(path));
            }
            "--set" => {
                let pair = args.next().ok_or("--set requires key=value")?;
                let (key, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("invalid --set value: {pair}"))?;
                config.env_vars.push((key.to_string(), value.to_string()));
            }
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            path => config.files.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("parley {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut repl = Repl::new()?;

    if let Some(path) = &config.env_file {
        repl.session_mut().load_env(path)?;
    }
    for (key, value) in config.env_vars {
        repl.session_mut().set_env(key, value);
    }

    for file in &config.files {
        for line in repl.eval_file(file)? {
            println!("{line}");
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.files.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mParley\x1b[0m - Command syntax matching console

\x1b[1mUSAGE:\x1b[0m
    parley [OPTIONS] [FILES...]

\x1b[1mARGUMENTS:\x1b[0m
    [FILES...]    Input files to run line by line before starting the console

\x1b[1mOPTIONS:\x1b[0m
    -h, --help            Print help information
    -V, --version         Print version information
    -b, --batch           Run files and exit (no console)
    --set KEY=VALUE       Set a base env entry (repeatable)
    --env-file PATH       Load the base env from a snapshot

\x1b[1mEXAMPLES:\x1b[0m
    parley                          Start the console
    parley -b script.txt            Run script.txt and exit
    parley --set test=1 -b demo.txt Run demo.txt with test set

\x1b[1mCONSOLE COMMANDS:\x1b[0m
    :help                Show commands
    :env                 List the base env
    :set KEY VALUE       Set a base env entry
    :save PATH           Save the base env
    :load PATH           Load the base env
    :quit                Exit (also Ctrl+D)

Set RUST_LOG=parley_parser=debug to trace dispatch."
    );
}
