//! shkv: command-line front end for the assignment parser.
//!
//! Feeds NAME=VALUE arguments (and optional dotfiles) through the line
//! parser, accumulates the results in an ordered store, and prints each
//! assignment as a structured record — JSON by default, or re-sourceable
//! shell lines with --shell.

use std::process::exit;

use shkv::config::{Config, OutputFormat};
use shkv::store::EnvStore;

const USAGE: &str = "\
usage: shkv [options] [NAME=VALUE ...]
  -f, --file PATH   load a dotfile into the store before the arguments
      --json        one JSON record per assignment (default)
      --shell       re-sourceable shell lines
      --sort        sort assignments by name before printing
      --lenient     skip unparseable lines with a warning
  -v, --verbose     debug logging
  -h, --help        show this help
";

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        eprint!("{USAGE}");
        exit(1);
    }

    let mut config = Config::load();
    let mut files: Vec<String> = Vec::new();
    let mut assignments: Vec<String> = Vec::new();
    let mut sort = false;
    let mut verbose = false;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-f" | "--file" => match iter.next() {
                Some(path) => files.push(path.clone()),
                None => {
                    eprintln!("shkv: {arg} requires a path");
                    exit(1);
                }
            },
            "--json" => config.output.format = OutputFormat::Json,
            "--shell" => config.output.format = OutputFormat::Shell,
            "--sort" => sort = true,
            "--lenient" => config.errors.lenient = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                print!("{USAGE}");
                return;
            }
            _ => assignments.push(arg.clone()),
        }
    }

    shkv::logging::init(verbose);

    if files.is_empty() && assignments.is_empty() {
        eprint!("{USAGE}");
        exit(1);
    }

    let mut store = EnvStore::new();

    for path in &files {
        let expanded = shellexpand::tilde(path);
        let expanded = std::path::Path::new(expanded.as_ref());
        if config.errors.lenient {
            let content = match std::fs::read_to_string(expanded) {
                Ok(content) => content,
                Err(err) => {
                    eprintln!("shkv: {path}: {err}");
                    exit(1);
                }
            };
            merge(&mut store, &content, true, path);
        } else if let Err(err) = store.load_file(expanded) {
            eprintln!("shkv: {path}: {err}");
            exit(1);
        }
    }

    // Each argument is one line of input.
    let source = assignments.join("\n");
    merge(&mut store, &source, config.errors.lenient, "argument");

    if sort {
        store.sort_by_name();
    }

    match config.output.format {
        OutputFormat::Json => {
            for assignment in store.iter() {
                println!("{}", serde_json::to_string(assignment).unwrap());
            }
        }
        OutputFormat::Shell => {
            let prefix = config.output.prefix.as_str();
            print!(
                "{}",
                store.render((!prefix.is_empty()).then_some(prefix))
            );
        }
    }
}

/// Merge one source into the store, honoring the error policy: strict
/// aborts the process on the first bad line, lenient warns and keeps going.
fn merge(store: &mut EnvStore, source: &str, lenient: bool, origin: &str) {
    if lenient {
        for err in store.merge_source_lossy(source) {
            log::warn!("{origin}: skipped: {err}");
        }
    } else if let Err(err) = store.merge_source(source) {
        eprintln!("shkv: {origin}: {err}");
        exit(1);
    }
    log::debug!("{origin}: store now holds {} assignments", store.len());
}
