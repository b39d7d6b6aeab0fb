use log::LevelFilter;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

/// Install a stderr logger for the CLI.
/// Best-effort: a second init (e.g. in tests) is silently ignored.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
