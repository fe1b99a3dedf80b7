use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

/// Initialize stderr logging at the configured level.
/// Best-effort: a second init (e.g. in tests) is silently ignored.
pub fn init(level: &str) {
    let filter = match level {
        l if l.eq_ignore_ascii_case("off") => LevelFilter::Off,
        l if l.eq_ignore_ascii_case("error") => LevelFilter::Error,
        l if l.eq_ignore_ascii_case("warn") => LevelFilter::Warn,
        l if l.eq_ignore_ascii_case("info") => LevelFilter::Info,
        l if l.eq_ignore_ascii_case("debug") => LevelFilter::Debug,
        l if l.eq_ignore_ascii_case("trace") => LevelFilter::Trace,
        _ => LevelFilter::Warn,
    };

    let _ = TermLogger::init(
        filter,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}
