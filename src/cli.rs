use console::{measure_text_width, style};
use std::sync::atomic::{AtomicBool, Ordering};

const PREFIX_LEN: usize = 6;

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Right-align a (possibly styled) prefix so messages line up
pub fn gen_prefix(prefix: &str) -> String {
    let width = measure_text_width(prefix);
    let padding = PREFIX_LEN.saturating_sub(width);
    format!("{}{} ", " ".repeat(padding), prefix)
}

pub fn styled_prefix(kind: &str) -> String {
    let prefix = match kind {
        "info" => style("info").blue().bold(),
        "warn" => style("warn").yellow().bold(),
        "error" => style("error").red().bold(),
        "success" => style("done").green().bold(),
        "debug" => style("debug").dim(),
        _ => style(""),
    };
    gen_prefix(&prefix.to_string())
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        eprintln!("{}{}", $crate::cli::styled_prefix("info"), format!($($arg)+));
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        eprintln!("{}{}", $crate::cli::styled_prefix("warn"), format!($($arg)+));
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        eprintln!("{}{}", $crate::cli::styled_prefix("error"), format!($($arg)+));
    };
}

#[macro_export]
macro_rules! due_to {
    ($($arg:tt)+) => {
        eprintln!("{}{} {}", $crate::cli::gen_prefix(""), console::style("due to").dim(), format!($($arg)+));
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)+) => {
        eprintln!("{}{}", $crate::cli::styled_prefix("success"), format!($($arg)+));
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        if $crate::cli::verbose() {
            eprintln!("{}{}", $crate::cli::styled_prefix("debug"), format!($($arg)+));
        }
    };
}
