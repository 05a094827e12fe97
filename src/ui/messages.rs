use ansi_term::Colour;
use std::fmt;

/// Icons
const ICON_OK: &str = "✅";
const ICON_ERR: &str = "❌";

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint(ICON_OK), msg);
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!(
        "{} {}{}",
        Colour::Red.bold().paint(ICON_ERR),
        Colour::Red.paint("Error. "),
        msg
    );
}
