use colored::Colorize;
use parking_lot::Mutex;

use crate::color::ParsedColor;
use crate::swatch;

/// Track quiet mode state
static QUIET_MODE: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

/// Enable or disable quiet mode
pub fn set_quiet_mode(enabled: bool) {
    *QUIET_MODE.lock() = enabled;
}

/// Check if quiet mode is enabled
pub fn is_quiet_mode() -> bool {
    *QUIET_MODE.lock()
}

pub fn print_info(message: &str) {
    if !is_quiet_mode() {
        eprintln!("{}", message.cyan().bold());
    }
}

pub fn print_warning(message: &str) {
    if !is_quiet_mode() {
        eprintln!("{}", message.yellow().bold());
    }
}

pub fn print_error(message: &str) {
    // Always print errors, even in quiet mode
    eprintln!("{}", message.red().bold());
}

pub fn print_success(message: &str) {
    if !is_quiet_mode() {
        eprintln!("{}", message.green().bold());
    }
}

pub fn print_version(version: &str) {
    if is_quiet_mode() {
        println!("{version}");
    } else {
        println!(
            "{} {} {}",
            "swatchkit".magenta().bold(),
            "version".cyan(),
            version.green()
        );
    }
}

/// Print a command's color result; the bare value in quiet mode, with a swatch otherwise
pub fn print_color(color: &ParsedColor) {
    if is_quiet_mode() {
        println!("{color}");
    } else {
        println!("{}", swatch::swatch_line(color));
    }
}

/// Print a named color; `name value` in quiet mode
pub fn print_labelled_color(label: &str, color: &ParsedColor) {
    if is_quiet_mode() {
        println!("{label} {color}");
    } else {
        println!("{}", swatch::labelled_swatch_line(label, color));
    }
}

/// Print a plain result line (always shown)
pub fn print_result(value: &str) {
    println!("{value}");
}
