//! Target language listing command handler.

use crate::deepl::SUPPORTED_TARGETS;
use crate::ui::Style;

/// Prints all supported target language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target language codes"));
    for (code, name) in SUPPORTED_TARGETS {
        println!("  {:6} {}", Style::code(code), Style::secondary(name));
    }
}
