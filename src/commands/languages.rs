use colored::Colorize;
use enzo::translation::{LANGUAGES, TONES};

/// Execute the languages command
pub fn execute() {
    println!("{}", "Languages:".bold());
    for (name, _) in LANGUAGES {
        println!("  {}", name.cyan());
    }
    println!();

    println!("{}", "Tones:".bold());
    for (name, prompt) in TONES {
        println!("  {:<28} {}", name.cyan(), prompt.dimmed());
    }
}
