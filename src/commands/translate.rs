use super::{resolve_model, Context};
use anyhow::Result;
use colored::Colorize;
use enzo::conversation::{process_turn, Conversation};
use enzo::error::AppError;
use enzo::providers::OpenAIClient;
use enzo::translation::TranslationSettings;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

const QUIT_COMMANDS: &[&str] = &["/quit", "/exit"];
const RESET_COMMAND: &str = "/reset";
const LANGUAGE_COMMAND: &str = "/language";
const TONE_COMMAND: &str = "/tone";
const RULES_COMMAND: &str = "/rules";

/// One line of session input
#[derive(Debug, PartialEq, Eq)]
enum SessionInput<'a> {
    Quit,
    Reset,
    Language(&'a str),
    Tone(&'a str),
    Rules(Option<&'a str>),
    Text(&'a str),
}

fn parse_input(input: &str) -> SessionInput<'_> {
    let (command, arg) = match input.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (input, ""),
    };

    match command {
        c if QUIT_COMMANDS.contains(&c) && arg.is_empty() => SessionInput::Quit,
        RESET_COMMAND if arg.is_empty() => SessionInput::Reset,
        LANGUAGE_COMMAND => SessionInput::Language(arg),
        TONE_COMMAND => SessionInput::Tone(arg),
        RULES_COMMAND => SessionInput::Rules(Some(arg).filter(|a| !a.is_empty())),
        _ => SessionInput::Text(input),
    }
}

/// Switch the conversation to `next`, replacing its instruction in place
///
/// On error neither the settings nor the conversation change.
fn apply_settings(
    conversation: &mut Conversation,
    settings: &mut TranslationSettings,
    next: Result<TranslationSettings, AppError>,
) -> Result<(), AppError> {
    let next = next?;
    conversation.set_instruction(next.prompt()?);
    *settings = next;
    Ok(())
}

/// Execute the translate command
///
/// Reads one message per line from stdin until EOF or `/quit`.
pub async fn execute(
    ctx: &Context,
    model: Option<String>,
    language: Option<String>,
    tone: Option<String>,
    rules: Option<String>,
) -> Result<()> {
    let cfg = ctx.load_config()?;
    let prices = ctx.load_prices(&cfg)?;
    let model = resolve_model(&prices, model)?;

    let mut settings = TranslationSettings::new(
        language.unwrap_or_else(|| cfg.translation.language.clone()),
        tone.unwrap_or_else(|| cfg.translation.tone.clone()),
        rules,
    )?;

    let client = OpenAIClient::new(cfg.openai.clone())?;
    let mut conversation = Conversation::with_instruction(settings.prompt()?);

    info!(
        model = %model,
        language = %settings.language,
        tone = %settings.tone,
        "Starting translation session"
    );
    println!(
        "{} {} ({}, {})",
        "Enzo".bold(),
        model.cyan(),
        settings.language,
        settings.tone.dimmed()
    );
    println!(
        "{}",
        "Enter text to translate. /language, /tone and /rules change the instruction, \
         /reset clears the history, /quit exits."
            .dimmed()
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", ">".green().bold());
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();

        if input.is_empty() {
            continue;
        }

        let next = match parse_input(input) {
            SessionInput::Quit => break,
            SessionInput::Reset => {
                conversation.clear_history();
                println!("{}", "History cleared".yellow());
                continue;
            }
            SessionInput::Language(name) => settings.with_language(name),
            SessionInput::Tone(name) => settings.with_tone(name),
            SessionInput::Rules(rules) => settings.with_rules(rules),
            SessionInput::Text(text) => {
                match process_turn(&mut conversation, &client, &model, &cfg.completion, text).await
                {
                    Ok(reply) => println!("{}\n", reply),
                    Err(e) => eprintln!("{} {}", "An error occurred:".red(), e),
                }
                continue;
            }
        };

        match apply_settings(&mut conversation, &mut settings, next) {
            Ok(()) => {
                info!(language = %settings.language, tone = %settings.tone, "Instruction updated");
                println!(
                    "{} {}, {}",
                    "Now translating:".yellow(),
                    settings.language,
                    settings.tone
                );
            }
            Err(e) => eprintln!("{} {}", "An error occurred:".red(), e),
        }
    }

    info!(messages = conversation.len(), "Translation session ended");
    Ok(())
}
