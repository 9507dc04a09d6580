//! Transcript splitting
//!
//! A transcript is free-form text where literal `## USER` and `## ASSISTANT`
//! lines switch which party the following lines belong to.

use crate::error::AppError;
use std::io::{self, Read};
use std::path::Path;

/// Marker line that switches to the user segment
pub const USER_MARKER: &str = "## USER";
/// Marker line that switches to the assistant segment
pub const ASSISTANT_MARKER: &str = "## ASSISTANT";
/// Instruction line that seeds the assistant segment by default
pub const DEFAULT_INSTRUCTION: &str =
    "You will be provided with a text in English, and your task is to translate it into French.";

/// Transcript split into its two role segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedText {
    pub user_text: String,
    pub assistant_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Assistant,
}

/// Splits transcripts into user and assistant segments.
///
/// The assistant segment always starts with the seed lines. The default seed
/// is the assistant marker followed by [`DEFAULT_INSTRUCTION`].
#[derive(Debug, Clone)]
pub struct Splitter {
    seed: Vec<String>,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::with_seed([ASSISTANT_MARKER, DEFAULT_INSTRUCTION])
    }
}

impl Splitter {
    /// Create a splitter whose assistant segment starts with `seed`
    pub fn with_seed<I, S>(seed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            seed: seed.into_iter().map(Into::into).collect(),
        }
    }

    /// Seed the assistant segment with the marker and a custom instruction
    pub fn with_instruction(instruction: impl Into<String>) -> Self {
        Self::with_seed([ASSISTANT_MARKER.to_string(), instruction.into()])
    }

    pub fn split(&self, text: &str) -> SegmentedText {
        let mut user: Vec<&str> = Vec::new();
        let mut assistant: Vec<&str> = self.seed.iter().map(String::as_str).collect();
        let mut role = Role::User;

        for line in text.split('\n') {
            match line {
                USER_MARKER => role = Role::User,
                ASSISTANT_MARKER => role = Role::Assistant,
                "" => {}
                _ => match role {
                    Role::User => user.push(line),
                    Role::Assistant => assistant.push(line),
                },
            }
        }

        SegmentedText {
            user_text: user.join(" "),
            assistant_text: assistant.join(" "),
        }
    }
}

/// Split `text` with the default assistant seed
pub fn split(text: &str) -> SegmentedText {
    Splitter::default().split(text)
}

/// Read a whole transcript from `reader`
pub fn read_from(mut reader: impl Read) -> Result<String, AppError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

/// Read a transcript file
pub fn read_file(path: impl AsRef<Path>) -> Result<String, AppError> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| {
        AppError::Io(io::Error::new(
            e.kind(),
            format!("Failed to read transcript {}: {}", path.display(), e),
        ))
    })
}
