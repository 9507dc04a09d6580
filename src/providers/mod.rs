pub mod openai;

pub use openai::{ChatCompletion, OpenAIClient};
