//! LLM helpers - prompt templates and reply parsing

pub mod prompt_builder;
pub mod response_parser;

pub use response_parser::{ParseOutcome, ReplyShape};
