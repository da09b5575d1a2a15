// Mentorship chat: directive parsing, mentor prompting, transcript handlers.

pub mod commands;
pub mod handlers;
pub mod mentor;
pub mod prompts;
