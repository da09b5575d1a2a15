// Mentor chat prompt templates.

pub const MENTOR_SYSTEM: &str = "You are a helpful career mentor AI assistant.";

pub const MENTOR_PROMPT: &str = "User Profile: {profile}, Context: {context}, Question: {question}";

pub const MENTOR_MAX_TOKENS: u32 = 400;
pub const MENTOR_TEMPERATURE: f32 = 0.7;
