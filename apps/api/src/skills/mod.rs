// Skills & Courses: static tables, AI suggestions, gap analysis.
// All LLM calls go through llm_client::CompletionService.

pub mod aggregator;
pub mod gap;
pub mod handlers;
pub mod parser;
pub mod prompts;
pub mod tables;
