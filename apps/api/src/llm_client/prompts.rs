// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Instruction appended to prompts whose output is parsed as a plain list.
/// `{count}` is replaced by the number of items the caller expects.
pub const LINE_LIST_INSTRUCTION: &str = "\
    Respond with exactly {count} lines and nothing else. \
    Each line holds one short item name, optionally prefixed with '- '. \
    No introduction, no numbering, no explanations, no blank lines.";

pub fn line_list_instruction(count: usize) -> String {
    LINE_LIST_INSTRUCTION.replace("{count}", &count.to_string())
}
