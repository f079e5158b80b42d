// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments.

/// Appended to instructions whose output is shown to the user verbatim.
pub const PLAIN_TEXT_ONLY: &str = "Respond with the requested content only. \
    Do NOT add greetings, preambles, or closing remarks. \
    Do NOT explain what you changed.";
