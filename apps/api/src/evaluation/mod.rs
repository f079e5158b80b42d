// Single-shot evaluators: ATS scan (HR review / ATS match), section
// enhancement, and heading discovery. One backend call each, no retry.
// All model calls go through the ModelBackend trait.

pub mod evaluator;
pub mod handlers;
pub mod headings;
pub mod prompts;
