// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Common instruction appended to résumé-writing prompts.
pub const ATS_INSTRUCTION: &str = "\
    The output is destined for a one-page, single-column, ATS-friendly resume. \
    Start every bullet with a strong past-tense action verb. \
    Quantify impact with concrete numbers, percentages or time saved wherever the input supports it. \
    Keep every bullet to one or two printed lines. \
    Do NOT invent employers, titles, dates or credentials that are not in the input.";
