pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a professional translator. \
     I will provide you with multiple parts of a PDF document. \
     Please translate each part to {target_language} while maintaining the original structure and formatting. \
     Make sure to preserve any technical terms or proper nouns appropriately. \
     I will send you the content part by part, and you should translate each part. \
     Output only the translated text without any explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}

/// Wraps one chunk in the user message sent for it. `part` is 1-based.
pub fn build_chunk_prompt(part: usize, chunk: &str) -> String {
    format!("Here's part {part} of the PDF content to translate:\n\n{chunk}")
}
