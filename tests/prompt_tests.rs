use docsum::prompt::{MAX_TEXT_LENGTH, SUMMARY_INSTRUCTION, build_prompt, truncate_for_prompt};

#[test]
fn test_build_prompt_wraps_text_with_instruction() {
    let prompt = build_prompt("short document body");
    assert_eq!(prompt, format!("{SUMMARY_INSTRUCTION}\n\nshort document body"));
}

#[test]
fn test_truncate_leaves_short_text_alone() {
    let text = "well under the limit";
    assert_eq!(truncate_for_prompt(text), text);
}

#[test]
fn test_truncate_leaves_exact_limit_alone() {
    let text = "x".repeat(MAX_TEXT_LENGTH);
    assert_eq!(truncate_for_prompt(&text), text);
}

#[test]
fn test_truncate_caps_at_limit() {
    let text = "x".repeat(MAX_TEXT_LENGTH + 1_000);
    let truncated = truncate_for_prompt(&text);
    assert_eq!(truncated.len(), MAX_TEXT_LENGTH);
    assert_eq!(truncated, "x".repeat(MAX_TEXT_LENGTH));
}

#[test]
fn test_truncate_counts_characters_not_bytes() {
    // Multibyte input must be cut on a character boundary
    let text = "é".repeat(MAX_TEXT_LENGTH + 50);
    let truncated = truncate_for_prompt(&text);
    assert_eq!(truncated.chars().count(), MAX_TEXT_LENGTH);
    assert!(truncated.chars().all(|c| c == 'é'));
}
