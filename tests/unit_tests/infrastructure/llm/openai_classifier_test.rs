use railmadad::application::ports::ClassifierError;
use railmadad::domain::ComplaintCategory;
use railmadad::infrastructure::llm::{build_system_prompt, parse_classifier_content};

#[test]
fn given_all_categories_when_building_prompt_then_lists_every_display_name() {
    let prompt = build_system_prompt(&ComplaintCategory::ALL);

    assert!(prompt.contains("'Medical', 'Security', 'Cleanliness', 'Food', 'Delay', 'Staff Behavior', 'Infrastructure', 'Other'"));
    assert!(prompt.contains("return ONLY valid JSON"));
    assert!(!prompt.contains("{categories}"));
}

#[test]
fn given_plain_json_when_parsing_content_then_returns_output() {
    let output = parse_classifier_content(
        r#"{"category": "Food", "priority": 2, "reason": "Stale meal"}"#,
    )
    .unwrap()
    .unwrap();

    assert_eq!(output.category, "Food");
    assert_eq!(output.priority, 2);
    assert_eq!(output.reason, "Stale meal");
}

#[test]
fn given_fenced_json_when_parsing_content_then_strips_fences() {
    let content = "```json\n{\"category\": \"Delay\", \"priority\": 3, \"reason\": \"Late\"}\n```";

    let output = parse_classifier_content(content).unwrap().unwrap();

    assert_eq!(output.category, "Delay");
}

#[test]
fn given_blank_content_when_parsing_then_returns_none() {
    assert!(parse_classifier_content("  \n ").unwrap().is_none());
}

#[test]
fn given_prose_content_when_parsing_then_returns_invalid_response() {
    let result = parse_classifier_content("I think this is about food.");

    assert!(matches!(result, Err(ClassifierError::InvalidResponse(_))));
}

#[test]
fn given_missing_reason_when_parsing_then_returns_invalid_response() {
    let result = parse_classifier_content(r#"{"category": "Food", "priority": 2}"#);

    assert!(matches!(result, Err(ClassifierError::InvalidResponse(_))));
}

#[test]
fn given_float_priority_when_parsing_content_then_keeps_raw_number() {
    let output = parse_classifier_content(
        r#"{"category": "Security", "priority": 4.0, "reason": "Bag stolen"}"#,
    )
    .unwrap()
    .unwrap();

    assert_eq!(output.category, "Security");
    assert_eq!(output.priority.as_f64(), Some(4.0));
    assert_eq!(output.reason, "Bag stolen");
}

#[test]
fn given_missing_priority_when_parsing_content_then_category_and_reason_survive() {
    let output = parse_classifier_content(r#"{"category": "Security", "reason": "Bag stolen"}"#)
        .unwrap()
        .unwrap();

    assert_eq!(output.category, "Security");
    assert!(output.priority.is_null());
}
