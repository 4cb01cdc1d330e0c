use std::sync::Arc;

use railmadad::application::services::TriageService;
use railmadad::domain::{
    ComplaintCategory, FALLBACK_REASON, KeywordPriorityTable, PriorityLevel, VerdictSource,
};

use serde_json::json;

use crate::helpers::StubClassifier;

#[tokio::test]
async fn given_fire_keyword_when_classifier_says_low_priority_then_keyword_floor_wins() {
    let classifier = StubClassifier::responding("Security", 2, "Smoke reported");
    let service = TriageService::new(classifier.clone());

    let verdict = service.classify("there was a fire in coach B3").await;

    assert_eq!(verdict.priority, PriorityLevel::CRITICAL);
    assert_eq!(verdict.category, ComplaintCategory::Security);
    assert_eq!(verdict.reason, "Smoke reported");
    assert_eq!(verdict.source, VerdictSource::KeywordOverride);
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn given_keyword_match_when_classifier_priority_is_out_of_range_then_keyword_still_applies() {
    let classifier = StubClassifier::responding("Medical", 42, "Passenger collapsed");
    let service = TriageService::new(classifier);

    let verdict = service.classify("man unconscious near the pantry").await;

    assert_eq!(verdict.category, ComplaintCategory::Medical);
    assert_eq!(verdict.priority, PriorityLevel::CRITICAL);
}

#[tokio::test]
async fn given_failing_classifier_and_no_keyword_when_classifying_then_returns_default_fallback() {
    let classifier = StubClassifier::failing();
    let service = TriageService::new(classifier.clone());

    let verdict = service
        .classify("The AC in coach B2 has not worked for the whole trip")
        .await;

    assert_eq!(verdict.category, ComplaintCategory::Other);
    assert_eq!(verdict.priority, PriorityLevel::MEDIUM);
    assert_eq!(verdict.reason, FALLBACK_REASON);
    assert!(verdict.is_fallback());
    assert_eq!(classifier.calls(), 1);
}

#[tokio::test]
async fn given_failing_classifier_and_theft_keyword_when_classifying_then_fallback_keeps_keyword_priority()
 {
    let service = TriageService::new(StubClassifier::failing());

    let verdict = service
        .classify("Theft of my phone while I was asleep in berth 23")
        .await;

    assert_eq!(verdict.category, ComplaintCategory::Other);
    assert_eq!(verdict.priority, PriorityLevel::HIGH);
    assert_eq!(verdict.reason, FALLBACK_REASON);
}

#[tokio::test]
async fn given_classifier_returns_nothing_when_classifying_then_uses_fallback() {
    let service = TriageService::new(StubClassifier::empty());

    let verdict = service.classify("someone was bleeding on the platform").await;

    assert_eq!(verdict.category, ComplaintCategory::Other);
    assert_eq!(verdict.priority, PriorityLevel::CRITICAL);
    assert_eq!(verdict.source, VerdictSource::Fallback);
}

#[tokio::test]
async fn given_uppercase_and_lowercase_keyword_when_classifying_then_priorities_match() {
    let service = TriageService::new(StubClassifier::responding("Security", 1, "ok"));

    let upper = service.classify("FIRE in the coach").await;
    let lower = service.classify("fire in the coach").await;

    assert_eq!(upper.priority, PriorityLevel::CRITICAL);
    assert_eq!(upper.priority, lower.priority);
}

#[tokio::test]
async fn given_no_keyword_when_classifier_succeeds_then_values_pass_through_unchanged() {
    let service = TriageService::new(StubClassifier::responding(
        "Food",
        2,
        "Meal quality complaint",
    ));

    let verdict = service
        .classify("The dinner served in the pantry car was stale and cold")
        .await;

    assert_eq!(verdict.category, ComplaintCategory::Food);
    assert_eq!(verdict.priority, PriorityLevel::LOW);
    assert_eq!(verdict.reason, "Meal quality complaint");
    assert_eq!(verdict.source, VerdictSource::Classifier);
}

#[tokio::test]
async fn given_same_description_when_classifying_twice_then_verdicts_are_identical() {
    let classifier = StubClassifier::responding("Delay", 3, "Train running late");
    let service = TriageService::new(classifier.clone());
    let description = "Train 12951 is running four hours late with no announcement";

    let first = service.classify(description).await;
    let second = service.classify(description).await;

    assert_eq!(first, second);
    assert_eq!(classifier.calls(), 2);
}

#[tokio::test]
async fn given_category_outside_enumeration_when_classifying_then_treated_as_unavailable() {
    let service = TriageService::new(StubClassifier::responding("Weather", 2, "Rainy"));

    let verdict = service.classify("water leaking from the roof of coach S7").await;

    assert_eq!(verdict.category, ComplaintCategory::Other);
    assert_eq!(verdict.priority, PriorityLevel::MEDIUM);
    assert_eq!(verdict.reason, FALLBACK_REASON);
}

#[tokio::test]
async fn given_out_of_range_priority_without_keyword_when_classifying_then_falls_back() {
    let service = TriageService::new(StubClassifier::responding("Food", 9, "Urgent"));

    let verdict = service.classify("the samosa was too salty for my taste").await;

    assert!(verdict.is_fallback());
    assert_eq!(verdict.priority, PriorityLevel::MEDIUM);
}

#[tokio::test]
async fn given_float_priority_and_theft_keyword_when_classifying_then_classifier_category_is_kept() {
    let service = TriageService::new(StubClassifier::responding_raw(
        "Security",
        json!(4.0),
        "Bag stolen",
    ));

    let verdict = service.classify("theft of my bag in coach S4 last night").await;

    assert_eq!(verdict.category, ComplaintCategory::Security);
    assert_eq!(verdict.priority, PriorityLevel::HIGH);
    assert_eq!(verdict.reason, "Bag stolen");
    assert_eq!(verdict.source, VerdictSource::KeywordOverride);
}

#[tokio::test]
async fn given_non_numeric_priority_and_keyword_when_classifying_then_priority_is_never_read() {
    let service = TriageService::new(StubClassifier::responding_raw(
        "Medical",
        json!("urgent"),
        "Passenger fainted",
    ));

    let verdict = service.classify("a passenger is unconscious in coach A1").await;

    assert_eq!(verdict.category, ComplaintCategory::Medical);
    assert_eq!(verdict.priority, PriorityLevel::CRITICAL);
    assert_eq!(verdict.source, VerdictSource::KeywordOverride);
}

#[tokio::test]
async fn given_integral_float_priority_without_keyword_when_classifying_then_passes_through() {
    let service = TriageService::new(StubClassifier::responding_raw(
        "Cleanliness",
        json!(2.0),
        "Dirty washroom",
    ));

    let verdict = service.classify("the washroom in coach S2 has not been cleaned").await;

    assert_eq!(verdict.category, ComplaintCategory::Cleanliness);
    assert_eq!(verdict.priority, PriorityLevel::LOW);
    assert_eq!(verdict.source, VerdictSource::Classifier);
}

#[tokio::test]
async fn given_fractional_priority_without_keyword_when_classifying_then_falls_back() {
    let service = TriageService::new(StubClassifier::responding_raw(
        "Cleanliness",
        json!(2.5),
        "Dirty washroom",
    ));

    let verdict = service.classify("the washroom in coach S2 has not been cleaned").await;

    assert!(verdict.is_fallback());
    assert_eq!(verdict.priority, PriorityLevel::MEDIUM);
}

#[tokio::test]
async fn given_devanagari_description_with_keyword_when_classifying_then_keyword_still_applies() {
    let service = TriageService::new(StubClassifier::responding("Security", 2, "Theft reported"));

    let verdict = service
        .classify("कोच S4 में मेरे बैग की theft हो गई, कृपया मदद करें")
        .await;

    assert_eq!(verdict.category, ComplaintCategory::Security);
    assert_eq!(verdict.priority, PriorityLevel::HIGH);
}

#[tokio::test]
async fn given_staff_behavior_display_name_when_classifying_then_maps_to_variant() {
    let service = TriageService::new(StubClassifier::responding(
        "Staff Behavior",
        3,
        "Rude conductor",
    ));

    let verdict = service.classify("the TTE shouted at my elderly mother").await;

    assert_eq!(verdict.category, ComplaintCategory::StaffBehavior);
}

#[tokio::test]
async fn given_empty_or_huge_description_when_classifying_then_always_returns_verdict() {
    let service = TriageService::new(StubClassifier::failing());

    let empty = service.classify("").await;
    assert_eq!(empty.priority, PriorityLevel::MEDIUM);

    let huge = "delay ".repeat(200_000) + "assault";
    let verdict = service.classify(&huge).await;
    assert_eq!(verdict.priority, PriorityLevel::CRITICAL);
}

#[tokio::test]
async fn given_custom_keyword_table_when_scanning_then_uses_it() {
    let table = Arc::new(KeywordPriorityTable::new(vec![(
        PriorityLevel::LOW,
        vec!["charging point"],
    )]));
    let service = TriageService::with_keywords(StubClassifier::failing(), table);

    assert_eq!(
        service.scan_keywords("Charging point not working"),
        Some(PriorityLevel::LOW)
    );
    assert_eq!(service.scan_keywords("fire"), None);
}

#[tokio::test]
async fn given_concurrent_requests_when_classifying_then_each_gets_its_own_verdict() {
    let service = Arc::new(TriageService::new(StubClassifier::responding(
        "Cleanliness",
        2,
        "Dirty coach",
    )));

    let descriptions = [
        "the floor is dirty everywhere",
        "harassment by a co-passenger",
        "fire near the pantry",
    ];
    let verdicts = futures::future::join_all(
        descriptions
            .iter()
            .map(|d| {
                let service = Arc::clone(&service);
                async move { service.classify(d).await }
            }),
    )
    .await;

    let priorities: Vec<PriorityLevel> = verdicts.iter().map(|v| v.priority).collect();
    assert_eq!(
        priorities,
        vec![PriorityLevel::LOW, PriorityLevel::HIGH, PriorityLevel::CRITICAL]
    );
}
