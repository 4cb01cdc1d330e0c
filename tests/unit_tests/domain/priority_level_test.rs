use railmadad::domain::PriorityLevel;

#[test]
fn given_values_in_range_when_creating_then_succeeds() {
    for value in 1..=5 {
        let level = PriorityLevel::new(value).unwrap();
        assert_eq!(i64::from(level.value()), value);
    }
}

#[test]
fn given_values_out_of_range_when_creating_then_fails() {
    assert!(PriorityLevel::new(0).is_err());
    assert!(PriorityLevel::new(6).is_err());
    assert!(PriorityLevel::new(-3).is_err());
    assert!(PriorityLevel::new(i64::MAX).is_err());
}

#[test]
fn given_levels_when_comparing_then_critical_is_highest() {
    assert!(PriorityLevel::CRITICAL > PriorityLevel::HIGH);
    assert!(PriorityLevel::HIGH > PriorityLevel::MEDIUM);
    assert!(PriorityLevel::LOW > PriorityLevel::FEEDBACK);
}

#[test]
fn given_levels_when_labelling_then_matches_triage_scale() {
    assert_eq!(PriorityLevel::CRITICAL.label(), "Critical");
    assert_eq!(PriorityLevel::HIGH.label(), "High");
    assert_eq!(PriorityLevel::MEDIUM.label(), "Medium");
    assert_eq!(PriorityLevel::LOW.label(), "Low");
    assert_eq!(PriorityLevel::FEEDBACK.label(), "Feedback");
}

#[test]
fn given_out_of_range_json_when_deserializing_then_fails() {
    assert!(serde_json::from_str::<PriorityLevel>("9").is_err());
    assert_eq!(
        serde_json::from_str::<PriorityLevel>("4").unwrap(),
        PriorityLevel::HIGH
    );
}
