use railmadad::application::ports::{ClassifierError, ComplaintClassifier};
use railmadad::domain::ComplaintCategory;
use railmadad::infrastructure::llm::ClassifierFactory;
use railmadad::presentation::config::{ClassifierSettings, ScaffoldConfig};

fn openai_settings(api_key: &str) -> ClassifierSettings {
    ClassifierSettings {
        provider: "openai".to_string(),
        api_key: api_key.to_string(),
        base_url: None,
        azure_endpoint: None,
        api_version: "2024-06-01".to_string(),
        chat_model: "gpt-4o-mini".to_string(),
        max_tokens: 128,
        temperature: 0.0,
        timeout_secs: 5,
    }
}

#[tokio::test]
async fn given_scaffold_mode_when_creating_classifier_then_it_reports_unavailable() {
    let scaffold = ScaffoldConfig {
        enabled: true,
        mock_response_delay_ms: 0,
    };

    let classifier = ClassifierFactory::create(&openai_settings("real-key"), &scaffold).unwrap();
    let result = classifier
        .classify("anything at all", &ComplaintCategory::ALL)
        .await;

    assert!(matches!(result, Err(ClassifierError::Unavailable(_))));
}

#[tokio::test]
async fn given_missing_api_key_when_creating_classifier_then_degrades_to_offline_classifier() {
    let classifier =
        ClassifierFactory::create(&openai_settings(""), &ScaffoldConfig::default()).unwrap();

    let result = classifier
        .classify("anything at all", &ComplaintCategory::ALL)
        .await;

    assert!(matches!(result, Err(ClassifierError::Unavailable(_))));
}

#[test]
fn given_azure_without_endpoint_when_creating_classifier_then_fails() {
    let mut settings = openai_settings("key");
    settings.provider = "azure".to_string();

    assert!(ClassifierFactory::create(&settings, &ScaffoldConfig::default()).is_err());
}
