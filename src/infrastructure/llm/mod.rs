mod classifier_factory;
mod openai_classifier;
mod scaffold_classifier;

pub use classifier_factory::ClassifierFactory;
pub use openai_classifier::{
    OpenAiComplaintClassifier, build_system_prompt, create_complaint_classifier,
    parse_classifier_content,
};
pub use scaffold_classifier::ScaffoldClassifier;
