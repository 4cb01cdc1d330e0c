mod azure_whisper_engine;
mod disabled_engine;
mod openai_whisper_engine;
mod transcription_engine_factory;
mod whisper_http;

pub use azure_whisper_engine::AzureWhisperEngine;
pub use disabled_engine::DisabledTranscriptionEngine;
pub use openai_whisper_engine::OpenAiWhisperEngine;
pub use transcription_engine_factory::TranscriptionEngineFactory;
