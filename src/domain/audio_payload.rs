use base64::{Engine as _, engine::general_purpose};

const DATA_URI_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Recorded audio handed to the transcription adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AudioPayloadError {
    #[error("not a data uri")]
    NotDataUri,
    #[error("missing media type")]
    MissingMediaType,
    #[error("data uri must be base64 encoded")]
    NotBase64,
    #[error("invalid base64 payload: {0}")]
    InvalidEncoding(String),
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }

    /// Parses `data:<mime>;base64,<data>` as produced by browser recorders.
    pub fn from_data_uri(uri: &str) -> Result<Self, AudioPayloadError> {
        let rest = uri
            .trim()
            .strip_prefix(DATA_URI_PREFIX)
            .ok_or(AudioPayloadError::NotDataUri)?;
        let (header, data) = rest.split_once(',').ok_or(AudioPayloadError::NotDataUri)?;
        let media_type = header
            .strip_suffix(BASE64_MARKER)
            .ok_or(AudioPayloadError::NotBase64)?;

        // Recorders append codec parameters, e.g. audio/webm;codecs=opus.
        let media_type = media_type.split(';').next().unwrap_or_default().trim();
        if media_type.is_empty() {
            return Err(AudioPayloadError::MissingMediaType);
        }

        let bytes = general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|e| AudioPayloadError::InvalidEncoding(e.to_string()))?;

        Ok(Self::new(bytes, media_type.to_lowercase()))
    }

    /// File extension upstream speech APIs use to sniff the container format.
    pub fn file_extension(&self) -> &'static str {
        match self.media_type.as_str() {
            "audio/webm" | "video/webm" => "webm",
            "audio/ogg" | "audio/opus" => "ogg",
            "audio/mpeg" | "audio/mp3" => "mp3",
            "audio/mp4" | "audio/m4a" | "audio/x-m4a" => "m4a",
            "audio/flac" | "audio/x-flac" => "flac",
            _ => "wav",
        }
    }

    pub fn file_name(&self) -> String {
        format!("audio.{}", self.file_extension())
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
