use railmadad::domain::{AudioPayload, AudioPayloadError};

#[test]
fn given_webm_data_uri_when_parsing_then_decodes_bytes_and_media_type() {
    let payload = AudioPayload::from_data_uri("data:audio/webm;base64,aGVsbG8=").unwrap();

    assert_eq!(payload.bytes, b"hello");
    assert_eq!(payload.media_type, "audio/webm");
    assert_eq!(payload.file_name(), "audio.webm");
}

#[test]
fn given_codec_parameters_when_parsing_then_strips_them_from_media_type() {
    let payload =
        AudioPayload::from_data_uri("data:audio/webm;codecs=opus;base64,aGVsbG8=").unwrap();
    assert_eq!(payload.media_type, "audio/webm");
}

#[test]
fn given_plain_url_when_parsing_then_rejects_as_not_data_uri() {
    assert_eq!(
        AudioPayload::from_data_uri("https://example.com/a.wav"),
        Err(AudioPayloadError::NotDataUri)
    );
}

#[test]
fn given_non_base64_data_uri_when_parsing_then_rejects() {
    assert_eq!(
        AudioPayload::from_data_uri("data:audio/wav,raw"),
        Err(AudioPayloadError::NotBase64)
    );
}

#[test]
fn given_missing_media_type_when_parsing_then_rejects() {
    assert_eq!(
        AudioPayload::from_data_uri("data:;base64,aGVsbG8="),
        Err(AudioPayloadError::MissingMediaType)
    );
}

#[test]
fn given_corrupt_base64_when_parsing_then_returns_encoding_error() {
    assert!(matches!(
        AudioPayload::from_data_uri("data:audio/wav;base64,@@@"),
        Err(AudioPayloadError::InvalidEncoding(_))
    ));
}

#[test]
fn given_unknown_media_type_when_naming_file_then_defaults_to_wav() {
    let payload = AudioPayload::new(vec![1, 2, 3], "application/octet-stream");
    assert_eq!(payload.file_extension(), "wav");
}
