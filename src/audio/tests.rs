use super::SinkError;
use super::sink::open_decoder;
use std::fs;
use tempfile::tempdir;

#[test]
fn open_decoder_reports_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.mp3");

    let err = open_decoder(&path).err().unwrap();
    assert!(matches!(err, SinkError::Open { .. }));
    assert!(err.to_string().contains("missing.mp3"));
}

#[test]
fn open_decoder_reports_undecodable_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("garbage.mp3");
    fs::write(&path, b"definitely not audio").unwrap();

    let err = open_decoder(&path).err().unwrap();
    assert!(matches!(err, SinkError::Decode { .. }));
    assert!(err.to_string().starts_with("failed to decode"));
}
