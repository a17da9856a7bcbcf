use super::*;

/// Tests that only supported audio files are listed, sorted by name.
///
/// Expected: Ok with the mp3, ogg and wav files
#[test]
fn lists_supported_files_sorted() -> Result<(), AppError> {
    let dir = audio_dir(&["tavern.ogg", "readme.txt", "battle.mp3", "rain.wav"]);
    fs::create_dir(dir.path().join("drafts.mp3")).unwrap();

    let service = AudioService::load(dir.path().to_path_buf());
    let files = service.list_files()?;

    assert!(service.is_enabled());
    assert_eq!(files, vec!["battle.mp3", "rain.wav", "tavern.ogg"]);

    Ok(())
}

/// Tests autocomplete prefix matching of file names.
///
/// Expected: Ok with only the files starting with the partial, ignoring case
#[test]
fn autocompletes_by_prefix_ignoring_case() -> Result<(), AppError> {
    let dir = audio_dir(&["Tavern.ogg", "tavern_night.mp3", "battle.mp3"]);

    let service = AudioService::load(dir.path().to_path_buf());
    let files = service.autocomplete_files("TAV")?;

    assert_eq!(files, vec!["Tavern.ogg", "tavern_night.mp3"]);

    Ok(())
}

/// Tests that a missing audio directory disables audio commands.
///
/// Expected: Err(BadRequest) with the disabled message
#[test]
fn missing_directory_disables_audio() {
    let dir = tempfile::tempdir().unwrap();
    let service = AudioService::load(dir.path().join("does-not-exist"));

    assert!(!service.is_enabled());
    match service.ensure_enabled() {
        Err(AppError::BadRequest(msg)) => assert_eq!(msg, AUDIO_DISABLED_MESSAGE),
        other => panic!("expected BadRequest, got {:?}", other),
    }
}
