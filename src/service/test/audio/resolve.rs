use super::*;

/// Tests resolving a loaded file to its path inside the audio directory.
///
/// Expected: Ok(path)
#[test]
fn resolves_loaded_file() -> Result<(), AppError> {
    let dir = audio_dir(&["rain.wav"]);

    let service = AudioService::load(dir.path().to_path_buf());

    assert_eq!(service.resolve("rain.wav")?, dir.path().join("rain.wav"));

    Ok(())
}

/// Tests that names outside the loaded file list are refused.
///
/// Covers unknown files, unsupported extensions and paths leaving the directory.
///
/// Expected: Err(BadRequest)
#[test]
fn rejects_files_that_are_not_loaded() {
    let dir = audio_dir(&["rain.wav", "notes.txt"]);

    let service = AudioService::load(dir.path().to_path_buf());

    for file in ["thunder.mp3", "notes.txt", "../rain.wav"] {
        match service.resolve(file) {
            Err(AppError::BadRequest(msg)) => assert_eq!(
                msg,
                format!("\"{}\" is not an audio file that is loaded on the bot.", file)
            ),
            other => panic!("expected BadRequest for {}, got {:?}", file, other),
        }
    }
}
