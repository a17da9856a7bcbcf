use std::fs;

use tempfile::TempDir;

use crate::{
    error::AppError,
    model::audio::GuildAudioSettings,
    service::audio::{AudioService, AUDIO_DISABLED_MESSAGE},
};

mod list_files;
mod resolve;

/// Creates an audio directory holding the given (empty) files.
fn audio_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"").unwrap();
    }
    dir
}
