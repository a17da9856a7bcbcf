//! Background ambiance audio settings and file selection.

/// File extensions the player accepts, lowercase and including the dot.
pub const AUDIO_EXTENSIONS: [&str; 3] = [".mp3", ".wav", ".ogg"];

/// Smallest and largest volume a user may pick, in percent.
pub const MIN_VOLUME_PERCENT: u8 = 1;
pub const MAX_VOLUME_PERCENT: u8 = 100;

/// Per-guild player settings.
///
/// Settings survive between tracks, so a volume chosen before `/audio play` applies to
/// the next track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuildAudioSettings {
    /// Playback volume as a factor, `1.0` being the file's own volume.
    pub volume: f32,
    /// Whether a finished track starts over instead of disconnecting.
    pub repeat: bool,
}

impl Default for GuildAudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            repeat: false,
        }
    }
}

/// Whether a file name has one of the supported audio extensions.
///
/// The extension must match exactly, so `theme.MP3` is not picked up.
pub fn is_audio_file(file_name: &str) -> bool {
    AUDIO_EXTENSIONS
        .iter()
        .any(|ext| file_name.len() > ext.len() && file_name.ends_with(ext))
}

/// Keeps the audio files among `file_names`, sorted by name.
pub fn filter_audio_files<I>(file_names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut files: Vec<String> = file_names
        .into_iter()
        .filter(|name| is_audio_file(name))
        .collect();
    files.sort();
    files
}

/// Converts a volume percentage into the factor applied to the track.
///
/// Out of range percentages are clamped to `1..=100`.
pub fn volume_factor(percent: u8) -> f32 {
    f32::from(percent.clamp(MIN_VOLUME_PERCENT, MAX_VOLUME_PERCENT)) / 100.0
}
