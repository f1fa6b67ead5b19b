use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, Cursor};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::config::AudioConfig;

/// Looping background track requested by a game.
#[derive(Debug, Clone, PartialEq)]
pub struct MusicTrack {
    pub path: &'static str,
    pub volume: f32,
}

struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

/// rodio playback; falls back to silent mode when no device is available.
pub struct AudioEngine {
    root: PathBuf,
    volume: f32,
    output: Option<AudioOutput>,
    clips: HashMap<&'static str, Arc<[u8]>>,
}

impl AudioEngine {
    pub fn new(root: impl Into<PathBuf>, config: &AudioConfig) -> Self {
        let root = root.into();
        if !config.enabled {
            tracing::info!("audio disabled by config");
            return Self::silent(root);
        }

        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                root,
                volume: config.volume,
                output: Some(AudioOutput {
                    _stream: stream,
                    handle,
                    music: None,
                }),
                clips: HashMap::new(),
            },
            Err(err) => {
                tracing::warn!(%err, "no audio output device, running muted");
                Self::silent(root)
            }
        }
    }

    pub fn silent(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            volume: 0.0,
            output: None,
            clips: HashMap::new(),
        }
    }

    pub fn play_music(&mut self, track: &MusicTrack) {
        let Some(output) = self.output.as_mut() else {
            tracing::trace!("audio engine in silent mode");
            return;
        };
        let path = self.root.join(track.path);
        match start_loop(&output.handle, &path, track.volume) {
            Ok(sink) => {
                tracing::info!(path = %path.display(), "music started");
                output.music = Some(sink);
            }
            Err(err) => tracing::warn!(path = %path.display(), "{err:#}"),
        }
    }

    /// Plays a one-shot effect; the clip bytes are cached after first use.
    pub fn play_effect(&mut self, key: &'static str) {
        if self.output.is_none() {
            tracing::trace!(%key, "audio engine in silent mode");
            return;
        }
        let bytes = match self.clip(key) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%key, "{err:#}");
                return;
            }
        };
        let Some(output) = self.output.as_ref() else {
            return;
        };
        if let Err(err) = play_once(&output.handle, bytes, self.volume) {
            tracing::warn!(%key, "{err:#}");
        }
    }

    fn clip(&mut self, key: &'static str) -> Result<Arc<[u8]>> {
        if let Some(bytes) = self.clips.get(key) {
            return Ok(bytes.clone());
        }
        let path = self.root.join(key);
        let bytes: Arc<[u8]> = fs::read(&path)
            .with_context(|| format!("failed to read sound {}", path.display()))?
            .into();
        self.clips.insert(key, bytes.clone());
        Ok(bytes)
    }
}

fn start_loop(handle: &OutputStreamHandle, path: &Path, volume: f32) -> Result<Sink> {
    let file = File::open(path).context("failed to open music file")?;
    let source = Decoder::new_looped(BufReader::new(file)).context("failed to decode music")?;
    let sink = Sink::try_new(handle).context("failed to create music sink")?;
    sink.set_volume(volume);
    sink.append(source);
    Ok(sink)
}

fn play_once(handle: &OutputStreamHandle, bytes: Arc<[u8]>, volume: f32) -> Result<()> {
    let source = Decoder::new(Cursor::new(bytes)).context("failed to decode sound")?;
    let sink = Sink::try_new(handle).context("failed to create effect sink")?;
    sink.set_volume(volume);
    sink.append(source);
    sink.detach();
    Ok(())
}
