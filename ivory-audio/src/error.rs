use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("Cannot read sample {path}: {source}")]
    Wav {
        path: PathBuf,
        #[source]
        source: hound::Error,
    },

    #[error("Sample {0} contains no frames")]
    EmptySample(PathBuf),

    #[error("Sample {0} declares a sample rate of 0 Hz")]
    ZeroSampleRate(PathBuf),

    #[error("No output device available")]
    NoOutputDevice,

    #[error("Failed to get output config: {0}")]
    OutputConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("Unsupported output sample format: {0:?}")]
    UnsupportedFormat(cpal::SampleFormat),

    #[error("Failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("Failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}
