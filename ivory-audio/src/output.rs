//! Audio output via cpal.

use std::sync::{Arc, Mutex};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, FromSample, Sample, SampleFormat, SizedSample, Stream, StreamConfig};

use crate::error::AudioError;
use crate::voices::VoiceTable;

/// Open the default output device and start a stream that renders `voices`.
///
/// The voice table's output rate is updated to the device rate before the
/// stream starts.
pub fn open_default_output(voices: Arc<Mutex<VoiceTable>>) -> Result<Stream, AudioError> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or(AudioError::NoOutputDevice)?;

    let supported = device.default_output_config()?;
    let sample_format = supported.sample_format();
    let config: StreamConfig = supported.into();

    if let Ok(mut table) = voices.lock() {
        table.set_output_rate(config.sample_rate.0);
    }

    log::info!(
        target: "audio",
        "output device {} at {} Hz, {} channels, {:?}",
        device.name().unwrap_or_else(|_| "<unnamed>".to_string()),
        config.sample_rate.0,
        config.channels,
        sample_format
    );

    let stream = match sample_format {
        SampleFormat::F32 => build_stream::<f32>(&device, &config, voices)?,
        SampleFormat::I16 => build_stream::<i16>(&device, &config, voices)?,
        SampleFormat::U16 => build_stream::<u16>(&device, &config, voices)?,
        other => return Err(AudioError::UnsupportedFormat(other)),
    };
    stream.play()?;
    Ok(stream)
}

fn build_stream<T>(
    device: &Device,
    config: &StreamConfig,
    voices: Arc<Mutex<VoiceTable>>,
) -> Result<Stream, AudioError>
where
    T: SizedSample + FromSample<f32>,
{
    let channels = config.channels as usize;
    let mut scratch: Vec<f32> = Vec::new();

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            scratch.resize(data.len(), 0.0);
            match voices.lock() {
                Ok(mut table) => table.render(&mut scratch, channels),
                Err(_) => scratch.fill(0.0),
            }
            for (out, &s) in data.iter_mut().zip(scratch.iter()) {
                *out = T::from_sample(s);
            }
        },
        |err| {
            log::error!(target: "audio", "output stream error: {}", err);
        },
        None,
    )?;
    Ok(stream)
}
