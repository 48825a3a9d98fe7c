//! Audio output device abstraction.
//!
//! [`AudioOutput`] is the seam between the playback controller and the
//! actual hardware. The production implementation, [`CpalOutput`], opens the
//! host's default output device through cpal; tests substitute an in-memory
//! output so controller behavior can be verified without a sound card.
//!
//! cpal streams are callback-driven and not `Send`, so a sink must be opened
//! on the thread that uses it. [`CpalSink`] bridges the controller's
//! blocking, chunk-at-a-time writes to the callback by pushing frames
//! through a bounded channel; a full channel blocks the writer, which paces
//! playback at the device's real-time rate.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SampleFormat, SizedSample, Stream, StreamConfig};
use crossbeam_channel::{bounded, Receiver, Sender};

use crate::error::{NoiseError, NoiseResult};

/// Frames buffered between the writer and the device callback.
const SINK_QUEUE_FRAMES: usize = 4096;

/// An open, playing audio sink.
pub trait AudioSink {
    /// Writes a chunk of PCM frames, blocking while the device catches up.
    fn write(&mut self, frames: &[i16]) -> NoiseResult<()>;

    /// Blocks until all written frames have been consumed by the device.
    fn drain(&mut self) -> NoiseResult<()> {
        Ok(())
    }
}

/// Factory for audio sinks.
///
/// Implementations must be shareable across threads; the sink itself is
/// opened on the worker thread that plays through it.
pub trait AudioOutput: Send + Sync {
    /// Opens a mono sink at the given sample rate.
    fn open(&self, sample_rate: u32) -> NoiseResult<Box<dyn AudioSink>>;
}

/// Output backed by the system's default cpal device.
#[derive(Debug, Default)]
pub struct CpalOutput;

impl AudioOutput for CpalOutput {
    fn open(&self, sample_rate: u32) -> NoiseResult<Box<dyn AudioSink>> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| NoiseError::device("no output device available"))?;

        let supported = device
            .default_output_config()
            .map_err(|e| NoiseError::device(format!("failed to query output config: {e}")))?;

        let config = StreamConfig {
            channels: 1,
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let (sender, receiver) = bounded::<i16>(SINK_QUEUE_FRAMES);
        let error: Arc<Mutex<Option<String>>> = Arc::new(Mutex::new(None));

        let stream = match supported.sample_format() {
            SampleFormat::I16 => build_stream::<i16>(&device, &config, receiver, error.clone()),
            SampleFormat::U16 => build_stream::<u16>(&device, &config, receiver, error.clone()),
            SampleFormat::F32 => build_stream::<f32>(&device, &config, receiver, error.clone()),
            format => Err(NoiseError::device(format!(
                "unsupported sample format: {format:?}"
            ))),
        }?;

        stream
            .play()
            .map_err(|e| NoiseError::device(format!("failed to start stream: {e}")))?;

        Ok(Box::new(CpalSink {
            sender,
            error,
            _stream: stream,
        }))
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    receiver: Receiver<i16>,
    error: Arc<Mutex<Option<String>>>,
) -> NoiseResult<Stream>
where
    T: SizedSample + FromSample<i16>,
{
    let stream = device
        .build_output_stream(
            config,
            move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
                for slot in data.iter_mut() {
                    // Underrun plays silence rather than stalling the callback
                    let frame = receiver.try_recv().unwrap_or(0);
                    *slot = T::from_sample(frame);
                }
            },
            move |err| {
                let mut slot = error.lock().unwrap_or_else(|e| e.into_inner());
                *slot = Some(err.to_string());
            },
            None,
        )
        .map_err(|e| NoiseError::device(format!("failed to build output stream: {e}")))?;

    Ok(stream)
}

/// Sink feeding a live cpal stream through a bounded frame channel.
struct CpalSink {
    sender: Sender<i16>,
    error: Arc<Mutex<Option<String>>>,
    _stream: Stream,
}

impl CpalSink {
    fn check_stream_error(&self) -> NoiseResult<()> {
        let slot = self.error.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_ref() {
            Some(message) => Err(NoiseError::device(message.clone())),
            None => Ok(()),
        }
    }
}

impl AudioSink for CpalSink {
    fn write(&mut self, frames: &[i16]) -> NoiseResult<()> {
        self.check_stream_error()?;
        for &frame in frames {
            self.sender
                .send(frame)
                .map_err(|_| NoiseError::device("output stream closed"))?;
        }
        Ok(())
    }

    fn drain(&mut self) -> NoiseResult<()> {
        while !self.sender.is_empty() {
            self.check_stream_error()?;
            std::thread::sleep(Duration::from_millis(5));
        }
        // Let the last buffered callback period play out
        std::thread::sleep(Duration::from_millis(50));
        self.check_stream_error()
    }
}
