use gigatron::AudioFifo;
use rodio::{OutputStream, Sink, Source};
use std::sync::Arc;
use std::time::Duration;

/// The signal-recovery pipeline emits one sample per scanline, and the
/// machine produces 31,250 scanlines per second.
const SAMPLE_RATE_HERTZ: u32 = 31_250;

/// Simple struct to represent an audio stream fed from the emulator's
/// sample FIFO, with a sink that can be paused and resumed as required.
pub(crate) struct Audio {
    _stream: OutputStream,
    sink: Sink,
}

impl Audio {
    /// Constructor that returns an [Audio] instance draining the supplied
    /// FIFO.  Playback starts immediately.
    pub(crate) fn new(fifo: Arc<AudioFifo>) -> Self {
        let (_stream, stream_handle) = OutputStream::try_default().unwrap();
        let sink: Sink = Sink::try_new(&stream_handle).unwrap();
        let audio: Audio = Audio { _stream, sink };
        audio.sink.append(FifoSource { fifo, held: 0.0 });
        audio.sink.play();
        audio
    }

    /// Resumes playback if the stream is paused
    pub(crate) fn play(&self) {
        self.sink.play();
    }

    /// Pauses playback if the stream is playing
    pub(crate) fn pause(&self) {
        self.sink.pause();
    }
}

/// A rodio source that pulls sample bytes out of the FIFO, treating them
/// as signed 8-bit PCM.  On underrun the last sample is held rather than
/// snapping to zero, which would click audibly.
struct FifoSource {
    fifo: Arc<AudioFifo>,
    held: f32,
}

impl Iterator for FifoSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if let Some(sample) = self.fifo.pop() {
            self.held = (sample as i8) as f32 / 128.0;
        }
        Some(self.held)
    }
}

impl Source for FifoSource {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE_HERTZ
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}
