use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

/// The smallest audio FIFO capacity (in bytes).
pub const MIN_AUDIO_FIFO_CAPACITY: usize = 4096;

/// A single-producer single-consumer ring buffer of audio sample bytes.
///
/// The emulator thread pushes one byte per scanline; the audio callback
/// thread drains them.  The two sides never share an index: the producer
/// owns `end` and the consumer owns `start`, each published with a release
/// store and observed with an acquire load, so a sample byte is always
/// visible to the consumer before the index that announces it.  The slots
/// themselves are atomic bytes, which keeps the whole structure free of
/// unsafe code.
///
/// Both sides take `&self`; the struct is shared behind an `Arc`.
pub struct AudioFifo {
    buffer: Vec<AtomicU8>,
    mask: usize,
    /// Consumer index (next slot to pop)
    start: AtomicUsize,
    /// Producer index (next slot to fill)
    end: AtomicUsize,
}

impl AudioFifo {
    /// Constructor that returns an empty [AudioFifo].  The capacity is
    /// rounded up to the next power of two, with a floor of
    /// [MIN_AUDIO_FIFO_CAPACITY].
    pub fn new(capacity: usize) -> Self {
        let capacity: usize = capacity.max(MIN_AUDIO_FIFO_CAPACITY).next_power_of_two();
        let mut buffer: Vec<AtomicU8> = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || AtomicU8::new(0));
        AudioFifo {
            mask: capacity - 1,
            buffer,
            start: AtomicUsize::new(0),
            end: AtomicUsize::new(0),
        }
    }

    /// Pushes one sample byte.  Producer side only.  Returns false if the
    /// ring is full, in which case the sample is dropped; the consumer
    /// simply falls behind by one scanline.
    pub fn push(&self, sample: u8) -> bool {
        let end: usize = self.end.load(Ordering::Relaxed);
        let start: usize = self.start.load(Ordering::Acquire);
        if end.wrapping_sub(start) == self.buffer.len() {
            return false;
        }
        self.buffer[end & self.mask].store(sample, Ordering::Relaxed);
        // Publishing the new end index releases the slot write above
        self.end.store(end.wrapping_add(1), Ordering::Release);
        true
    }

    /// Pops the oldest sample byte, or `None` if the ring is empty.
    /// Consumer side only.
    pub fn pop(&self) -> Option<u8> {
        let start: usize = self.start.load(Ordering::Relaxed);
        let end: usize = self.end.load(Ordering::Acquire);
        if start == end {
            return None;
        }
        let sample: u8 = self.buffer[start & self.mask].load(Ordering::Relaxed);
        self.start.store(start.wrapping_add(1), Ordering::Release);
        Some(sample)
    }

    /// Returns the number of samples currently buffered.
    pub fn len(&self) -> usize {
        self.end
            .load(Ordering::Acquire)
            .wrapping_sub(self.start.load(Ordering::Acquire))
    }

    /// Returns true if no samples are buffered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the ring capacity in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }
}
