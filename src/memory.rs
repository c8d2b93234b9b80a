use crate::error::Error;
use crate::options::UndefinedReads;
use rand::Rng;
use std::fs;
use std::path::Path;

/// The number of 16-bit words in the program ROM.
pub const ROM_WORDS: usize = 0x10000;
/// The size of a full ROM image file (in bytes).
pub const ROM_IMAGE_SIZE_BYTES: usize = ROM_WORDS * 2;
/// The largest RAM size the machine supports (in bytes).
pub const MAX_RAM_SIZE_BYTES: usize = 0x10000;

/// An abstraction of the 16-bit-wide program ROM.
///
/// Each word holds an opcode in its low byte and the paired data byte in
/// its high byte.  The contents are immutable once loaded; the CPU only
/// ever fetches from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Rom {
    words: Vec<u16>,
}

impl Rom {
    /// Constructor that builds a [Rom] from a little-endian image: byte
    /// pairs are assembled into words, a short image fills the prefix with
    /// the remainder zero, and a long image is truncated.  Either size
    /// mismatch is reported as a warning, not an error.
    pub fn from_bytes(data: &[u8]) -> Rom {
        if data.len() != ROM_IMAGE_SIZE_BYTES {
            log::warn!(
                "invalid ROM image size {} (expected {} bytes); loading anyway",
                data.len(),
                ROM_IMAGE_SIZE_BYTES
            );
        }
        let mut words: Vec<u16> = vec![0; ROM_WORDS];
        for (word, pair) in words.iter_mut().zip(data.chunks_exact(2)) {
            *word = u16::from_le_bytes([pair[0], pair[1]]);
        }
        Rom { words }
    }

    /// Constructor that reads a ROM image from the file at the specified
    /// path, returning [Error::RomFile] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Rom, Error> {
        let data: Vec<u8> = fs::read(path).map_err(|_| Error::RomFile {
            path: path.display().to_string(),
        })?;
        Ok(Rom::from_bytes(&data))
    }

    /// Constructor that builds a [Rom] directly from words, zero-padded to
    /// the full address space.  Mostly useful for small hand-assembled
    /// programs.
    pub fn from_words(mut words: Vec<u16>) -> Rom {
        words.resize(ROM_WORDS, 0);
        Rom { words }
    }

    /// Returns the word at the specified fetch address.
    pub fn fetch(&self, pc: u16) -> u16 {
        self.words[pc as usize]
    }
}

/// An abstraction of the 8-bit-wide data RAM.
///
/// Accesses beyond the installed size are architecturally silent: writes
/// are discarded and reads return the undefined byte, which is zero unless
/// the undefined-read policy asked for a random per-run value.
#[derive(Clone, Debug, PartialEq)]
pub struct Ram {
    bytes: Vec<u8>,
    undef: u8,
}

impl Ram {
    /// Constructor that returns a zero-filled [Ram] of the specified size.
    /// The size must be a power of two no larger than
    /// [MAX_RAM_SIZE_BYTES]; anything else is [Error::InvalidRamSize].
    pub fn new(size: usize, undefined_reads: UndefinedReads) -> Result<Ram, Error> {
        if !size.is_power_of_two() || size > MAX_RAM_SIZE_BYTES {
            return Err(Error::InvalidRamSize { size });
        }
        let undef: u8 = match undefined_reads {
            UndefinedReads::Zero => 0,
            UndefinedReads::Random => rand::thread_rng().gen(),
        };
        Ok(Ram {
            bytes: vec![0; size],
            undef,
        })
    }

    /// Returns the byte at the specified address, or the undefined byte if
    /// the address lies beyond the installed size.
    pub fn read(&self, address: u16) -> u8 {
        match self.bytes.get(address as usize) {
            Some(byte) => *byte,
            None => self.undef,
        }
    }

    /// Writes the passed byte to the specified address.  Writes beyond the
    /// installed size are discarded.
    pub fn write(&mut self, address: u16, value: u8) {
        if let Some(byte) = self.bytes.get_mut(address as usize) {
            *byte = value;
        }
    }

    /// Fills the RAM with zero, as on a warm reset.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Returns the installed RAM size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}
