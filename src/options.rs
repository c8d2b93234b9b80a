use crate::error::Error;
use serde_derive::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The RAM size of the standard machine (in bytes).
pub const DEFAULT_RAM_SIZE_BYTES: usize = 0x8000;
/// The RAM size of the expanded machine (in bytes).
pub const EXPANDED_RAM_SIZE_BYTES: usize = 0x10000;

/// An enum selecting which register feeds the per-scanline audio sample.
///
/// The hardware drives its DAC from the extended output register, which is
/// the default here.  Sampling the accumulator directly is kept as a
/// compatibility mode for ROMs written against earlier emulators.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AudioSource {
    /// High nibble of the extended output register, low nibble zero
    Xout,
    /// The raw accumulator value
    Acc,
}

/// An enum selecting what a RAM read beyond the installed size returns.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum UndefinedReads {
    /// Always return zero
    Zero,
    /// Return one random byte drawn at start-up, to expose programs that
    /// rely on uninitialised memory
    Random,
}

/// A struct to allow specification of emulator start-up parameters.
///
/// An instance is passed to [Cpu::new()](crate::Cpu::new) when building the
/// machine, and can be persisted to and restored from a JSON file so a
/// configuration survives between sessions.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Options {
    pub ram_size_bytes: usize,
    pub audio_source: AudioSource,
    pub undefined_reads: UndefinedReads,
}

impl Default for Options {
    /// Constructor that returns an [Options] instance matching the standard
    /// 32K machine.
    fn default() -> Self {
        Options {
            ram_size_bytes: DEFAULT_RAM_SIZE_BYTES,
            audio_source: AudioSource::Xout,
            undefined_reads: UndefinedReads::Zero,
        }
    }
}

impl Options {
    /// Constructs an [Options] instance from the JSON file at the specified
    /// path, returning [Error::OptionsFile] if the file cannot be read or
    /// parsed.
    pub fn load_from_file(path: &Path) -> Result<Options, Error> {
        let error = || Error::OptionsFile {
            path: path.display().to_string(),
        };
        let text: String = fs::read_to_string(path).map_err(|_| error())?;
        serde_json::from_str(&text).map_err(|_| error())
    }

    /// Serialises this instance as JSON to the specified path, returning
    /// [Error::OptionsFile] on any I/O or serialisation failure.
    pub fn save_to_file(&self, path: &Path) -> Result<(), Error> {
        let error = || Error::OptionsFile {
            path: path.display().to_string(),
        };
        let text: String = serde_json::to_string_pretty(self).map_err(|_| error())?;
        fs::write(path, text).map_err(|_| error())
    }
}
