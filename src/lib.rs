mod cpu;
mod disasm;
mod error;
mod fifo;
mod input;
mod instruction;
mod memory;
mod options;
mod video;

// Re-exports
pub use crate::cpu::Cpu;
pub use crate::disasm::{disassemble, disassemble_into};
pub use crate::error::Error;
pub use crate::fifo::AudioFifo;
pub use crate::fifo::MIN_AUDIO_FIFO_CAPACITY;
pub use crate::input::{function_key, Button, InputPort};
pub use crate::input::{KEY_CTRL_C, KEY_DELETE, KEY_ENTER, KEY_TAB};
pub use crate::instruction::{AluOp, Bus, Condition, Mode, Op, Target};
pub use crate::memory::{Ram, Rom};
pub use crate::memory::{MAX_RAM_SIZE_BYTES, ROM_IMAGE_SIZE_BYTES, ROM_WORDS};
pub use crate::options::{AudioSource, Options, UndefinedReads};
pub use crate::options::{DEFAULT_RAM_SIZE_BYTES, EXPANDED_RAM_SIZE_BYTES};
pub use crate::video::{Vga, SCREEN_HEIGHT, SCREEN_WIDTH};
