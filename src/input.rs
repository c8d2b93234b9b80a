//! Input-port encoding.
//!
//! The input port carries one active-low bit per game-controller button.
//! A handful of keyboard codes can override the whole byte while a key is
//! held, which is how the ROM's loader and terminal applications receive
//! ASCII.

/// Code sent while Ctrl-C is held.
pub const KEY_CTRL_C: u8 = 0x03;
/// Code sent while Tab is held.
pub const KEY_TAB: u8 = 0x09;
/// Code sent while Enter is held.
pub const KEY_ENTER: u8 = 0x0A;
/// Code sent while Backspace or Delete is held.
pub const KEY_DELETE: u8 = 0x7F;

/// Returns the code for a function key, or `None` for a number outside
/// F1..F12.
pub fn function_key(number: u8) -> Option<u8> {
    match number {
        1..=12 => Some(0xBF + number),
        _ => None,
    }
}

/// An enum with a variant for each game-controller button, carrying its
/// input-port bit position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Button {
    Right,
    Left,
    Down,
    Up,
    Start,
    Select,
    B,
    A,
}

impl Button {
    /// Returns the button's input-port bit mask.
    fn mask(&self) -> u8 {
        match self {
            Button::Right => 1 << 0,
            Button::Left => 1 << 1,
            Button::Down => 1 << 2,
            Button::Up => 1 << 3,
            Button::Start => 1 << 4,
            Button::Select => 1 << 5,
            Button::B => 1 << 6,
            Button::A => 1 << 7,
        }
    }
}

/// An abstraction of the state the host is driving onto the input port.
///
/// Button state accumulates as press/release events arrive; a keyboard
/// override replaces the whole byte while set.  [encode()](InputPort::encode)
/// produces the value for the CPU's `live_input` field.
#[derive(Default)]
pub struct InputPort {
    /// Held buttons, one bit each, active high internally
    buttons: u8,
    /// Keyboard code overriding the controller byte, while a key is held
    key_override: Option<u8>,
}

impl InputPort {
    /// Constructor that returns an [InputPort] with nothing held.
    pub fn new() -> Self {
        InputPort::default()
    }

    /// Records a button press or release.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if pressed {
            self.buttons |= button.mask();
        } else {
            self.buttons &= !button.mask();
        }
    }

    /// Sets or clears the keyboard override code.
    pub fn set_key_override(&mut self, code: Option<u8>) {
        self.key_override = code;
    }

    /// Returns the input-port byte: the override code if one is held,
    /// otherwise the button bits negated (the port is active low, so an
    /// idle controller reads 0xFF).
    pub fn encode(&self) -> u8 {
        match self.key_override {
            Some(code) => code,
            None => !self.buttons,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_port_reads_all_ones() {
        assert_eq!(InputPort::new().encode(), 0xFF);
    }

    #[test]
    fn test_buttons_clear_their_active_low_bits() {
        let mut port = InputPort::new();
        port.set_button(Button::Right, true);
        assert_eq!(port.encode(), 0xFE);
        port.set_button(Button::A, true);
        assert_eq!(port.encode(), 0x7E);
        port.set_button(Button::Right, false);
        assert_eq!(port.encode(), 0x7F);
    }

    #[test]
    fn test_key_override_replaces_controller_byte() {
        let mut port = InputPort::new();
        port.set_button(Button::Up, true);
        port.set_key_override(Some(KEY_ENTER));
        assert_eq!(port.encode(), 0x0A);
        // Releasing the key restores the held button bits
        port.set_key_override(None);
        assert_eq!(port.encode(), 0xF7);
    }

    #[test]
    fn test_function_key_codes() {
        assert_eq!(function_key(1), Some(0xC0));
        assert_eq!(function_key(12), Some(0xCB));
        assert_eq!(function_key(0), None);
        assert_eq!(function_key(13), None);
    }
}
