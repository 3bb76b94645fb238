//! Polling PS/2 keyboard driver.
//!
//! Translates set 1 scancodes from the keyboard controller into ASCII,
//! tracking shift state across reads. Input is polled, not interrupt
//! driven: [`Keyboard::read_char`] spins on the controller status port
//! until a byte is pending, then consumes exactly one scancode.

use basickernel_hal::PortIo;

/// Keyboard controller data port.
pub const DATA_PORT: u16 = 0x60;

/// Keyboard controller status port.
pub const STATUS_PORT: u16 = 0x64;

/// Status bit: output buffer full, a scancode is ready to read.
const OUTPUT_FULL: u8 = 0x01;

/// Press scancodes for the two physical shift keys.
const LEFT_SHIFT: u8 = 0x2a;
const RIGHT_SHIFT: u8 = 0x36;

/// Release scancodes for the two physical shift keys.
const LEFT_SHIFT_RELEASE: u8 = 0xaa;
const RIGHT_SHIFT_RELEASE: u8 = 0xb6;

/// Key release events have the high bit set.
const RELEASE_BIT: u8 = 0x80;

/// Scancode set 1 to ASCII for a US QWERTY layout.
///
/// Zero means the scancode has no printable mapping. Never mutated.
#[rustfmt::skip]
static SCANCODE_MAP: [u8; 128] = [
    0,  27, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'0',
    b'-', b'=', 0x08, b'\t', b'q', b'w', b'e', b'r', b't', b'y', b'u',
    b'i', b'o', b'p', b'[', b']', b'\n', 0, b'a', b's', b'd', b'f', b'g',
    b'h', b'j', b'k', b'l', b';', b'\'', b'`', 0, b'\\', b'z', b'x', b'c',
    b'v', b'b', b'n', b'm', b',', b'.', b'/', 0, b'*', 0, b' ', 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    b'-', 0, 0, 0, b'+', 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
];

/// Polling keyboard driver over a port I/O capability.
///
/// Owns the shift modifier flag, which persists across reads.
pub struct Keyboard<P: PortIo> {
    ports: P,
    shift: bool,
}

impl<P: PortIo> Keyboard<P> {
    /// Creates a keyboard driver over the given ports.
    pub fn new(ports: P) -> Self {
        Keyboard {
            ports,
            shift: false,
        }
    }

    /// Initializes the keyboard. Polling mode needs no setup.
    pub fn init(&mut self) {}

    /// Reports whether a scancode is pending.
    ///
    /// The status port must be checked before every data port read;
    /// reading data with nothing pending is undefined.
    fn available(&mut self) -> bool {
        self.ports.read_byte(STATUS_PORT) & OUTPUT_FULL != 0
    }

    /// Blocks until a scancode arrives and translates it.
    ///
    /// Returns `None` when the event produced no character (key releases,
    /// shift presses, unmapped scancodes); callers keep polling on `None`,
    /// it is neither an error nor end-of-input.
    pub fn read_char(&mut self) -> Option<u8> {
        while !self.available() {
            core::hint::spin_loop();
        }
        let scancode = self.ports.read_byte(DATA_PORT);
        self.translate(scancode)
    }

    /// Applies press/release and shift handling to one scancode.
    fn translate(&mut self, scancode: u8) -> Option<u8> {
        if scancode & RELEASE_BIT != 0 {
            if scancode == LEFT_SHIFT_RELEASE || scancode == RIGHT_SHIFT_RELEASE {
                self.shift = false;
            }
            // Release events never produce a character.
            return None;
        }

        if scancode == LEFT_SHIFT || scancode == RIGHT_SHIFT {
            self.shift = true;
            return None;
        }

        let c = SCANCODE_MAP[scancode as usize];
        if c == 0 {
            return None;
        }
        Some(if self.shift { shifted(c) } else { c })
    }

    /// Whether a shift key is currently held.
    pub fn shift_active(&self) -> bool {
        self.shift
    }
}

/// Maps an unshifted character to its shifted glyph.
///
/// Lowercase letters are uppercased; digits and punctuation follow the US
/// layout; anything else passes through unchanged.
fn shifted(c: u8) -> u8 {
    match c {
        b'a'..=b'z' => c - 32,
        b'1' => b'!',
        b'2' => b'@',
        b'3' => b'#',
        b'4' => b'$',
        b'5' => b'%',
        b'6' => b'^',
        b'7' => b'&',
        b'8' => b'*',
        b'9' => b'(',
        b'0' => b')',
        b'-' => b'_',
        b'=' => b'+',
        b'[' => b'{',
        b']' => b'}',
        b';' => b':',
        b'\'' => b'"',
        b'\\' => b'|',
        b',' => b'<',
        b'.' => b'>',
        b'/' => b'?',
        b'`' => b'~',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::ScriptedPorts;

    fn keyboard(scancodes: &[u8]) -> Keyboard<ScriptedPorts> {
        Keyboard::new(ScriptedPorts::new(scancodes))
    }

    #[test]
    fn unshifted_lookup_returns_table_value() {
        let mut kbd = keyboard(&[0x10, 0x1e, 0x02, 0x39]);
        assert_eq!(kbd.read_char(), Some(b'q'));
        assert_eq!(kbd.read_char(), Some(b'a'));
        assert_eq!(kbd.read_char(), Some(b'1'));
        assert_eq!(kbd.read_char(), Some(b' '));
    }

    #[test]
    fn shift_uppercases_letters() {
        let mut kbd = keyboard(&[LEFT_SHIFT, 0x10, LEFT_SHIFT_RELEASE, 0x10]);
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), Some(b'Q'));
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), Some(b'q'));
    }

    #[test]
    fn shift_remaps_digits_and_punctuation() {
        let mut kbd = keyboard(&[RIGHT_SHIFT, 0x02, 0x0b, 0x29, 0x35]);
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), Some(b'!'));
        assert_eq!(kbd.read_char(), Some(b')'));
        assert_eq!(kbd.read_char(), Some(b'~'));
        assert_eq!(kbd.read_char(), Some(b'?'));
    }

    #[test]
    fn shift_press_and_release_produce_no_character() {
        let mut kbd = keyboard(&[LEFT_SHIFT, LEFT_SHIFT_RELEASE]);
        assert_eq!(kbd.read_char(), None);
        assert!(kbd.shift_active());
        assert_eq!(kbd.read_char(), None);
        assert!(!kbd.shift_active());
    }

    #[test]
    fn ordinary_release_is_ignored_and_keeps_shift_state() {
        let mut kbd = keyboard(&[LEFT_SHIFT, 0x10 | RELEASE_BIT, 0x10]);
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), None);
        assert!(kbd.shift_active());
        assert_eq!(kbd.read_char(), Some(b'Q'));
    }

    #[test]
    fn unmapped_scancode_produces_no_character() {
        // 0x3b is F1, which has no entry in the table.
        let mut kbd = keyboard(&[0x3b, 0x10]);
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), Some(b'q'));
    }

    #[test]
    fn read_char_spins_until_status_reports_ready() {
        let mut kbd = Keyboard::new(ScriptedPorts::new(&[0x10]).with_stall(3));
        assert_eq!(kbd.read_char(), Some(b'q'));
    }

    #[test]
    fn shift_passes_through_uncovered_characters() {
        // Enter maps to newline, which the shift tables do not cover.
        let mut kbd = keyboard(&[LEFT_SHIFT, 0x1c]);
        assert_eq!(kbd.read_char(), None);
        assert_eq!(kbd.read_char(), Some(b'\n'));
    }
}
