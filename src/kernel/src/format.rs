//! Minimal `%`-escape formatter for console output.
//!
//! Takes a pre-typed argument list instead of variadic arguments and
//! supports the escapes the shell output actually uses: `%d`/`%u`
//! (decimal), `%x` (hex), `%s` (string) and `%c` (character). Any
//! unrecognized escape consumes the next argument and emits it as a raw
//! character code. Allocation-free.

use crate::console::Console;
use basickernel_hal::DisplaySurface;

/// Glyph emitted when an argument cannot be rendered as a character.
const PLACEHOLDER: u8 = 0xfe;

/// A typed formatting argument.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    /// Integer, rendered by `%d`, `%u` and `%x`.
    Int(i32),
    /// String slice, rendered by `%s`.
    Str(&'a str),
    /// Single character code, rendered by `%c`.
    Char(u8),
}

impl Arg<'_> {
    /// The argument interpreted as a raw character code.
    fn as_char_code(&self) -> u8 {
        match self {
            Arg::Int(n) => *n as u8,
            Arg::Char(c) => *c,
            Arg::Str(_) => PLACEHOLDER,
        }
    }
}

/// Scans `fmt` for `%` escapes and writes the result to the console.
///
/// Escapes beyond the supported set fall back to emitting the next
/// argument as a raw character code; escapes with no argument left emit
/// nothing. A trailing lone `%` is ignored.
pub fn format_print<S: DisplaySurface>(console: &mut Console<S>, fmt: &str, args: &[Arg]) {
    let mut args = args.iter();
    let mut bytes = fmt.bytes();

    while let Some(byte) = bytes.next() {
        if byte != b'%' {
            console.put_char(byte);
            continue;
        }
        let spec = match bytes.next() {
            Some(spec) => spec,
            None => break,
        };
        let arg = match args.next() {
            Some(arg) => arg,
            None => continue,
        };
        match spec {
            b'd' | b'u' => match arg {
                Arg::Int(n) => write_int(console, *n, 10),
                other => console.put_char(other.as_char_code()),
            },
            b'x' => match arg {
                Arg::Int(n) => write_int(console, *n, 16),
                other => console.put_char(other.as_char_code()),
            },
            b's' => match arg {
                Arg::Str(s) => console.write_str(s),
                _ => console.write_str("(null)"),
            },
            _ => console.put_char(arg.as_char_code()),
        }
    }
}

/// Writes an integer in the given base (10 or 16).
///
/// Base 10 renders negative values with a leading minus; base 16 renders
/// the two's-complement bit pattern.
fn write_int<S: DisplaySurface>(console: &mut Console<S>, value: i32, base: u32) {
    let mut digits = [0u8; 16];
    let mut count = 0;

    let negative = base == 10 && value < 0;
    let mut magnitude: u32 = if negative {
        value.unsigned_abs()
    } else {
        value as u32
    };

    loop {
        digits[count] = b"0123456789abcdef"[(magnitude % base) as usize];
        count += 1;
        magnitude /= base;
        if magnitude == 0 {
            break;
        }
    }

    if negative {
        console.put_char(b'-');
    }
    while count > 0 {
        count -= 1;
        console.put_char(digits[count]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::FakeSurface;

    fn render(fmt: &str, args: &[Arg]) -> String {
        let mut con = Console::new(FakeSurface::new());
        format_print(&mut con, fmt, args);
        con.surface().row_text(0)
    }

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(render("hello world", &[]), "hello world");
    }

    #[test]
    fn decimal_conversion() {
        assert_eq!(render("%d", &[Arg::Int(0)]), "0");
        assert_eq!(render("n=%d!", &[Arg::Int(42)]), "n=42!");
        assert_eq!(render("%d", &[Arg::Int(-17)]), "-17");
        assert_eq!(render("%d", &[Arg::Int(i32::MIN)]), "-2147483648");
    }

    #[test]
    fn unsigned_is_an_alias_for_decimal() {
        assert_eq!(render("%u", &[Arg::Int(1234)]), "1234");
    }

    #[test]
    fn hex_conversion_uses_bit_pattern() {
        assert_eq!(render("%x", &[Arg::Int(0xb8000)]), "b8000");
        assert_eq!(render("%x", &[Arg::Int(-1)]), "ffffffff");
    }

    #[test]
    fn string_and_char_conversions() {
        assert_eq!(
            render("%s %c", &[Arg::Str("ok"), Arg::Char(b'!')]),
            "ok !"
        );
    }

    #[test]
    fn non_string_under_s_prints_null_marker() {
        assert_eq!(render("%s", &[Arg::Int(7)]), "(null)");
    }

    #[test]
    fn unrecognized_escape_emits_raw_character_code() {
        assert_eq!(render("%q", &[Arg::Int(b'Z' as i32)]), "Z");
    }

    #[test]
    fn exhausted_arguments_emit_nothing() {
        assert_eq!(render("a%db", &[]), "ab");
    }

    #[test]
    fn trailing_percent_is_ignored() {
        assert_eq!(render("end%", &[]), "end");
    }
}
