//! strftime-style formatting of Vana'diel calendar fields
//!
//! # Directive grammar
//!
//! `%` + flags + width + conversion, where
//! - flags are any of `-` (no padding), `_` (space padding), `0` (zero padding),
//!   `^` and `#` (uppercase the result)
//! - width is a decimal minimum width; values are padded, never truncated
//! - conversion is one of `Y C y m d e j H k M S L N A w s n t %`, or one of
//!   the composites `F` (`%Y-%m-%d`), `T` and `X` (`%H:%M:%S`), `R` (`%H:%M`)
//!
//! Composites ignore their flags and width. Anything that does not parse as a
//! directive is copied to the output unchanged, so formatting never fails.
//!
//! # Example
//!
//! ```
//! use vanadiel_domain::VanaTime;
//!
//! let time = VanaTime::from_components(886, 3, 4, 5, 6, 7, 80_900).unwrap();
//! assert_eq!(time.strftime("%F %T.%3N %A"), "886-03-04 05:06:07.080 Darksday");
//! assert_eq!(time.strftime("%^A"), "DARKSDAY");
//! ```

use crate::fields::FieldSet;

/// Widths above this apply no padding.
const MAX_WIDTH: usize = 1024;

/// Digits in the microsecond field.
const USEC_DIGITS: usize = 6;

/// Formats calendar fields according to `format`.
///
/// `time` is the internal scalar the fields were computed from; `%s` prints it.
pub fn strftime(fields: &FieldSet, time: i64, format: &str) -> String {
    let mut out = String::with_capacity(format.len() + 16);
    let mut rest = format;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        match Directive::parse(rest) {
            Some((directive, len)) => {
                directive.render(fields, time, &mut out);
                rest = &rest[len..];
            }
            None => {
                // Not a directive: emit the '%' and keep scanning after it
                out.push('%');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

// ============================================================================
// Directive
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Padding {
    Default,
    None,
    Space,
    Zero,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Directive {
    padding: Padding,
    upcase: bool,
    /// `Some(0)` marks a width too large to honor
    width: Option<usize>,
    conversion: u8,
}

/// A resolved conversion value before padding
enum Value {
    Number(i64),
    /// Unsigned decimal digits
    Digits(String),
    Text(&'static str),
}

impl Directive {
    /// Parses a directive at the start of `input` (which begins with `%`).
    ///
    /// Returns the directive and its byte length, or `None` if the text is
    /// not a recognized directive.
    fn parse(input: &str) -> Option<(Self, usize)> {
        let bytes = input.as_bytes();
        let mut pos = 1;

        let mut padding = Padding::Default;
        let mut no_padding = false;
        let mut upcase = false;
        while let Some(&flag) = bytes.get(pos) {
            match flag {
                b'-' => no_padding = true,
                b'_' => padding = Padding::Space,
                b'0' => padding = Padding::Zero,
                b'^' | b'#' => upcase = true,
                _ => break,
            }
            pos += 1;
        }
        if no_padding {
            padding = Padding::None;
        }

        let digits_start = pos;
        while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
            pos += 1;
        }
        let width = if pos > digits_start {
            let width = input[digits_start..pos]
                .parse::<usize>()
                .ok()
                .filter(|w| *w <= MAX_WIDTH)
                .unwrap_or(0);
            Some(width)
        } else {
            None
        };

        let conversion = *bytes.get(pos)?;
        if !is_conversion(conversion) {
            return None;
        }

        Some((
            Self {
                padding,
                upcase,
                width,
                conversion,
            },
            pos + 1,
        ))
    }

    fn render(&self, fields: &FieldSet, time: i64, out: &mut String) {
        if let Some(expansion) = composite_expansion(self.conversion) {
            out.push_str(&strftime(fields, time, expansion));
            return;
        }

        let (value, default_pad, default_width) = self.resolve(fields, time);
        let (pad, width) = match self.padding {
            Padding::None => (' ', 0),
            Padding::Default => (default_pad, self.width.unwrap_or(default_width)),
            Padding::Space => (' ', self.width.unwrap_or(default_width)),
            Padding::Zero => ('0', self.width.unwrap_or(default_width)),
        };

        let mut piece = String::new();
        match value {
            // Zeros go between the sign and the digits
            Value::Number(n) if n < 0 && pad == '0' => {
                piece.push('-');
                pad_into(
                    &mut piece,
                    &n.unsigned_abs().to_string(),
                    width.saturating_sub(1),
                    pad,
                );
            }
            Value::Number(n) => pad_into(&mut piece, &n.to_string(), width, pad),
            Value::Digits(digits) => pad_into(&mut piece, &digits, width, pad),
            Value::Text(text) => pad_into(&mut piece, text, width, pad),
        }

        if self.upcase {
            piece = piece.to_uppercase();
        }
        out.push_str(&piece);
    }

    /// Returns the raw value with its default padding character and width.
    fn resolve(&self, fields: &FieldSet, time: i64) -> (Value, char, usize) {
        match self.conversion {
            b'Y' => (Value::Number(fields.year), '0', 0),
            b'C' => (Value::Number(fields.year.div_euclid(100)), '0', 0),
            b'y' => (Value::Number(fields.year.rem_euclid(100)), '0', 2),
            b'm' => (Value::Number(fields.month.into()), '0', 2),
            b'd' => (Value::Number(fields.day.into()), '0', 2),
            b'e' => (Value::Number(fields.day.into()), ' ', 2),
            b'j' => (Value::Number(fields.yday.into()), '0', 3),
            b'H' => (Value::Number(fields.hour.into()), '0', 2),
            b'k' => (Value::Number(fields.hour.into()), ' ', 2),
            b'M' => (Value::Number(fields.minute.into()), '0', 2),
            b'S' => (Value::Number(fields.second.into()), '0', 2),
            b'L' => self.sub_second(fields.usec, 3),
            b'N' => self.sub_second(fields.usec, USEC_DIGITS),
            b'A' => (Value::Text(fields.weekday.name()), ' ', 0),
            b'w' => (Value::Number(fields.weekday.index().into()), '0', 0),
            b's' => (Value::Number(time), '0', 0),
            b'n' => (Value::Text("\n"), ' ', 0),
            b't' => (Value::Text("\t"), ' ', 0),
            _ => (Value::Text("%"), ' ', 0),
        }
    }

    /// Keeps the leading `width` digits of the 6-digit microsecond value,
    /// extending with trailing zeros past six.
    fn sub_second(&self, usec: u32, default_digits: usize) -> (Value, char, usize) {
        let digits = self.width.filter(|w| *w > 0).unwrap_or(default_digits);
        let mut text = format!("{:0width$}", usec, width = USEC_DIGITS);
        if digits <= USEC_DIGITS {
            text.truncate(digits);
        } else {
            text.extend(std::iter::repeat('0').take(digits - USEC_DIGITS));
        }

        let trimmed = text.trim_start_matches('0');
        let value = if trimmed.is_empty() { "0" } else { trimmed };
        (Value::Digits(value.to_string()), '0', default_digits)
    }
}

fn is_conversion(c: u8) -> bool {
    matches!(
        c,
        b'Y' | b'C'
            | b'y'
            | b'm'
            | b'd'
            | b'e'
            | b'j'
            | b'H'
            | b'k'
            | b'M'
            | b'S'
            | b'L'
            | b'N'
            | b'A'
            | b'w'
            | b's'
            | b'n'
            | b't'
            | b'%'
            | b'F'
            | b'T'
            | b'X'
            | b'R'
    )
}

fn composite_expansion(c: u8) -> Option<&'static str> {
    match c {
        b'F' => Some("%Y-%m-%d"),
        b'T' | b'X' => Some("%H:%M:%S"),
        b'R' => Some("%H:%M"),
        _ => None,
    }
}

/// Left-pads `body` with `pad` up to `width` characters.
fn pad_into(out: &mut String, body: &str, width: usize, pad: char) {
    let len = body.chars().count();
    if width > len {
        out.extend(std::iter::repeat(pad).take(width - len));
    }
    out.push_str(body);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::compute_fields;

    fn render(time: i64, format: &str) -> String {
        strftime(&compute_fields(time), time, format)
    }

    mod parsing {
        use super::*;

        #[test]
        fn flags_width_and_conversion() {
            let (d, len) = Directive::parse("%_^10A tail").unwrap();
            assert_eq!(d.padding, Padding::Space);
            assert!(d.upcase);
            assert_eq!(d.width, Some(10));
            assert_eq!(d.conversion, b'A');
            assert_eq!(len, 6);
        }

        #[test]
        fn dash_wins_over_padding_flags() {
            let (d, _) = Directive::parse("%0-_5d").unwrap();
            assert_eq!(d.padding, Padding::None);
        }

        #[test]
        fn leading_zero_is_a_flag() {
            let (d, _) = Directive::parse("%06Y").unwrap();
            assert_eq!(d.padding, Padding::Zero);
            assert_eq!(d.width, Some(6));
        }

        #[test]
        fn unknown_conversion_is_rejected() {
            assert!(Directive::parse("%Q").is_none());
            assert!(Directive::parse("%-5").is_none());
            assert!(Directive::parse("%").is_none());
            assert!(Directive::parse("%é").is_none());
        }

        #[test]
        fn oversized_width_disables_padding() {
            let (d, _) = Directive::parse("%99999999999999999999999d").unwrap();
            assert_eq!(d.width, Some(0));
        }
    }

    mod rendering {
        use super::*;

        #[test]
        fn literal_pass_through() {
            assert_eq!(render(0, "plain text"), "plain text");
            assert_eq!(render(0, "100%"), "100%");
            assert_eq!(render(0, "%Q %-5Q"), "%Q %-5Q");
            assert_eq!(render(0, "%%F"), "%F");
            assert_eq!(render(0, "é%dé"), "é01é");
        }

        #[test]
        fn epoch_fields() {
            assert_eq!(render(0, "%Y-%m-%d %H:%M:%S.%N"), "1-01-01 00:00:00.000000");
            assert_eq!(render(0, "%A %w %j"), "Firesday 0 001");
        }

        #[test]
        fn negative_year_pads_after_sign() {
            let year_minus_one = -2 * crate::constants::ONE_YEAR;
            assert_eq!(render(year_minus_one, "%Y"), "-1");
            assert_eq!(render(year_minus_one, "%6Y"), "-00001");
            assert_eq!(render(year_minus_one, "%_6Y"), "    -1");
            assert_eq!(render(year_minus_one, "%y %C"), "99 -1");
        }

        #[test]
        fn negative_scalar() {
            assert_eq!(render(-1, "%s"), "-1");
            assert_eq!(render(-1, "%F %T"), "0-12-30 23:59:59");
        }

        #[test]
        fn oversized_width_renders_unpadded() {
            assert_eq!(render(0, "%99999999999999999999999d"), "1");
            assert_eq!(render(0, "%2000N"), "0");
        }
    }
}
