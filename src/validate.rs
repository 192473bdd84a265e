//! Total numeric-input validation.
//!
//! Every input either parses into an `f64` or is reported as invalid; nothing
//! here panics or returns an error.

use std::borrow::Cow;

/// Outcome of [`validate_input`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    Valid(f64),
    Invalid,
}

impl Parsed {
    pub fn is_valid(&self) -> bool {
        matches!(self, Parsed::Valid(_))
    }

    pub fn value(&self) -> Option<f64> {
        match *self {
            Parsed::Valid(value) => Some(value),
            Parsed::Invalid => None,
        }
    }

    /// The `(is_valid, value)` pair form.
    pub fn into_pair(self) -> (bool, Option<f64>) {
        (self.is_valid(), self.value())
    }
}

impl From<Option<f64>> for Parsed {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Parsed::Invalid, Parsed::Valid)
    }
}

/// Scalar-like values that may be interpreted as a floating-point number.
pub trait NumericInput {
    fn to_f64(&self) -> Option<f64>;
}

impl NumericInput for str {
    fn to_f64(&self) -> Option<f64> {
        parse_float_text(self)
    }
}

impl NumericInput for String {
    fn to_f64(&self) -> Option<f64> {
        parse_float_text(self)
    }
}

impl NumericInput for f64 {
    fn to_f64(&self) -> Option<f64> {
        Some(*self)
    }
}

impl NumericInput for f32 {
    fn to_f64(&self) -> Option<f64> {
        Some(f64::from(*self))
    }
}

impl NumericInput for bool {
    fn to_f64(&self) -> Option<f64> {
        Some(if *self { 1.0 } else { 0.0 })
    }
}

macro_rules! impl_numeric_input_for_int {
    ($($ty:ty),*) => {
        $(
            impl NumericInput for $ty {
                fn to_f64(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_numeric_input_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: NumericInput> NumericInput for Option<T> {
    fn to_f64(&self) -> Option<f64> {
        self.as_ref().and_then(|value| value.to_f64())
    }
}

impl<T: NumericInput + ?Sized> NumericInput for &T {
    fn to_f64(&self) -> Option<f64> {
        (**self).to_f64()
    }
}

/// Attempts to interpret `raw` as a floating-point number.
///
/// Text is trimmed of surrounding whitespace and may use a sign, decimal or
/// exponent notation, `inf`/`infinity`/`nan` in any case, and single
/// underscores between digits. Only ASCII digits count as digits.
///
/// # Example
///
/// ```
/// use sdstats::{validate_input, Parsed};
///
/// assert_eq!(validate_input("3.14"), Parsed::Valid(3.14));
/// assert_eq!(validate_input(" 1_000 ").value(), Some(1000.0));
/// assert_eq!(validate_input("abc").into_pair(), (false, None));
/// assert!(!validate_input("").is_valid());
/// assert!(validate_input(&42u8).is_valid());
/// ```
pub fn validate_input<T: NumericInput + ?Sized>(raw: &T) -> Parsed {
    raw.to_f64().into()
}

fn parse_float_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    strip_digit_separators(trimmed)?.parse::<f64>().ok()
}

/// Removes `_` separators, rejecting any that is not flanked by two digits.
fn strip_digit_separators(text: &str) -> Option<Cow<'_, str>> {
    if !text.contains('_') {
        return Some(Cow::Borrowed(text));
    }
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        if c == '_' {
            let before = i.checked_sub(1).map(|j| bytes[j]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => continue,
                _ => return None,
            }
        }
        out.push(c);
    }
    Some(Cow::Owned(out))
}

/// A token [`parse_sample`] could not interpret as a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected {
    /// Position of the token in the input sequence.
    pub index: usize,
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedSample {
    /// Accepted values, in input order.
    pub values: Vec<f64>,
    pub rejected: Vec<Rejected>,
}

impl ParsedSample {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Validates a batch of raw tokens, keeping the numbers and recording the rest.
pub fn parse_sample<I, S>(tokens: I) -> ParsedSample
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut sample = ParsedSample::default();
    for (index, token) in tokens.into_iter().enumerate() {
        let token = token.as_ref();
        match validate_input(token) {
            Parsed::Valid(value) => sample.values.push(value),
            Parsed::Invalid => sample.rejected.push(Rejected {
                index,
                raw: token.to_string(),
            }),
        }
    }
    sample
}
