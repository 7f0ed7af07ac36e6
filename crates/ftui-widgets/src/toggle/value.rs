#![forbid(unsafe_code)]

//! Values a toggle widget can hold, and the equality used to match them.
//!
//! A toggle's `value` belongs to the application: a single [`Scalar`] or a
//! list of scalars gathered from a multi-item selection. Matching a value
//! against the configured on value uses *toggle equality*
//! ([`Scalar::loosely_eq`]), which compares across types so that `1`,
//! `true` and `"1"` all select a checkbox whose on value is `true`.
//!
//! # Toggle equality
//!
//! | left \ right | Null  | Bool          | Number        | Text          |
//! |--------------|-------|---------------|---------------|---------------|
//! | Null         | true  | false         | false         | false         |
//! | Bool         | false | numeric       | numeric       | numeric       |
//! | Number       | false | numeric       | numeric       | numeric       |
//! | Text         | false | numeric       | numeric       | string        |
//!
//! "numeric" converts both sides with [`Scalar::to_number`] and compares
//! as `f64` (so NaN never matches anything).

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single toggle value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    /// Absent value (null or undefined).
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    /// Whether this is [`Scalar::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric interpretation used by toggle equality.
    ///
    /// Booleans map to 0/1. Text is trimmed; empty text is 0; `Infinity`
    /// with an optional sign, `0x`/`0o`/`0b` integers and decimal floats
    /// parse; anything else is NaN. `Null` has no numeric form.
    #[must_use]
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Number(n) => Some(*n),
            Self::Text(s) => Some(parse_number(s)),
        }
    }

    /// Toggle equality. See the module docs for the full table.
    #[must_use]
    pub fn loosely_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Null, _) | (_, Self::Null) => false,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            _ => match (self.to_number(), other.to_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Text form used when a scalar feeds a title or icon. `Null` has none.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => fmt_number(*n, f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

fn fmt_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integral values print without a trailing ".0".
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{n}")
    }
}

fn parse_number(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return 0.0;
    }
    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }
    // `f64::from_str` also accepts "inf" and "nan" spellings, which are not
    // numbers here.
    let plain = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !plain {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

/// Digits after a `0x`/`0o`/`0b` prefix. Signs are not digits; values
/// past `u64::MAX` keep growing as floats.
fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    u64::from_str_radix(digits, radix).map_or_else(
        |_| {
            digits
                .chars()
                .filter_map(|c| c.to_digit(radix))
                .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
        },
        |v| v as f64,
    )
}

macro_rules! scalar_from {
    ($($ty:ty => |$v:ident| $body:expr),* $(,)?) => {
        $(
            impl From<$ty> for Scalar {
                fn from($v: $ty) -> Self {
                    $body
                }
            }

            impl From<$ty> for ToggleValue {
                fn from(v: $ty) -> Self {
                    Self::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

scalar_from! {
    bool => |v| Scalar::Bool(v),
    f64 => |v| Scalar::Number(v),
    i32 => |v| Scalar::Number(f64::from(v)),
    u32 => |v| Scalar::Number(f64::from(v)),
    i64 => |v| Scalar::Number(v as f64),
    &str => |v| Scalar::Text(v.to_owned()),
    String => |v| Scalar::Text(v),
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// The application-owned value of a toggle widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToggleValue {
    /// A single value.
    Scalar(Scalar),
    /// An ordered multi-item selection.
    List(Vec<Scalar>),
}

impl Default for ToggleValue {
    fn default() -> Self {
        Self::Scalar(Scalar::Null)
    }
}

impl ToggleValue {
    /// The null value.
    pub const NULL: Self = Self::Scalar(Scalar::Null);

    /// List value from anything convertible to scalars.
    #[must_use]
    pub fn list<T: Into<Scalar>>(items: impl IntoIterator<Item = T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Whether the value is null. An empty list is not null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Scalar(Scalar::Null))
    }

    /// Text form for titles and icons. Lists join their items with `", "`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Scalar(s) => s.as_text(),
            Self::List(items) => Some(
                items
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
        }
    }
}

impl From<Scalar> for ToggleValue {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Vec<Scalar>> for ToggleValue {
    fn from(items: Vec<Scalar>) -> Self {
        Self::List(items)
    }
}
