use std::fmt::{self, Display};

/// A numeric value which can appear as a child or as an attribute value.
///
/// Numbers are stored as `f64` and displayed the way a script engine would display them:
/// integral values have no fractional part, and non-finite values are spelled out.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
pub struct Number(pub f64);

impl Number {
    /// Gets the underlying value.
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
        } else if value == 0.0 {
            // Covers negative zero.
            f.write_str("0")
        } else {
            write!(f, "{}", value)
        }
    }
}

macro_rules! impl_number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self(value as f64)
                }
            }
        )*
    };
}

impl_number_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// The value of a single attribute in a [`Props`](crate::Props) record.
#[derive(Clone, Debug, PartialEq)]
pub enum PropValue {
    /// A string, rendered escaped inside quotes.
    Str(String),
    /// A number, rendered in its display form inside quotes.
    Number(Number),
    /// A boolean. `true` renders as a bare attribute name and `false` renders nothing.
    Bool(bool),
    /// An explicitly absent value, which renders nothing.
    Null,
}

impl PropValue {
    /// Returns the string form of the value as it would appear inside quotes, or `None` if the
    /// value doesn't render as a `key="value"` pair.
    pub fn as_attribute_text(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Number(n) => Some(n.to_string()),
            Self::Bool(_) | Self::Null => None,
        }
    }

    /// Returns the string slice if this is a [`PropValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a [`PropValue::Number`].
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`PropValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<&String> for PropValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Number> for PropValue {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl<T: Into<PropValue>> From<Option<T>> for PropValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

macro_rules! impl_prop_value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PropValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value.into())
                }
            }
        )*
    };
}

impl_prop_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
