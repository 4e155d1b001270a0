//! Line-oriented CSV record parsing
//!
//! A record shape is an explicit, ordered field table (`Record::FIELDS`)
//! plus a constructor that pulls typed values from a [`Fields`] cursor in
//! that same order. Lines that do not fit the shape are skipped by
//! [`RecordReader`], never surfaced as errors.

pub mod reader;

pub use reader::{ParseStats, RecordReader};

use crate::error::RecordError;
use std::borrow::Cow;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_DELIMITER: char = ',';

/// A fixed-shape row that can be coerced from split CSV fields
pub trait Record: Sized {
    /// Shape name used in log output
    const NAME: &'static str;

    /// Field names in column order
    const FIELDS: &'static [&'static str];

    /// Build the record, reading every field from `fields` in column order.
    fn from_fields(fields: &mut Fields<'_>) -> Result<Self, RecordError>;

    fn parse(parts: &[&str]) -> Result<Self, RecordError> {
        if parts.len() != Self::FIELDS.len() {
            return Err(RecordError::FieldCount {
                expected: Self::FIELDS.len(),
                found: parts.len(),
            });
        }

        let mut fields = Fields::new(Self::FIELDS, parts);
        Self::from_fields(&mut fields)
    }
}

/// Cursor over the split values of one line, paired with the field names
pub struct Fields<'a> {
    names: &'static [&'static str],
    values: &'a [&'a str],
    position: usize,
}

impl<'a> Fields<'a> {
    pub fn new(names: &'static [&'static str], values: &'a [&'a str]) -> Self {
        Self {
            names,
            values,
            position: 0,
        }
    }

    /// Take the next value as-is.
    pub fn next_str(&mut self) -> Result<&'a str, RecordError> {
        let (_, value) = self.advance()?;
        Ok(value)
    }

    /// Take the next value and coerce it with `FromStr`.
    pub fn next_parsed<T>(&mut self) -> Result<T, RecordError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let (field, value) = self.advance()?;
        value.parse().map_err(|e: T::Err| RecordError::InvalidField {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    fn advance(&mut self) -> Result<(&'static str, &'a str), RecordError> {
        let field_count = RecordError::FieldCount {
            expected: self.names.len(),
            found: self.values.len(),
        };
        let field = self
            .names
            .get(self.position)
            .copied()
            .ok_or_else(|| field_count.clone())?;
        let value = self.values.get(self.position).copied().ok_or(field_count)?;
        self.position += 1;
        Ok((field, value))
    }
}

/// Normalisation applied to each data line before it is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineTransform {
    #[default]
    Trim,
    TrimLowercase,
}

impl LineTransform {
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match self {
            LineTransform::Trim => Cow::Borrowed(line.trim()),
            LineTransform::TrimLowercase => Cow::Owned(line.trim().to_lowercase()),
        }
    }
}
