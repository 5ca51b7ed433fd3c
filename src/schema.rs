//! Record shape descriptions for CSV encoding.
//!
//! Defines [`Field`] (a declared column), [`FieldValue`] (the closed set of
//! cell kinds the encoder knows how to stringify), and the [`Record`] trait
//! that record types implement to expose their shape.

use std::borrow::Cow;

/// A single declared field of a record shape.
///
/// Fields are listed in declaration order by [`Record::fields`] and drive
/// both the header row and the per-row cell order. A field may carry a
/// serialization alias (`rename`) that replaces its declared name in the
/// header row.
///
/// # Example
///
/// ```
/// use csvenc::Field;
///
/// const FIELDS: &[Field] = &[
///     Field::renamed("name", "name"),
///     Field::new("ID"),
/// ];
///
/// assert_eq!(FIELDS[1].header(), "ID");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// The field's declared name.
    pub name: &'static str,
    /// Optional serialization alias used as the column header instead of
    /// `name`.
    pub rename: Option<&'static str>,
}

impl Field {
    /// Declares a field whose column header is its own name.
    pub const fn new(name: &'static str) -> Self {
        Self { name, rename: None }
    }

    /// Declares a field with a serialization alias for its column header.
    pub const fn renamed(name: &'static str, alias: &'static str) -> Self {
        Self {
            name,
            rename: Some(alias),
        }
    }

    /// The column header for this field: the alias if declared, else the
    /// declared name.
    pub fn header(&self) -> &'static str {
        self.rename.unwrap_or(self.name)
    }
}

/// A record field's value, tagged with its semantic kind.
///
/// This is the closed set of kinds the encoder can stringify. Anything a
/// record type cannot express as one of these variants (nested records,
/// collections, and so on) has no CSV representation and must be reported
/// by returning `None` from [`Record::field`].
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// Signed integer, rendered as a plain decimal string.
    Int(i64),
    /// Unsigned integer, rendered as a plain decimal string.
    Uint(u64),
    /// Text, passed through verbatim; quoting and escaping are the CSV
    /// writer's responsibility.
    Text(&'a str),
    /// Floating point, rendered in fixed-point notation with six fractional
    /// digits, never scientific notation.
    Float(f64),
    /// Boolean, rendered as the literal words `true` / `false`.
    Bool(bool),
}

impl<'a> FieldValue<'a> {
    /// Stringifies the value according to its kind.
    ///
    /// Text values borrow; all other kinds allocate their decimal or word
    /// form.
    pub fn render(&self) -> Cow<'a, str> {
        match *self {
            FieldValue::Int(v) => Cow::Owned(v.to_string()),
            FieldValue::Uint(v) => Cow::Owned(v.to_string()),
            FieldValue::Text(v) => Cow::Borrowed(v),
            FieldValue::Float(v) => Cow::Owned(format!("{v:.6}")),
            FieldValue::Bool(v) => Cow::Owned(v.to_string()),
        }
    }
}

/// A record type with a fixed, ordered set of named fields.
///
/// Implementing this trait is what makes a type encodable: `fields` declares
/// the shape (names, aliases, order) once per type, and `field` produces the
/// value of one field of one record. The two must agree on ordering and
/// length; the encoder asks for exactly the indices `0..fields().len()`, in
/// order, for every record.
///
/// The [`record!`](crate::record) macro writes both methods from a single
/// field listing; hand implementations are only needed for shapes the macro
/// cannot express.
///
/// # Example
///
/// ```
/// use csvenc::{Field, FieldValue, Record};
///
/// struct Reading {
///     sensor: String,
///     value: f64,
/// }
///
/// impl Record for Reading {
///     fn fields() -> &'static [Field] {
///         const FIELDS: &[Field] = &[Field::new("sensor"), Field::new("value")];
///         FIELDS
///     }
///
///     fn field(&self, index: usize) -> Option<FieldValue<'_>> {
///         match index {
///             0 => Some(FieldValue::Text(&self.sensor)),
///             1 => Some(FieldValue::Float(self.value)),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// The record shape's field declarations, in declaration order.
    fn fields() -> &'static [Field];

    /// The value of field `index` for this record, or `None` when the
    /// field's kind has no CSV stringification rule.
    fn field(&self, index: usize) -> Option<FieldValue<'_>>;
}

// One level of handle indirection: a slice of `&R` or `Box<R>` encodes the
// same as a slice of `R`. Deeper nesting is left to auto-deref at the call
// site rather than modeled here.
impl<R: Record> Record for &R {
    fn fields() -> &'static [Field] {
        R::fields()
    }

    fn field(&self, index: usize) -> Option<FieldValue<'_>> {
        (**self).field(index)
    }
}

impl<R: Record> Record for Box<R> {
    fn fields() -> &'static [Field] {
        R::fields()
    }

    fn field(&self, index: usize) -> Option<FieldValue<'_>> {
        (**self).field(index)
    }
}
