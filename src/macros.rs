//! The [`record!`](crate::record) macro for declaring record shapes.

/// Implements [`Record`](crate::Record) for a struct from a field listing.
///
/// Each entry names a struct field, an optional column alias (`as "name"`),
/// and the semantic kind used to stringify it. Supported kinds are `int`,
/// `uint`, `float`, `bool`, and `text`; the extra kind `unsupported` marks a
/// field that has no CSV representation and makes encoding fail with
/// [`EncodeError::UnsupportedType`](crate::EncodeError::UnsupportedType).
///
/// Fields are listed in the order their columns should appear, which need
/// not cover or match the struct's own declaration order.
///
/// # Example
///
/// ```
/// struct Account {
///     name: String,
///     id: u64,
///     balance: f64,
///     frozen: bool,
/// }
///
/// csvenc::record!(Account {
///     name as "name": text,
///     id as "id": uint,
///     balance: float,
///     frozen: bool,
/// });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident $(as $alias:literal)? : $kind:ident),+ $(,)? }) => {
        impl $crate::Record for $ty {
            fn fields() -> &'static [$crate::Field] {
                const FIELDS: &[$crate::Field] =
                    &[$($crate::record!(@decl $field $(, $alias)?),)+];
                FIELDS
            }

            fn field(&self, index: usize) -> ::core::option::Option<$crate::FieldValue<'_>> {
                let mut next = 0usize;
                $(
                    if index == next {
                        return $crate::record!(@value self.$field, $kind);
                    }
                    next += 1;
                )+
                let _ = next;
                ::core::option::Option::None
            }
        }
    };

    (@decl $field:ident) => {
        $crate::Field::new(stringify!($field))
    };
    (@decl $field:ident, $alias:literal) => {
        $crate::Field::renamed(stringify!($field), $alias)
    };

    (@value $v:expr, int) => {
        ::core::option::Option::Some($crate::FieldValue::Int(($v) as i64))
    };
    (@value $v:expr, uint) => {
        ::core::option::Option::Some($crate::FieldValue::Uint(($v) as u64))
    };
    (@value $v:expr, float) => {
        ::core::option::Option::Some($crate::FieldValue::Float(($v) as f64))
    };
    (@value $v:expr, bool) => {
        ::core::option::Option::Some($crate::FieldValue::Bool($v))
    };
    (@value $v:expr, text) => {
        ::core::option::Option::Some($crate::FieldValue::Text(($v).as_ref()))
    };
    (@value $v:expr, unsupported) => {{
        let _ = &$v;
        ::core::option::Option::None
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Field, FieldValue, Record};

    struct Tagged {
        name: String,
        id: i64,
    }

    crate::record!(Tagged {
        name as "name": text,
        id as "id": int,
    });

    struct Untagged {
        name: String,
        id: i64,
    }

    crate::record!(Untagged {
        name: text,
        id: int,
    });

    #[test]
    fn test_macro_declares_aliased_fields() {
        assert_eq!(
            Tagged::fields(),
            &[Field::renamed("name", "name"), Field::renamed("id", "id")][..]
        );
    }

    #[test]
    fn test_macro_defaults_header_to_field_name() {
        let headers: Vec<_> = Untagged::fields().iter().map(Field::header).collect();
        assert_eq!(headers, ["name", "id"]);
    }

    #[test]
    fn test_macro_field_values_follow_listing_order() {
        let record = Tagged {
            name: "Arkady".to_string(),
            id: 2,
        };
        assert_eq!(record.field(0), Some(FieldValue::Text("Arkady")));
        assert_eq!(record.field(1), Some(FieldValue::Int(2)));
        assert_eq!(record.field(2), None);
    }

    struct WithBaggage {
        id: u64,
        attachments: Vec<String>,
    }

    crate::record!(WithBaggage {
        id: uint,
        attachments: unsupported,
    });

    #[test]
    fn test_macro_unsupported_kind_yields_none() {
        let record = WithBaggage {
            id: 7,
            attachments: vec!["a".to_string()],
        };
        assert_eq!(record.field(0), Some(FieldValue::Uint(7)));
        assert_eq!(record.field(1), None);
    }
}
