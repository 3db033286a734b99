//! The `record!` declaration macro.

/// Declares a struct and implements [`Record`](crate::Record) for it.
///
/// The payload is the fields' payloads concatenated in declaration order, and
/// `SIZE` is the sum of the field sizes. Every field type must itself
/// implement `Record`. The struct always derives `Clone` and `Copy`; further
/// derives and attributes are passed through.
///
/// ```
/// use nvparam_codec::{record, Record};
///
/// record! {
///     #[derive(Debug, PartialEq)]
///     pub struct Limits {
///         pub min: i16,
///         pub max: i16,
///         flags: u8,
///     }
/// }
///
/// assert_eq!(Limits::SIZE, 5);
/// assert_eq!(Limits::zeroed(), Limits { min: 0, max: 0, flags: 0 });
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::Record for $name {
            const SIZE: usize = 0 $(+ <$ty as $crate::Record>::SIZE)*;

            #[allow(unused_variables)]
            fn encode(&self, writer: &mut $crate::RecordWriter) {
                $(<$ty as $crate::Record>::encode(&self.$field, writer);)*
            }

            #[allow(unused_variables)]
            fn decode(reader: &mut $crate::RecordReader<'_>) -> $crate::CodecResult<Self> {
                Ok(Self {
                    $($field: <$ty as $crate::Record>::decode(reader)?,)*
                })
            }

            fn zeroed() -> Self {
                Self {
                    $($field: <$ty as $crate::Record>::zeroed(),)*
                }
            }
        }
    };
}
