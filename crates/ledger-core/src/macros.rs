// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Field-key enum generator used by the record models.

/// Declares a field-key enum for a record struct whose fields are `String`s.
///
/// Each line maps a variant to the struct field, its wire name, its label and
/// its [`FieldKind`](crate::record::FieldKind). Wire names are given
/// explicitly because some (`type`, `movementType`) are not Rust identifiers.
macro_rules! record_fields {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident for $record:ty {
            $( $variant:ident => $field:ident, $wire:literal, $label:literal, $kind:ident; )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                #[doc = $label]
                $variant,
            )*
        }

        impl $crate::record::FieldKey for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)*
                }
            }

            fn kind(self) -> $crate::record::FieldKind {
                match self {
                    $(Self::$variant => $crate::record::FieldKind::$kind,)*
                }
            }
        }

        impl $name {
            pub(crate) fn get(self, record: &$record) -> &str {
                match self {
                    $(Self::$variant => &record.$field,)*
                }
            }

            pub(crate) fn slot(self, record: &mut $record) -> &mut String {
                match self {
                    $(Self::$variant => &mut record.$field,)*
                }
            }
        }
    };
}
