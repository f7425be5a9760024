//! Helper macros shared by the property and rule modules

/// Declares a fieldless enum whose variants densely index the rule tables.
///
/// The first variant doubles as the wildcard (`Dense::ANY`) on its axis of a
/// rule table and as the enum's `Default`.
macro_rules! dense_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(#[$first_meta:meta])*
            $first:ident,
            $( $(#[$variant_meta:meta])* $variant:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $(#[$first_meta])*
            $first,
            $( $(#[$variant_meta])* $variant, )*
        }

        impl $name {
            /// Every variant, in index order.
            pub(crate) const ALL: &'static [$name] = &[$name::$first, $($name::$variant),*];
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$first
            }
        }

        impl $crate::rules::Dense for $name {
            const COUNT: usize = $name::ALL.len();
            const ANY: Self = $name::$first;

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Option<Self> {
                $name::ALL.get(index).copied()
            }
        }
    };
}
