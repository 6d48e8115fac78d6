//! Native (base) enumerations.
//!
//! A native enumeration is the fixed set of values a game defines before any
//! extension is loaded. Extensions add values next to them in the same numeric
//! space, so the native type must be able to hold *any* raw value, not just
//! the defined ones. That rules out plain Rust enums: native enumerations are
//! "open" newtypes over `i32` with associated constants for the defined
//! members. [`native_enum!`](crate::native_enum) generates them.

/// A base enumeration whose members are backed by `i32`.
///
/// `from_raw` is total: any raw value converts, defined or not.
pub trait NativeEnum: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Type name used when labelling domains and diagnostics.
    const TYPE_NAME: &'static str;

    /// All natively defined members.
    fn defined() -> &'static [Self];

    /// The underlying raw value.
    fn to_raw(self) -> i32;

    /// Build a value from a raw discriminant. Never fails.
    fn from_raw(raw: i32) -> Self;

    /// Canonical member name, `None` if `self` is not a defined member.
    fn canonical_name(self) -> Option<&'static str>;

    /// Is this value one of the natively defined members?
    fn is_defined(self) -> bool {
        Self::defined().contains(&self)
    }
}

/// Declare an open native enumeration.
///
/// ```
/// use ccg_ext::native_enum;
/// use ccg_ext::enums::NativeEnum;
///
/// native_enum! {
///     /// Damage elements.
///     pub struct Element {
///         Fire = 0,
///         Water = 1,
///     }
/// }
///
/// assert_eq!(Element::Water.to_raw(), 1);
/// assert_eq!(Element::from_raw(1), Element::Water);
/// assert_eq!(Element::Fire.canonical_name(), Some("Fire"));
/// assert_eq!(Element::from_raw(7).canonical_name(), None);
/// ```
#[macro_export]
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        $vis struct $name(pub i32);

        #[allow(non_upper_case_globals)]
        impl $name {
            $( $(#[$vmeta])* pub const $variant: Self = Self($value); )+
        }

        impl $crate::enums::NativeEnum for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn defined() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn to_raw(self) -> i32 {
                self.0
            }

            fn from_raw(raw: i32) -> Self {
                Self(raw)
            }

            fn canonical_name(self) -> Option<&'static str> {
                $( if self.0 == $value { return Some(stringify!($variant)); } )+
                None
            }
        }
    };
}
