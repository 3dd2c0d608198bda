//! Operand categories and their canonical text forms.
//!
//! Every comparison construct is generic over a [`Category`]; the category
//! fixes the operand type (so no coercion happens beyond that type's native
//! comparison) and how values render in `Expected:`/`Received:` lines.

use std::borrow::Cow;
use std::ffi::{c_long, c_longlong};
use std::fmt;
use std::ptr::NonNull;

mod sealed {
    pub trait Sealed {}
}

/// A closed set of renderable operand categories.
pub trait Category: sealed::Sealed {
    type Value: Copy + PartialOrd;

    fn render(value: Self::Value) -> String;
}

macro_rules! decimal_category {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name {}

        impl sealed::Sealed for $name {}

        impl Category for $name {
            type Value = $ty;

            fn render(value: $ty) -> String {
                value.to_string()
            }
        }
    };
}

decimal_category!(
    /// 32-bit signed integers.
    Int, i32
);
decimal_category!(
    /// The platform `long`.
    Long, c_long
);
decimal_category!(
    /// The platform `long long`.
    LongLong, c_longlong
);
decimal_category!(
    /// Lengths and counts as `usize`.
    ///
    /// Signed sentinels such as a `-1` error return are checked with the
    /// `Long`/`LongLong` constructs instead.
    Size, usize
);
decimal_category!(
    /// 32-bit unsigned integers; never sign-extended.
    Unsigned, u32
);

/// Addresses, compared and rendered by identity.
#[derive(Debug, Clone, Copy)]
pub enum Pointer {}

impl sealed::Sealed for Pointer {}

impl Category for Pointer {
    type Value = Address;

    fn render(value: Address) -> String {
        value.to_string()
    }
}

// ============================================================================
// ADDRESSES
// ============================================================================

/// A type-erased address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(*const ());

impl Address {
    pub const NULL: Address = Address(std::ptr::null());

    pub fn is_null(self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:p}", self.0)
    }
}

/// Anything that designates an address, possibly null.
pub trait AsAddress {
    fn address(&self) -> Address;
}

impl AsAddress for Address {
    fn address(&self) -> Address {
        *self
    }
}

impl<T: ?Sized> AsAddress for *const T {
    fn address(&self) -> Address {
        Address(self.cast::<()>())
    }
}

impl<T: ?Sized> AsAddress for *mut T {
    fn address(&self) -> Address {
        Address(self.cast_const().cast::<()>())
    }
}

impl<T: ?Sized> AsAddress for &T {
    fn address(&self) -> Address {
        Address((*self as *const T).cast::<()>())
    }
}

impl<T: ?Sized> AsAddress for &mut T {
    fn address(&self) -> Address {
        Address((&**self as *const T).cast::<()>())
    }
}

impl<T: ?Sized> AsAddress for NonNull<T> {
    fn address(&self) -> Address {
        Address(self.as_ptr().cast_const().cast::<()>())
    }
}

impl<T: AsAddress> AsAddress for Option<T> {
    fn address(&self) -> Address {
        self.as_ref().map_or(Address::NULL, AsAddress::address)
    }
}

// ============================================================================
// STRINGS
// ============================================================================

/// A string operand that may be the null reference.
pub trait StrOperand {
    fn as_opt_str(&self) -> Option<&str>;
}

impl StrOperand for str {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl StrOperand for String {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl StrOperand for Cow<'_, str> {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl StrOperand for Box<str> {
    fn as_opt_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl<T: StrOperand> StrOperand for Option<T> {
    fn as_opt_str(&self) -> Option<&str> {
        self.as_ref().and_then(StrOperand::as_opt_str)
    }
}

impl<T: StrOperand + ?Sized> StrOperand for &T {
    fn as_opt_str(&self) -> Option<&str> {
        (**self).as_opt_str()
    }
}

// ============================================================================
// TRUTHINESS
// ============================================================================

/// Coercion of an arbitrary check expression to a boolean.
pub trait Truthy {
    fn truthy(&self) -> bool;
}

impl Truthy for bool {
    fn truthy(&self) -> bool {
        *self
    }
}

macro_rules! nonzero_truthy {
    ($($ty:ty),*) => {
        $(
            impl Truthy for $ty {
                fn truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

nonzero_truthy!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T> Truthy for Option<T> {
    fn truthy(&self) -> bool {
        self.is_some()
    }
}

impl Truthy for Address {
    fn truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> Truthy for *const T {
    fn truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: ?Sized> Truthy for *mut T {
    fn truthy(&self) -> bool {
        !self.is_null()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn truthy(&self) -> bool {
        (**self).truthy()
    }
}

/// `"true"` or `"false"`.
pub fn render_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
