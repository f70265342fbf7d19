use num::FromPrimitive;

use super::doc_macros::panic_t_from_int;

/// Convert a degree or an index into a coefficient.
///
/// # Panics
#[doc = panic_t_from_int!(r"usize")]
pub(crate) fn usize_to_scalar<T: FromPrimitive>(x: usize) -> T {
    T::from_usize(x).expect("degree too high to convert to T")
}
