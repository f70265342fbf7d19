//! Macros for reducing doc comment boilerplate.

/// Documents generic [`num::FromPrimitive`] panics.
///
/// You must provide a string containing the integer type with the largest range
/// of values that should be supported.
macro_rules! panic_t_from_int {
    ($ty_str:expr) => {
        concat!(r"If `T` is `f32` or `f64`, this function does not panic. However, if `T` cannot represent all primitive integers smaller than [`", $ty_str, r"::MAX`], this might panic under certain circumstances (casting of extreme values, usually)\n\n")
    };
}
pub(crate) use panic_t_from_int;

/// Documents the panic of the `/` operators, which have a fallible twin.
macro_rules! panic_division {
    () => {
        r"Panics if the divisor has no coefficients or its leading coefficient is zero, the same way integer division by zero panics. Use [`Poly::divide`] to get an error instead.\n\n"
    };
}
pub(crate) use panic_division;

/// Default explanation for [`crate::roots::Error::NoConverge`] errors.
macro_rules! errors_no_converge {
    () => {
        r"- `NoConverge`: the solver ran out of restarts before the polynomial was fully reduced. The roots found so far are returned with the error.\n"
    };
}
pub(crate) use errors_no_converge;
