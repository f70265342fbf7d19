//! Operations on plain coefficient sequences.

use std::ops::Mul;

use crate::{Error, Scalar};

/// Full discrete convolution of two sequences, `output.len() == input.len() + kernel.len() - 1`.
///
/// The kernel may be of a different type, as long as multiplying by it yields
/// the input's type.
pub(crate) fn convolve_1d<T, U>(input: &[T], kernel: &[U]) -> Vec<T>
where
    T: Scalar + Mul<U, Output = T>,
    U: Clone,
{
    let input_len = input.len();
    let kernel_len = kernel.len();

    debug_assert!(input_len > 0 && kernel_len > 0);
    let output_len = input_len + kernel_len - 1;

    let mut output = vec![T::zero(); output_len];

    for (i, out) in output.iter_mut().enumerate() {
        let mut sum = T::zero();
        for (j, k) in kernel.iter().enumerate() {
            // will only wrap with sequences so large they don't fit in memory
            #[allow(clippy::cast_possible_wrap)]
            let idx = i as isize - j as isize;

            // idx is guaranteed to be positive by the conditional
            #[allow(clippy::cast_possible_wrap)]
            #[allow(clippy::cast_sign_loss)]
            if idx >= 0 && idx < input_len as isize {
                sum = sum + input[idx as usize].clone() * k.clone();
            }
        }
        *out = sum;
    }
    output
}

/// Sum of the pairwise products of two sequences of the same length.
///
/// # Errors
/// - `LengthMismatch`: the sequences have different lengths
///
/// # Examples
/// ```
/// use poly_solve::dot;
///
/// assert_eq!(dot(&[1, 2, 3], &[4, 5, 6]).unwrap(), 32);
/// assert!(dot(&[1, 2], &[1]).is_err());
/// ```
pub fn dot<T: Scalar>(lhs: &[T], rhs: &[T]) -> crate::Result<T> {
    check_lengths(lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs)
        .fold(T::zero(), |acc, (l, r)| acc + l.clone() * r.clone()))
}

/// Pairwise sum of two sequences of the same length.
///
/// Unlike polynomial addition, there is no alignment: mismatched lengths are
/// an error.
///
/// # Errors
/// - `LengthMismatch`: the sequences have different lengths
pub fn elementwise_sum<T: Scalar>(lhs: &[T], rhs: &[T]) -> crate::Result<Vec<T>> {
    check_lengths(lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs)
        .map(|(l, r)| l.clone() + r.clone())
        .collect())
}

fn check_lengths<T>(lhs: &[T], rhs: &[T]) -> crate::Result<()> {
    if lhs.len() != rhs.len() {
        return Err(Error::LengthMismatch {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }
    Ok(())
}
