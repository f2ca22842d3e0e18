//! Vector and summary-statistic operations for sequences of numbers.
//!
//! Every element is widened to `f64` before it takes part in arithmetic and
//! all accumulation runs left to right in index order, so results are
//! reproducible across backends. Pairwise operations and [`NumericOps::dot`]
//! validate operand lengths and return
//! [`CoreError::SizeMismatch`] instead of truncating.

use crate::container::OrderedContainer;
use crate::dtype::Numeric;
use crate::error::{CoreError, Result};

/// Numeric operations available on every [`OrderedContainer`] of
/// [`Numeric`] elements.
///
/// ```
/// use listxt_core::prelude::*;
///
/// let v = vec![3, 4];
/// assert_eq!(v.sum(), 7.0);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v.dot(&vec![1.0, 0.5]).unwrap(), 5.0);
/// ```
pub trait NumericOps: OrderedContainer<Item: Numeric> {
    // ------------------------------------------------------------------
    // Reductions
    // ------------------------------------------------------------------

    /// Sum of all elements, `0.0` when empty.
    fn sum(&self) -> f64 {
        self.iter().fold(0.0, |acc, &x| acc + x.to_f64())
    }

    /// Product of all elements, `1.0` when empty.
    fn product(&self) -> f64 {
        self.iter().fold(1.0, |acc, &x| acc * x.to_f64())
    }

    /// Euclidean norm `sqrt(sum(x_i^2))`, `0.0` when empty.
    fn norm(&self) -> f64 {
        let sum_sq = self.iter().fold(0.0, |acc, &x| {
            let v = x.to_f64();
            acc + v * v
        });
        sum_sq.sqrt()
    }

    /// Arithmetic mean.
    ///
    /// Fails with [`CoreError::EmptyCollection`] rather than returning `NaN`.
    fn avg(&self) -> Result<f64> {
        ensure_not_empty(self, "avg")?;
        Ok(self.sum() / self.len() as f64)
    }

    /// Root of the summed squared deviations from the mean,
    /// `sqrt(sum((x_i - avg)^2))`.
    ///
    /// The sum is *not* divided by `n` or `n - 1`, so this is not the
    /// population or sample standard deviation; multiply the population
    /// figure by `sqrt(n)` to get it. Fails with
    /// [`CoreError::EmptyCollection`] when empty.
    fn sigma(&self) -> Result<f64> {
        ensure_not_empty(self, "sigma")?;
        let avg = self.sum() / self.len() as f64;
        let sum_sq = self.iter().fold(0.0, |acc, &x| {
            let d = x.to_f64() - avg;
            acc + d * d
        });
        Ok(sum_sq.sqrt())
    }

    // ------------------------------------------------------------------
    // Vector operations
    // ------------------------------------------------------------------

    /// Inner product `sum(x_i * y_i)`.
    fn dot<O>(&self, other: &O) -> Result<f64>
    where
        O: OrderedContainer<Item: Numeric>,
    {
        check_lengths(self, other, "dot")?;
        let result = self
            .iter()
            .zip(other.iter())
            .fold(0.0, |acc, (&x, &y)| acc + x.to_f64() * y.to_f64());
        Ok(result)
    }

    /// Every element multiplied by `scalar`, in order.
    fn scalar_mul<S: Numeric>(&self, scalar: S) -> Self::Rebind<f64> {
        let s = scalar.to_f64();
        <Self::Rebind<f64> as OrderedContainer>::from_elements(
            self.iter().map(|&x| s * x.to_f64()),
        )
    }

    /// Elementwise sum `x_i + y_i`.
    fn sum_pairwise<O>(&self, other: &O) -> Result<Self::Rebind<f64>>
    where
        O: OrderedContainer<Item: Numeric>,
    {
        zip_map(self, other, "sum_pairwise", |x, y| x + y)
    }

    /// Elementwise product `x_i * y_i`.
    fn mul_pairwise<O>(&self, other: &O) -> Result<Self::Rebind<f64>>
    where
        O: OrderedContainer<Item: Numeric>,
    {
        zip_map(self, other, "mul_pairwise", |x, y| x * y)
    }
}

impl<C> NumericOps for C
where
    C: OrderedContainer,
    C::Item: Numeric,
{
}

// ======================================================================
// Helpers
// ======================================================================

fn ensure_not_empty<C: OrderedContainer>(c: &C, operation: &'static str) -> Result<()> {
    if c.is_empty() {
        log::debug!("{operation}: rejected empty input");
        return Err(CoreError::EmptyCollection { operation });
    }
    Ok(())
}

fn check_lengths<A, B>(a: &A, b: &B, operation: &'static str) -> Result<()>
where
    A: OrderedContainer,
    B: OrderedContainer,
{
    if a.len() != b.len() {
        log::debug!(
            "{operation}: operand lengths differ ({} vs {})",
            a.len(),
            b.len()
        );
        return Err(CoreError::SizeMismatch {
            operation,
            expected: a.len(),
            got: b.len(),
        });
    }
    Ok(())
}

/// Combine two equal-length vectors elementwise into the receiver's backend.
fn zip_map<A, B, F>(a: &A, b: &B, operation: &'static str, f: F) -> Result<A::Rebind<f64>>
where
    A: OrderedContainer<Item: Numeric>,
    B: OrderedContainer<Item: Numeric>,
    F: Fn(f64, f64) -> f64,
{
    check_lengths(a, b, operation)?;
    let values = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| f(x.to_f64(), y.to_f64()));
    Ok(<A::Rebind<f64> as OrderedContainer>::from_elements(values))
}
