//! Stream-style query and transform operations for any [`OrderedContainer`].
//!
//! Every operation makes a single pass over the receiver (stopping early
//! where the result is already decided) and never mutates it. Transforms
//! return a freshly built container of the same backend.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::hash::Hash;

use itertools::Itertools;

use crate::container::OrderedContainer;
use crate::dtype::AsNumber;
use crate::error::{CoreError, Result};

use super::sort::insertion_sort;

/// Functional operations available on every [`OrderedContainer`].
///
/// ```
/// use listxt_core::prelude::*;
///
/// let v = vec![1, 2, 3, 3];
/// assert!(v.all_match(|&x| x > 0));
/// assert_eq!(v.find(|&x| x > 1), Some(&2));
/// assert_eq!(v.filter(|&x| x > 1), vec![2, 3, 3]);
/// assert_eq!(v.map(|x| x * 10), vec![10, 20, 30, 30]);
/// ```
pub trait FunctionalOps: OrderedContainer {
    // ------------------------------------------------------------------
    // Predicate tests
    // ------------------------------------------------------------------

    /// Whether `predicate` holds for every element.
    ///
    /// Returns `true` for an empty container without calling `predicate`.
    fn all_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().all(|x| predicate(x))
    }

    /// Whether `predicate` holds for at least one element.
    ///
    /// Returns `false` for an empty container without calling `predicate`.
    fn any_match<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().any(|x| predicate(x))
    }

    /// Whether `predicate` holds for no element.
    fn none_match<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        !self.any_match(predicate)
    }

    // ------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------

    /// The first element matching `predicate`.
    fn find<P>(&self, mut predicate: P) -> Option<&Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().find(|x| predicate(*x))
    }

    /// Index of the first element matching `predicate`.
    fn find_index<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.iter().position(|x| predicate(x))
    }

    // ------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------

    /// The elements matching `predicate`, in their original order.
    fn filter<P>(&self, mut predicate: P) -> Self
    where
        Self::Item: Clone,
        P: FnMut(&Self::Item) -> bool,
    {
        Self::from_elements(self.iter().filter(|x| predicate(*x)).cloned())
    }

    /// Apply `f` to every element. The result has the receiver's length.
    fn map<R, F>(&self, f: F) -> Self::Rebind<R>
    where
        F: FnMut(&Self::Item) -> R,
    {
        <Self::Rebind<R> as OrderedContainer>::from_elements(self.iter().map(f))
    }

    /// The distinct elements.
    ///
    /// Callers must not rely on the order of the result. The current
    /// implementation keeps the first occurrence of each value in input order.
    fn distinct(&self) -> Self
    where
        Self::Item: Clone + Eq + Hash,
    {
        Self::from_elements(self.iter().unique().cloned())
    }

    /// Left fold without a seed: `f(f(x0, x1), x2)...`.
    ///
    /// `None` for an empty container; the single element for a singleton.
    fn reduce<F>(&self, f: F) -> Option<Self::Item>
    where
        Self::Item: Clone,
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.iter().cloned().reduce(f)
    }

    // ------------------------------------------------------------------
    // Extrema
    // ------------------------------------------------------------------

    /// The minimum under `compare`. Ties keep the first element seen.
    fn min_by<F>(&self, mut compare: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.iter()
            .reduce(|best, x| if compare(x, best) == Ordering::Less { x } else { best })
    }

    /// The maximum under `compare`. Ties keep the first element seen.
    fn max_by<F>(&self, mut compare: F) -> Option<&Self::Item>
    where
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        self.iter().reduce(|best, x| {
            if compare(x, best) == Ordering::Greater {
                x
            } else {
                best
            }
        })
    }

    /// The minimum under the natural ordering.
    ///
    /// Fails with [`CoreError::TypeMismatch`] if an element cannot be
    /// compared with the current minimum (for example `NaN`).
    fn min_element(&self) -> Result<Option<&Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        natural_extremum(self.iter(), Ordering::Less, "min_element")
    }

    /// The maximum under the natural ordering.
    ///
    /// Fails with [`CoreError::TypeMismatch`] if an element cannot be
    /// compared with the current maximum.
    fn max_element(&self) -> Result<Option<&Self::Item>>
    where
        Self::Item: PartialOrd,
    {
        natural_extremum(self.iter(), Ordering::Greater, "max_element")
    }

    // ------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------

    /// A new container sorted ascending by the natural ordering.
    ///
    /// The sort is stable. Fails with [`CoreError::TypeMismatch`] on the
    /// first incomparable pair; nothing is returned in that case.
    ///
    /// ```
    /// use listxt_core::prelude::*;
    ///
    /// let v = vec![3, 10, -2, 1, 7, 6, 6, 15];
    /// assert_eq!(v.sorted().unwrap(), vec![-2, 1, 3, 6, 6, 7, 10, 15]);
    /// assert!(vec![1.0, f64::NAN].sorted().is_err());
    /// ```
    fn sorted(&self) -> Result<Self>
    where
        Self::Item: PartialOrd + Clone,
    {
        let order = insertion_sort(self.iter(), |i, x: &Self::Item, y: &Self::Item| {
            x.partial_cmp(y).ok_or(i)
        })
        .map_err(|index| not_comparable("sorted", index))?;
        Ok(Self::from_elements(order.into_iter().cloned()))
    }

    /// A new container sorted ascending by `compare`. The sort is stable.
    fn sorted_by<F>(&self, mut compare: F) -> Self
    where
        Self::Item: Clone,
        F: FnMut(&Self::Item, &Self::Item) -> Ordering,
    {
        let order = insertion_sort(self.iter(), |_, x: &Self::Item, y: &Self::Item| {
            Ok::<_, Infallible>(compare(x, y))
        });
        let Ok(order) = order;
        Self::from_elements(order.into_iter().cloned())
    }

    // ------------------------------------------------------------------
    // Checked numeric reductions
    // ------------------------------------------------------------------

    /// Sum of the elements as `f64`, `0.0` when empty.
    ///
    /// Fails with [`CoreError::TypeMismatch`] at the first element that is
    /// not numeric. Sequences of [`Numeric`](crate::Numeric) elements can
    /// use the infallible [`NumericOps::sum`](crate::NumericOps::sum).
    fn try_sum(&self) -> Result<f64>
    where
        Self::Item: AsNumber,
    {
        self.iter()
            .enumerate()
            .try_fold(0.0, |acc, (index, x)| {
                number_at("try_sum", index, x).map(|v| acc + v)
            })
    }

    /// Product of the elements as `f64`, `1.0` when empty.
    ///
    /// Fails with [`CoreError::TypeMismatch`] at the first element that is
    /// not numeric.
    fn try_product(&self) -> Result<f64>
    where
        Self::Item: AsNumber,
    {
        self.iter()
            .enumerate()
            .try_fold(1.0, |acc, (index, x)| {
                number_at("try_product", index, x).map(|v| acc * v)
            })
    }
}

impl<C: OrderedContainer> FunctionalOps for C {}

// ======================================================================
// Helpers
// ======================================================================

fn not_comparable(operation: &'static str, index: usize) -> CoreError {
    log::debug!("{operation}: element {index} is not comparable");
    CoreError::TypeMismatch {
        operation,
        index,
        reason: "element is not comparable",
    }
}

fn number_at<T: AsNumber + ?Sized>(operation: &'static str, index: usize, x: &T) -> Result<f64> {
    x.as_number().ok_or_else(|| {
        log::debug!("{operation}: element {index} is not numeric");
        CoreError::TypeMismatch {
            operation,
            index,
            reason: "element is not numeric",
        }
    })
}

/// Keep the first element, replace it whenever a later one compares as
/// `wanted` against it.
fn natural_extremum<'a, T, I>(
    elements: I,
    wanted: Ordering,
    operation: &'static str,
) -> Result<Option<&'a T>>
where
    T: PartialOrd + 'a,
    I: Iterator<Item = &'a T>,
{
    let mut best: Option<&'a T> = None;
    for (index, x) in elements.enumerate() {
        best = match best {
            None => Some(x),
            Some(current) => match x.partial_cmp(current) {
                Some(order) if order == wanted => Some(x),
                Some(_) => Some(current),
                None => return Err(not_comparable(operation, index)),
            },
        };
    }
    Ok(best)
}


#[cfg(test)]
mod proptests {
    use super::FunctionalOps;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn none_match_is_not_any_match(data in proptest::collection::vec(-100_i32..100, 0..40), t in -100_i32..100) {
            prop_assert_eq!(data.none_match(|&x| x > t), !data.any_match(|&x| x > t));
        }

        #[test]
        fn map_preserves_length(data in proptest::collection::vec(any::<i16>(), 0..60)) {
            prop_assert_eq!(data.map(|&x| i32::from(x) * 3).len(), data.len());
        }

        #[test]
        fn filter_is_ordered_subsequence(data in proptest::collection::vec(-50_i32..50, 0..60)) {
            let kept = data.filter(|&x| x % 3 == 0);
            let expected: Vec<i32> = data.iter().copied().filter(|x| x % 3 == 0).collect();
            prop_assert_eq!(kept, expected);
        }

        #[test]
        fn sorted_matches_stable_std_sort(data in proptest::collection::vec((0_u8..8, any::<u16>()), 0..60)) {
            // Only the key takes part in the comparison, so the payload
            // exposes any reordering of equal keys.
            let ours = data.sorted_by(|a, b| a.0.cmp(&b.0));
            let mut reference = data.clone();
            reference.sort_by_key(|p| p.0);
            prop_assert_eq!(ours, reference);
        }

        #[test]
        fn all_match_on_empty_is_true(t in any::<i32>()) {
            prop_assert!(Vec::<i32>::new().all_match(|&x| x == t));
        }
    }
}
