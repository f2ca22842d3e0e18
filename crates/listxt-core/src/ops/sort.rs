//! Stable insertion sort backing `sorted` and `sorted_by`.
//!
//! The output is built one input element at a time. Each element is inserted
//! in front of the first output element that is strictly greater than it,
//! i.e. after every element it is not less than, so equal elements keep
//! their input order. Worst case O(n²) comparisons.

use core::cmp::Ordering;

/// Return references to `elements` in stable ascending order.
///
/// `compare(i, x, y)` orders the `i`-th input element `x` against an element
/// `y` already placed. The first error it returns aborts the sort and is
/// passed through unchanged; no partial output is produced.
pub(crate) fn insertion_sort<'a, T, E, I, F>(elements: I, mut compare: F) -> Result<Vec<&'a T>, E>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    F: FnMut(usize, &T, &T) -> Result<Ordering, E>,
{
    let elements = elements.into_iter();
    let mut out: Vec<&'a T> = Vec::with_capacity(elements.size_hint().0);
    for (i, x) in elements.enumerate() {
        let mut at = out.len();
        for (j, y) in out.iter().enumerate() {
            if compare(i, x, y)? == Ordering::Less {
                at = j;
                break;
            }
        }
        out.insert(at, x);
    }
    log::trace!("insertion_sort: ordered {} elements", out.len());
    Ok(out)
}
