//! Operations layered over [`OrderedContainer`](crate::OrderedContainer).
//!
//! | Trait | Available on | Operations |
//! |-------|--------------|------------|
//! | [`FunctionalOps`] | every container | `all_match`, `any_match`, `none_match`, `find`, `find_index`, `filter`, `map`, `reduce`, `distinct`, `min_by`, `max_by`, `min_element`, `max_element`, `sorted`, `sorted_by`, `try_sum`, `try_product` |
//! | [`NumericOps`] | containers of [`Numeric`](crate::Numeric) | `sum`, `product`, `norm`, `avg`, `sigma`, `dot`, `scalar_mul`, `sum_pairwise`, `mul_pairwise` |

mod functional;
mod numeric;
mod sort;

pub use functional::FunctionalOps;
pub use numeric::NumericOps;
