//! # listxt
//!
//! Stream-style and vector operations for Rust's ordered collections.
//!
//! One `use listxt::prelude::*;` adds `filter`, `map`, `reduce`, `sorted`,
//! `distinct` and friends to `Vec`, `VecDeque` and `LinkedList`, and `sum`,
//! `norm`, `avg`, `dot` and pairwise arithmetic to collections of numbers.
//!
//! ```
//! use listxt::prelude::*;
//!
//! let v = vec![3, 10, -2, 1, 7, 6, 6, 15];
//! assert_eq!(v.sorted().unwrap(), vec![-2, 1, 3, 6, 6, 7, 10, 15]);
//! assert_eq!(v.sum(), 46.0);
//! assert_eq!(v.dot(&v).unwrap(), 460.0);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `serde` | `Serialize` / `Deserialize` for [`Value`](crate::core::Value) |

pub use listxt_core as core;

/// Glob-import convenience: `use listxt::prelude::*;`
pub mod prelude {
    pub use listxt_core::prelude::*;
}
