//! `listxt-core`: functional and vector operations for ordered collections.
//!
//! Any type implementing [`OrderedContainer`] (provided for `Vec`,
//! `VecDeque` and `LinkedList`) gains the stream-style operations of
//! [`FunctionalOps`]; containers of [`Numeric`] elements also gain the vector
//! and summary operations of [`NumericOps`]. No operation mutates its
//! receiver: transforms build and return a new container of the same backend.
//!
//! # Design
//!
//! - Element capabilities are trait bounds: `PartialOrd` for natural
//!   ordering, [`Numeric`] for vector math. Where a capability can only be
//!   known at runtime ([`AsNumber`], incomparable `PartialOrd` pairs, the
//!   dynamic [`Value`] element) a failure is reported as
//!   [`CoreError::TypeMismatch`].
//! - Sorting is a stable insertion sort; simplicity over speed.
//! - The crate never installs a logger; diagnostics go through the `log`
//!   facade.

pub mod container;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod value;

// Re-export key types at crate root for convenience.
pub use container::OrderedContainer;
pub use dtype::{AsNumber, Numeric};
pub use error::{CoreError, Result};
pub use ops::{FunctionalOps, NumericOps};
pub use value::Value;

/// Items intended for glob-import: `use listxt_core::prelude::*;`
pub mod prelude {
    pub use crate::container::OrderedContainer;
    pub use crate::dtype::{AsNumber, Numeric};
    pub use crate::error::{CoreError, Result};
    pub use crate::ops::{FunctionalOps, NumericOps};
    pub use crate::value::Value;
}
