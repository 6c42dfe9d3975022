//! Architectural cells.
//!
//! Both architectures build their registers out of the same fixed-width cell; only the
//! names and widths differ, and those come from the architecture profile.

/// Fixed-width unsigned register cell with hex rendering.
pub mod component;

pub use component::ComponentValue;
