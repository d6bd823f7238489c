//! Core type definitions
//!
//! - [`Laterality`] / [`ViewPosition`]: mammography classification of a series
//! - [`MammogramView`]: combined laterality and view position
//! - [`Study`] / [`Series`] / [`Instance`]: canonical imaging hierarchy
//! - [`Layout`]: closed set of viewport arrangements

mod enums;
mod hierarchy;
mod layout;
mod view;

pub use enums::{Laterality, ViewPosition};
pub use hierarchy::{Instance, Series, Study};
pub use layout::{Layout, SlotRect};
pub use view::{MammogramView, QUAD_READING_ORDER};
