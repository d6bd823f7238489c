//! Viewport layout selection and series-to-slot assignment
//!
//! Pure, synchronous functions over a canonical study; they hold no state
//! between calls.

mod assigner;
mod plan;
mod selector;

pub use assigner::{assign, assign_positional, SlotAssignment};
pub use plan::{plan_viewports, plan_with_layout, ViewportPlan};
pub use selector::select_layout;
