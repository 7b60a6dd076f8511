//! Sheet controller: slots, view mode and container layout

pub mod controller;
pub mod layout;

pub use controller::{Sheet, Slot};
pub use layout::{ColumnTemplate, Display, LayoutStyle, ScrollOffset};
