//! Contour extraction and quadrilateral candidate selection.
//!
//! - [`trace`] walks external component boundaries on a binary mask.
//! - [`polygon`] provides closed-polygon geometry: shoelace area, perimeter,
//!   Ramer–Douglas–Peucker simplification and a convexity test.
//! - [`select`] filters and ranks contours into the single best card
//!   quadrilateral.

pub mod polygon;
pub mod select;
pub mod trace;

pub use self::select::select_card_quad;
pub use self::trace::{trace_external, Contour};
