//! Geometry resolution: aligning, growing, and sizing shapes in EMU space.

mod align;
mod columns;
mod expand;
mod shape;

pub use align::resolve_align;
pub use columns::column_widths;
pub use expand::{apply_grow, expand, grow_all, GrowDeltas};
pub use shape::{Shape, ShapeMeta, EMU_PER_INCH};
