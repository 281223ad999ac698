//! Random colormaps of muted colors, meant for painting label and segmentation images
//! where neighbouring labels have to stay distinguishable.
//!
//! Features: `image` (default) paints label images, `egui` converts to `Color32`,
//! `serde` makes [`ColormapSettings`] (de)serializable. Tests for the optional
//! integrations only run with `cargo test --all-features`.

mod color_table;
mod colormap;
mod error;

pub use color_table::*;
pub use colormap::*;
pub use error::*;
