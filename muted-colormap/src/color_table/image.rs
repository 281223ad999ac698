use image::{ImageBuffer, Luma, Primitive, Rgb, RgbImage};

use crate::ColorTable;

impl ColorTable {
    /// Paint a label image, every label gets the color of [`ColorTable::color_for_label`].
    ///
    /// Float labels are truncated towards zero. Labels without a `usize` representation
    /// (negative, NaN) get the first color of the table.
    pub fn colorize_labels<P: Primitive>(
        &self,
        labels: &ImageBuffer<Luma<P>, Vec<P>>,
    ) -> RgbImage {
        let palette = self.to_rgb8();
        RgbImage::from_fn(labels.width(), labels.height(), |x, y| {
            let Luma([label]) = *labels.get_pixel(x, y);
            let index = label.to_usize().unwrap_or(0) % palette.len();
            Rgb(palette[index])
        })
    }
}
