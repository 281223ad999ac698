use std::ops::Index;

#[cfg(feature = "image")]
mod image;

/// Indexed colormap: color `i` belongs to index `i`, there is no interpolation in between.
/// Channels are RGB in `[0, 1]`. A table always holds at least one color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorTable(Vec<[f32; 3]>);

impl ColorTable {
    pub(crate) fn new(colors: Vec<[f32; 3]>) -> Self {
        debug_assert!(!colors.is_empty(), "ColorTable without colors");
        Self(colors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<[f32; 3]> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, [f32; 3]> {
        self.0.iter()
    }

    /// Color for an arbitrary label id. Labels beyond the table wrap around.
    pub fn color_for_label(&self, label: usize) -> [f32; 3] {
        self.0[label % self.0.len()]
    }

    /// Channels scaled to `0..=255`
    pub fn to_rgb8(&self) -> Vec<[u8; 3]> {
        self.0
            .iter()
            .map(|color| color.map(|c| (c * 255.0).round() as u8))
            .collect()
    }

    /// The table as `r, g, b, r, g, b, ...`, e.g. for uploading as a texture
    pub fn as_flat_slice(&self) -> &[f32] {
        bytemuck::cast_slice(&self.0)
    }

    #[cfg(feature = "egui")]
    pub fn to_color32(&self) -> Vec<egui::Color32> {
        self.to_rgb8()
            .into_iter()
            .map(|[r, g, b]| egui::Color32::from_rgb(r, g, b))
            .collect()
    }
}

impl Index<usize> for ColorTable {
    type Output = [f32; 3];

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a ColorTable {
    type Item = &'a [f32; 3];
    type IntoIter = std::slice::Iter<'a, [f32; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
