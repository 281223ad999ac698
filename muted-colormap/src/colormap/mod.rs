use itertools::izip;
use log::debug;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{ColorTable, ColormapError};

mod hsv;
mod settings;

pub use hsv::hsv_to_rgb;
pub use settings::*;

/// Number of colors used when the caller has no better idea, e.g. one per 8 bit label
pub const DEFAULT_COLOR_COUNT: usize = 256;

/// Make a colormap of `count` random muted colors.
///
/// The same `seed` always produces the same colormap. Without a seed the thread local
/// generator of `rand` is used, so every call yields a different table.
pub fn random_muted_colormap(
    count: usize,
    seed: Option<u64>,
) -> Result<ColorTable, ColormapError> {
    let settings = ColormapSettings::default();
    match seed {
        Some(seed) => settings.generate(count, &mut StdRng::seed_from_u64(seed)),
        None => settings.generate(count, &mut rand::rng()),
    }
}

/// Same as [`random_muted_colormap`], but draws from a generator owned by the caller.
/// The generator advances, so consecutive calls produce different colormaps.
pub fn random_muted_colormap_with_rng<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<ColorTable, ColormapError> {
    ColormapSettings::default().generate(count, rng)
}

impl ColormapSettings {
    /// Sample `count` colors within these ranges.
    /// Fails before drawing anything if `count` is zero or a range is invalid.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<ColorTable, ColormapError> {
        if count == 0 {
            return Err(ColormapError::InvalidColorCount(count));
        }
        self.validate()?;

        let [hue, saturation, value] = self.sample(count, rng);
        let colors = izip!(hue, saturation, value)
            .map(|(h, s, v)| hsv_to_rgb(h, s, v))
            .collect();

        debug!("Generated random colormap with {count} colors");
        Ok(ColorTable::new(colors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn assert_in_unit_interval(table: &ColorTable) {
        for color in table {
            assert!(
                color.iter().all(|c| (0.0..=1.0).contains(c)),
                "{color:?} outside of [0, 1]"
            );
        }
    }

    #[test]
    fn length_matches_count() {
        for count in [1, 2, 17, DEFAULT_COLOR_COUNT] {
            let table = random_muted_colormap(count, Some(7)).unwrap();
            assert_eq!(table.len(), count);
            assert_in_unit_interval(&table);
        }
    }

    #[test]
    fn single_color() {
        let table = random_muted_colormap(1, Some(42)).unwrap();
        assert_eq!(table.len(), 1);
        assert_in_unit_interval(&table);
    }

    #[test]
    fn seed_42_first_colors() {
        // Pinned for the StdRng stream of rand 0.9, a rand upgrade may change it
        let table = random_muted_colormap(3, Some(42)).unwrap();
        assert_eq!(
            table.to_rgb8(),
            vec![[254, 230, 134], [66, 161, 179], [187, 251, 121]]
        );
    }

    #[test]
    fn zero_colors_is_an_error() {
        assert_eq!(
            random_muted_colormap(0, Some(42)),
            Err(ColormapError::InvalidColorCount(0))
        );
        assert_eq!(
            random_muted_colormap(0, None),
            Err(ColormapError::InvalidColorCount(0))
        );
    }

    #[test]
    fn same_seed_same_colormap() {
        assert_eq!(
            random_muted_colormap(64, Some(1234)).unwrap(),
            random_muted_colormap(64, Some(1234)).unwrap()
        );
    }

    #[test]
    fn different_seed_different_colormap() {
        assert_ne!(
            random_muted_colormap(8, Some(1)).unwrap(),
            random_muted_colormap(8, Some(2)).unwrap()
        );
    }

    #[test]
    fn unseeded_default_count() {
        let table = random_muted_colormap(DEFAULT_COLOR_COUNT, None).unwrap();
        assert_eq!(table.len(), DEFAULT_COLOR_COUNT);
        assert_in_unit_interval(&table);
    }

    #[test]
    fn colors_stay_muted() {
        let settings = ColormapSettings::default();
        let table = random_muted_colormap(DEFAULT_COLOR_COUNT, Some(99)).unwrap();
        for &[r, g, b] in &table {
            let max = r.max(g).max(b);
            let min = r.min(g).min(b);
            let saturation = (max - min) / max;
            assert!(
                settings.value.low - EPSILON <= max && max <= settings.value.high + EPSILON,
                "value {max} out of range"
            );
            assert!(
                settings.saturation.low - EPSILON <= saturation
                    && saturation <= settings.saturation.high + EPSILON,
                "saturation {saturation} out of range"
            );
        }
    }

    #[test]
    fn shared_generator_advances() {
        let mut rng = StdRng::seed_from_u64(5);
        let first = random_muted_colormap_with_rng(16, &mut rng).unwrap();
        let second = random_muted_colormap_with_rng(16, &mut rng).unwrap();
        assert_ne!(first, second);
        assert_eq!(first, random_muted_colormap(16, Some(5)).unwrap());
    }

    #[test]
    fn dyn_generator() {
        let mut rng = StdRng::seed_from_u64(5);
        let rng: &mut dyn rand::RngCore = &mut rng;
        let table = random_muted_colormap_with_rng(4, rng).unwrap();
        assert_eq!(table, random_muted_colormap(4, Some(5)).unwrap());
    }

    #[test]
    fn hues_are_drawn_before_saturations() {
        let settings = ColormapSettings {
            hue: ChannelRange::new(0.0, 0.5),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        let table = settings.generate(3, &mut rng).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let hues: Vec<f32> = (0..3).map(|_| rng.random_range(0.0..0.5)).collect();
        let saturations: Vec<f32> = (0..3).map(|_| rng.random_range(0.2..0.7)).collect();
        let values: Vec<f32> = (0..3).map(|_| rng.random_range(0.5..1.0)).collect();
        for (i, color) in table.iter().enumerate() {
            assert_eq!(*color, hsv_to_rgb(hues[i], saturations[i], values[i]));
        }
    }

    #[test]
    fn invalid_settings_draw_nothing() {
        let settings = ColormapSettings {
            hue: ChannelRange::new(0.8, 0.1),
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(3);
        assert!(settings.generate(4, &mut rng).is_err());
        assert_eq!(
            random_muted_colormap_with_rng(4, &mut rng).unwrap(),
            random_muted_colormap(4, Some(3)).unwrap()
        );
    }
}
