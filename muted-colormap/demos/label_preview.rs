//! Paints a random label image with a muted colormap and writes it to `label_preview.png`.

use image::{GrayImage, Luma};
use log::info;
use muted_colormap::{DEFAULT_COLOR_COUNT, random_muted_colormap};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SIZE: u32 = 256;
const REGIONS: usize = 40;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let seed = std::env::args().nth(1).map(|s| s.parse::<u64>()).transpose()?;
    let table = random_muted_colormap(DEFAULT_COLOR_COUNT, seed)?;

    // Nearest center wins, which gives a voronoi like label image
    let mut rng = StdRng::seed_from_u64(0);
    let centers: Vec<(f32, f32)> = (0..REGIONS)
        .map(|_| (rng.random_range(0.0..SIZE as f32), rng.random_range(0.0..SIZE as f32)))
        .collect();
    let labels = GrayImage::from_fn(SIZE, SIZE, |x, y| {
        let (label, _) = centers
            .iter()
            .map(|(cx, cy)| (cx - x as f32).powi(2) + (cy - y as f32).powi(2))
            .enumerate()
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .unwrap_or((0, 0.0));
        Luma([label as u8])
    });

    let path = "label_preview.png";
    table.colorize_labels(&labels).save(path)?;
    info!("Wrote {REGIONS} regions with seed {seed:?} to {path}");
    Ok(())
}
