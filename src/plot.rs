//! Bar-chart rendering of occupancy tallies.

use std::error::Error;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::warn;

use crate::core::game::{EnergyGame, Start};
use crate::core::tally::Tally;

/// Figure caption for a throw count: the plain integer below 5000,
/// scientific notation at or above.
pub fn throws_label(throws: u64) -> String {
    if throws < 5_000 {
        format!("{throws} throws")
    } else {
        format!("{:.0E} throws", throws as f64)
    }
}

/// Render one tally as a bar chart (x = energy level, y = sites at that
/// level).
pub fn render_single(
    out_path: &Path,
    tally: &Tally,
    throws: u64,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    draw_tally(&root, tally, &throws_label(throws))?;
    root.present()?;
    Ok(())
}

/// Play one game per throw count and arrange the tallies in a 2x2 grid for
/// side-by-side comparison.
pub fn render_comparison(
    out_path: &Path,
    start: Start,
    throw_counts: &[u64],
    seed: Option<u64>,
    width: u32,
    height: u32,
) -> Result<(), Box<dyn Error>> {
    if throw_counts.len() != 4 {
        warn!(
            n = throw_counts.len(),
            "comparison figure has 4 panels; throw counts beyond that are dropped"
        );
    }

    let root = BitMapBackend::new(out_path, (width, height)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 2));

    for (panel, &throws) in panels.iter().zip(throw_counts) {
        let game = EnergyGame::new(throws, start);
        let tally = match seed {
            Some(seed) => game.play_seeded(seed),
            None => game.play(&mut rand::rng()),
        };
        draw_tally(panel, &tally, &throws_label(throws))?;
    }

    root.present()?;
    Ok(())
}

fn draw_tally(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    tally: &Tally,
    caption: &str,
) -> Result<(), Box<dyn Error>> {
    let max_level = *tally.levels.last().unwrap_or(&0);
    let y_max = (tally.max_count() as f32 * 1.1).max(1.0);

    let mut chart = ChartBuilder::on(area)
        .caption(caption, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(-0.5f32..(max_level as f32 + 0.5), 0.0f32..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Energy level")
        .y_desc("Count")
        .x_labels(tally.levels.len().min(13))
        .draw()?;

    for (&level, &count) in tally.levels.iter().zip(&tally.counts) {
        let x0 = level as f32 - 0.25;
        let x1 = level as f32 + 0.25;
        chart.draw_series(std::iter::once(Rectangle::new(
            [(x0, 0.0), (x1, count as f32)],
            BLUE.mix(0.6).filled(),
        )))?;
    }

    Ok(())
}
