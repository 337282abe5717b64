//! Axis tick positions and labels

use crate::io::configuration::{CELL_SPACING_CM, MAJOR_TICK_EVERY};

/// Major tick positions for an axis of `cells` cells
///
/// Every fifth cell gets a tick at `5 * k` centimetres.
pub fn major_ticks(cells: usize) -> Vec<f64> {
    (0..cells)
        .step_by(MAJOR_TICK_EVERY)
        .map(|k| k as f64 * CELL_SPACING_CM)
        .collect()
}

/// Round-number ticks covering `[lo, hi]` with roughly `target` intervals
pub fn nice_ticks(lo: f64, hi: f64, target: usize) -> Vec<f64> {
    if !lo.is_finite() || !hi.is_finite() || hi <= lo || target == 0 {
        return Vec::new();
    }

    let raw = (hi - lo) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let step = magnitude
        * if normalized < 1.5 {
            1.0
        } else if normalized < 3.0 {
            2.0
        } else if normalized < 7.0 {
            5.0
        } else {
            10.0
        };

    let tolerance = step * 1e-9;
    let first = (lo / step).ceil() as i64;
    let last = ((hi + tolerance) / step).floor() as i64;
    (first..=last).map(|k| k as f64 * step).collect()
}

/// Ticks that fall inside `[0, extent]`
pub fn visible_ticks(ticks: &[f64], extent: f64) -> Vec<f64> {
    ticks
        .iter()
        .copied()
        .filter(|&t| (0.0..=extent).contains(&t))
        .collect()
}

/// Label for a tick value: integers without decimals, others with up to two
pub fn tick_label(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{:.0}", value.round() + 0.0)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').to_string()
    }
}
