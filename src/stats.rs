use plotters::prelude::*;
use plotters::style::Color;
use std::path::Path;
use std::time::Duration;

use crate::shape::Shape;

/// Wall-clock frame durations for one rendering strategy, accumulated for
/// the stage's lifetime and reduced to mean ms / FPS at the end.
pub struct FrameStats {
    pub name: &'static str,
    pub frame_times: Vec<f64>,
}

impl FrameStats {
    pub fn new(name: &'static str) -> Self {
        FrameStats { name, frame_times: Vec::new() }
    }

    pub fn record(&mut self, frame: Duration) {
        self.frame_times.push(frame.as_secs_f64());
    }

    pub fn avg_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        self.frame_times.iter().sum::<f64>() / self.frame_times.len() as f64 * 1000.0
    }

    pub fn avg_fps(&self) -> f64 {
        let ms = self.avg_ms();
        if ms == 0.0 { 0.0 } else { 1000.0 / ms }
    }
}

/// Final scoreboard: one block per strategy, speedups relative to the first
/// (scalar) stage.
pub fn print_report(shape: Shape, stats: &[FrameStats]) {
    println!("\n===== FINAL PERFORMANCE COMPARISON =====");
    println!("Shape: {shape:?}\n");

    let baseline_ms = stats.first().map(|s| s.avg_ms()).unwrap_or(0.0);
    for (i, stage) in stats.iter().enumerate() {
        println!("{}", stage.name);
        println!("  Avg FPS : {:.2}", stage.avg_fps());
        println!("  Avg ms  : {:.2}", stage.avg_ms());
        if i > 0 && stage.avg_ms() > 0.0 {
            println!("  Speedup vs {}: {:.2}x", stats[0].name, baseline_ms / stage.avg_ms());
        }
        println!();
    }
}

/// Plot every stage's per-frame times on one chart.
pub fn plot_frame_times(stats: &[FrameStats], filename: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let longest = stats.iter().map(|s| s.frame_times.len()).max().unwrap_or(0);
    if longest == 0 {
        return Err("No data to plot".into());
    }

    let max_time = stats
        .iter()
        .flat_map(|s| s.frame_times.iter())
        .fold(0.0f64, |acc, &x| acc.max(x * 1000.0));

    let root = BitMapBackend::new(filename, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let palette = [&BLUE, &RED, &GREEN, &MAGENTA];
    let mut chart = ChartBuilder::on(&root)
        .caption("Frame Time per Rendering Strategy", ("sans-serif", 30))
        .margin(50)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..(longest as i32), 0.0..max_time)?;

    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Time (ms)")
        .draw()?;

    for (stage, color) in stats.iter().zip(palette.iter().cycle()) {
        chart
            .draw_series(LineSeries::new(
                stage
                    .frame_times
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (i as i32, v * 1000.0)),
                *color,
            ))?
            .label(stage.name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], *color));
    }

    chart
        .configure_series_labels()
        .background_style(&RGBAColor(255, 255, 255, 0.8))
        .border_style(&BLACK)
        .draw()?;

    println!("Successfully saved {}", filename.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_over_recorded_frames() {
        let mut stats = FrameStats::new("Scalar CPU");
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(30));
        assert!((stats.avg_ms() - 20.0).abs() < 1e-9);
        assert!((stats.avg_fps() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_stage_reports_zero_instead_of_dividing() {
        let stats = FrameStats::new("Vector CPU");
        assert_eq!(stats.avg_ms(), 0.0);
        assert_eq!(stats.avg_fps(), 0.0);
    }
}
