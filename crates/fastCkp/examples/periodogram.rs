//! fastCkp Parallel Periodogram Examples
//!
//! This example demonstrates features specific to `fastCkp`:
//! - Parallel grid scans using `rayon`
//! - Sequential fallback
//! - `ndarray` integration
//! - Refinement of the best grid candidates

use fastCkp::prelude::*;
use ndarray::Array1;
use std::time::Instant;

fn main() -> Result<(), CkpError> {
    println!("{}", "=".repeat(80));
    println!("fastCkp Parallel Periodogram Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_parallel_scan()?;
    example_2_sequential_fallback()?;
    example_3_ndarray_integration()?;
    example_4_refinement()?;

    Ok(())
}

/// Generate an irregularly sampled sinusoid with a known frequency.
fn sinusoid(n: usize, frequency: f64, noise: f64) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    // Irregular but deterministic sampling: jitter each tick by a fixed
    // sub-harmonic so the cadence never divides the signal period evenly.
    let times: Vec<f64> = (0..n)
        .map(|i| i as f64 * 0.07 + 0.01 * ((i * 7 % 13) as f64 / 13.0))
        .collect();
    let mags: Vec<f64> = times
        .iter()
        .map(|&t| (std::f64::consts::TAU * frequency * t).sin())
        .collect();
    let uncertainties = vec![noise.max(1e-3); n];
    (times, mags, uncertainties)
}

/// Example 1: Parallel Grid Scan
/// Demonstrates the default parallel execution mode
fn example_1_parallel_scan() -> Result<(), CkpError> {
    println!("Example 1: Parallel Grid Scan");
    println!("{}", "-".repeat(80));

    let (times, mags, uncertainties) = sinusoid(2_000, 1.7, 0.05);
    let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;

    let start = Instant::now();
    let model = Ckp::new()
        .frequency_range(0.1, 5.0)
        .oversampling(10.0)
        .statistic(Weighted)
        .build()?;

    let pgram = model.periodogram(&series)?;
    let duration = start.elapsed();

    println!(
        "Scanned {} trial frequencies over {} points in {:?}",
        pgram.len(),
        series.len(),
        duration
    );
    if let Some((freq, value)) = pgram.peak() {
        println!("Peak: {:.4} (value {:.4}, true frequency 1.7)", freq, value);
    }

    println!();
    Ok(())
}

/// Example 2: Sequential Fallback
/// Demonstrates explicitly disabling parallelism
fn example_2_sequential_fallback() -> Result<(), CkpError> {
    println!("Example 2: Sequential Fallback");
    println!("{}", "-".repeat(80));

    let (times, mags, uncertainties) = sinusoid(2_000, 1.7, 0.05);
    let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;

    let start = Instant::now();
    let model = ckp::prelude::Ckp::new()
        .frequency_range(0.1, 5.0)
        .oversampling(10.0)
        .statistic(Weighted)
        .build()?;

    let _pgram = model.periodogram(&series)?;
    let duration = start.elapsed();

    println!("Sequential scan finished in {:?}", duration);
    // Note: Sequential is slower for large grids

    println!();
    Ok(())
}

/// Example 3: NdArray Integration
/// Demonstrates direct usage with ndarray types
fn example_3_ndarray_integration() -> Result<(), CkpError> {
    println!("Example 3: NdArray Integration");
    println!("{}", "-".repeat(80));

    let times = Array1::from_iter((0..500).map(|i| i as f64 * 0.11));
    let mags = times.mapv(|t| (t * 6.0).sin());
    let uncertainties = Array1::from_elem(500, 0.05);

    let series = time_series(&times, &mags, &uncertainties)?;
    let pgram = Ckp::new()
        .frequency_range(0.2, 3.0)
        .build()?
        .periodogram(&series)?;

    println!("Successfully scanned ndarray inputs.");
    println!("First 5 periodogram values:");
    for (freq, value) in pgram
        .frequencies()
        .iter()
        .zip(pgram.power().iter())
        .take(5)
    {
        println!("  {:.4} -> {:.4}", freq, value);
    }

    println!();
    Ok(())
}

/// Example 4: Refinement
/// Sharpening the best grid candidates beyond the grid resolution
fn example_4_refinement() -> Result<(), CkpError> {
    println!("Example 4: Refinement");
    println!("{}", "-".repeat(80));

    let (times, mags, uncertainties) = sinusoid(1_000, 2.31, 0.02);
    let series = TimeSeries::from_arrays(&times, &mags, &uncertainties)?;

    let model = Ckp::new()
        .frequency_range(0.5, 4.0)
        .oversampling(5.0)
        .statistic(Weighted)
        .top_k(3)
        .build()?;

    let pgram = model.periodogram(&series)?;
    let refined = model.refine(&series, &pgram)?;

    println!("{}", refined);
    println!("True frequency: 2.31");

    println!();
    Ok(())
}
