use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Write a synthetic tracking run log for trying out score-plot
#[derive(Parser, Debug)]
#[clap(about)]
struct Cli {
    /// Output CSV path
    #[clap(default_value = "sample_run.csv")]
    output: PathBuf,

    /// Number of simulated frames
    #[clap(short = 'n', long, default_value_t = 3000)]
    frames: usize,

    /// PRNG seed
    #[clap(long, default_value_t = 42)]
    seed: u64,
}

/// Seeded SplitMix64 stream; only uniform draws in `[0, 1)` are needed.
struct FrameRng(u64);

impl FrameRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// `center` plus uniform noise in `±spread`.
    fn around(&mut self, center: f64, spread: f64) -> f64 {
        center + (2.0 * self.next_f64() - 1.0) * spread
    }
}

/// Running visibility score of a camera following a moving target.
///
/// Each frame the target is either in view or not; `score` accumulates
/// in-view time and the longest out-of-view stretch is tracked separately.
#[derive(Default)]
struct Tracker {
    total_time: f64,
    visible_time: f64,
    out_of_view: f64,
    max_out_of_view: f64,
}

impl Tracker {
    fn step(&mut self, dt: f64, visible: bool) {
        if visible {
            self.visible_time += dt;
            self.out_of_view = 0.0;
        } else {
            self.out_of_view += dt;
            self.max_out_of_view = self.max_out_of_view.max(self.out_of_view);
        }
        self.total_time += dt;
    }

    fn percent(&self) -> f64 {
        self.visible_time / self.total_time
    }

    fn time_percent(&self) -> f64 {
        self.max_out_of_view / self.total_time
    }
}

// Frame time and visibility switching rates (per frame).
const FRAME_DT: f64 = 0.02;
const FRAME_JITTER: f64 = 0.002;
const P_LOSE: f64 = 0.01;
const P_REACQUIRE: f64 = 0.08;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = FrameRng(cli.seed);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;
    writer.write_record(["timestep", "score", "time_percent"])?;

    let mut tracker = Tracker::default();
    let mut visible = true;
    for _ in 0..cli.frames {
        let flip = if visible { P_LOSE } else { P_REACQUIRE };
        if rng.next_f64() < flip {
            visible = !visible;
        }

        let dt = rng.around(FRAME_DT, FRAME_JITTER);
        tracker.step(dt, visible);

        writer.write_record(&[
            tracker.total_time.to_string(),
            tracker.percent().to_string(),
            tracker.time_percent().to_string(),
        ])?;
    }
    writer.flush().context("flushing output")?;

    println!(
        "Wrote {} frames ({:.1}s simulated, final score {:.3}) to {}",
        cli.frames,
        tracker.total_time,
        if cli.frames == 0 { 0.0 } else { tracker.percent() },
        cli.output.display()
    );
    Ok(())
}
