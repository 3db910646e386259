use rand::prelude::*;
use std::f64::consts::TAU;

use tilt_core::{
    ControllerConfig, GyroController, MemorySurface, OrientationSample, SensorGate, SMOOTH_FACTOR,
};

// Synthetic hand-held tilt: slow sweeps plus sensor jitter.
const SWEEP_BETA_AMPLITUDE: f64 = 25.0; // degrees, exceeds both layer bounds
const SWEEP_GAMMA_AMPLITUDE: f64 = 20.0;
const SWEEP_PERIOD_SAMPLES: f64 = 120.0;
const JITTER_DEG: f64 = 0.8;
const LOG_EVERY: usize = 20;

struct ReplayParams {
    samples: usize,
    seed: u64,
    smooth_factor: f64,
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> anyhow::Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{name}={raw:?} is not valid")),
        Err(_) => Ok(default),
    }
}

fn params_from_env() -> anyhow::Result<ReplayParams> {
    Ok(ReplayParams {
        samples: env_or("TILT_SAMPLES", 240)?,
        seed: env_or("TILT_SEED", 7)?,
        smooth_factor: env_or("TILT_SMOOTH_FACTOR", SMOOTH_FACTOR)?,
    })
}

fn synthetic_sample(i: usize, rng: &mut StdRng) -> OrientationSample {
    let t = i as f64 / SWEEP_PERIOD_SAMPLES * TAU;
    let beta = SWEEP_BETA_AMPLITUDE * t.sin() + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
    let gamma = SWEEP_GAMMA_AMPLITUDE * (0.7 * t).sin() + rng.gen_range(-JITTER_DEG..=JITTER_DEG);
    let alpha = (i as f64 * 0.5) % 360.0;
    OrientationSample::new(alpha, beta, gamma).rounded()
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let params = params_from_env()?;
    let config = ControllerConfig {
        smooth_factor: params.smooth_factor,
        ..ControllerConfig::default()
    };
    let mut controller = GyroController::new(config)?;
    log::info!(
        "replaying {} samples (seed {}, smoothing {})",
        params.samples,
        params.seed,
        params.smooth_factor
    );

    // No prompt on desktop; the stream opens immediately.
    let mut gate = SensorGate::default();
    gate.authorize_without_prompt();

    let mut rng = StdRng::seed_from_u64(params.seed);
    let mut background = MemorySurface::default();
    let mut character = MemorySurface::default();
    let mut peak_translation = 0.0_f64;

    for i in 0..params.samples {
        if !gate.admits_samples() {
            break;
        }
        let sample = synthetic_sample(i, &mut rng);
        let Some(frame) = controller.update(Some(&mut background), &sample, Some(&mut character))
        else {
            continue;
        };
        peak_translation = peak_translation
            .max(frame.character.translation_px.x.abs())
            .max(frame.character.translation_px.y.abs());

        if i % LOG_EVERY == 0 {
            log::info!("#{i:04} {sample}");
            log::info!(
                "  background: transform {:?} position {:?}",
                background.transform.as_deref().unwrap_or_default(),
                background.background_position.as_deref().unwrap_or_default()
            );
            log::info!(
                "  character:  transform {:?}",
                character.transform.as_deref().unwrap_or_default()
            );
        } else {
            log::debug!("#{i:04} {sample} -> {}", frame.character);
        }
    }

    log::info!(
        "done: {} style writes, peak character translation {:.1}px (ratio {})",
        background.writes + character.writes,
        peak_translation,
        controller.character().move_ratio()
    );
    Ok(())
}
