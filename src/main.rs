//! Headless runner for the canvas effects
//!
//! Runs the particle loop at the configured frame rate against an in-memory
//! surface, then writes SVG snapshots of both effects.
//!
//! Run with: cargo run --features cli --bin fx-cli
//!
//! Environment:
//! - PORTFOLIO_FX_CONFIG: JSON config path (defaults otherwise)
//! - FX_FRAMES: frames to run, 0 = until Ctrl-C (default 600)
//! - FX_OUT: output directory (default ".")

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use portfolio_fx::core::{
        svg, DrawingSurface, FxConfig, ParticleField, ParticleLoop, RadarChart, RecordingSurface,
    };
    use portfolio_fx::theme::Rgba;
    use std::path::PathBuf;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    /// Size of the skills chart canvas on the page
    const CHART_SIZE: f64 = 400.0;
    const BACKGROUND: Rgba = Rgba::rgb(10, 10, 10);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_fx=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("PORTFOLIO_FX_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading config");
            FxConfig::load(&path)?
        }
        Err(_) => FxConfig::default(),
    };
    let max_frames: u64 = std::env::var("FX_FRAMES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(600);
    let out_dir = PathBuf::from(std::env::var("FX_OUT").unwrap_or_else(|_| ".".to_string()));
    std::fs::create_dir_all(&out_dir)?;

    // Radar chart: one-shot draw
    let mut chart_surface = RecordingSurface::new(CHART_SIZE, CHART_SIZE);
    let chart = RadarChart::for_surface(&config.radar, &chart_surface);
    chart.draw(&mut chart_surface);
    let chart_path = out_dir.join("skills.svg");
    std::fs::write(&chart_path, svg::to_svg(&chart_surface, Some(BACKGROUND)))?;
    info!(path = %chart_path.display(), skills = chart.skills().len(), "Radar chart written");

    // Particle field: frame loop on a fixed-rate ticker
    let viewport = config.viewport;
    let mut rng = rand::thread_rng();
    let field = ParticleField::new(&config.particles, viewport.width, viewport.height, &mut rng);
    let mut frame_loop = ParticleLoop::new(
        field,
        RecordingSurface::new(viewport.width, viewport.height),
    );
    let handle = frame_loop.handle();

    let mut ticker = tokio::time::interval(Duration::from_secs_f64(1.0 / config.frame_rate));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));

    info!(
        particles = frame_loop.field().len(),
        width = viewport.width,
        height = viewport.height,
        frame_rate = config.frame_rate,
        max_frames,
        "Running particle loop"
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if max_frames > 0 && frame_loop.field().frame_count() >= max_frames {
                    handle.cancel();
                }
                if !frame_loop.tick() {
                    break;
                }
            }
            _ = stats_interval.tick() => frame_loop.log_stats(),
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                handle.cancel();
                break;
            }
        }
    }
    frame_loop.log_stats();

    let particles_path = out_dir.join("particles.svg");
    std::fs::write(
        &particles_path,
        svg::to_svg(frame_loop.surface(), Some(BACKGROUND)),
    )?;
    info!(
        path = %particles_path.display(),
        drawn = frame_loop.surface().commands().len(),
        width = frame_loop.surface().width(),
        "Particle snapshot written"
    );

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
