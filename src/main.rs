use std::path::PathBuf;

use anyhow::Context;
use cartesian::{
    init_logging, integer_mod, paint_with_style, Config, LabeledPoint, PixmapSink, Plane,
    Viewport, BUILD_DATE, BUILD_PROFILE, VERSION,
};

const DEFAULT_OUTPUT: &str = "cartesian.png";

fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(
        "Cartesian {} (built {}, {} profile)",
        VERSION,
        BUILD_DATE,
        BUILD_PROFILE
    );

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let config = match cartesian::default_config_path() {
        Ok(path) => Config::load_or_default(&path)
            .with_context(|| format!("Loading {}", path.display()))?,
        Err(e) => {
            tracing::warn!("{}; using default settings", e);
            Config::default()
        }
    };

    let plane = Plane::with_title("Plot Functions Demo");
    plane.plot_function("g", |x| x.powi(3))?;
    plane.plot_function("f", |x| integer_mod(x.powi(2), 7.0))?;
    plane.plot_function("z", |x| x.powi(2))?;
    plane.plot_point(LabeledPoint::labeled(2.0, 8.0, "A"));
    plane.plot_point(LabeledPoint::labeled(-3.0, 9.0, "B"));
    plane.plot_point(LabeledPoint::labeled(6.0, 36.0, "C"));

    let mut sink = PixmapSink::new(config.render.width, config.render.height)?;
    let surface = cartesian::FixedSurface::new(
        i64::from(config.render.width),
        i64::from(config.render.height),
    );
    let mut viewport = Viewport::with_state(&plane, surface, config.viewport_state()?);

    let steps = viewport.fit_to_data()?;
    tracing::info!(
        "'{}': fitted step sizes x={} y={}",
        plane.title().unwrap_or("untitled"),
        steps.x,
        steps.y
    );

    paint_with_style(&viewport, &mut sink, &config.paint_style());
    sink.save_png(&output)?;

    Ok(())
}
