use std::process::ExitCode;

use settings::Settings;
use sim::SimCore;
use surface::{SdlSurface, Surface};

mod error;
mod settings;
mod sim;
mod surface;
mod vec2f;

/// Logs at `info` by default, `debug` for development builds. `RUST_LOG` overrides both.
fn init_logger() {
    let default_level = if cfg!(any(debug_assertions, feature = "debug_output")) {
        "debug"
    } else {
        "info"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> ExitCode {
    init_logger();

    let settings = Settings::default();
    let mut surface = match SdlSurface::new(&settings) {
        Ok(surface) => surface,
        Err(why) => {
            log::error!("{why}");
            eprintln!("{why}");
            return ExitCode::FAILURE;
        }
    };

    let backend = surface.backend_info();
    log::info!("ACTIVE DRIVER: {}", backend.name);
    log::info!("TEXTURE FORMATS: {}", backend.texture_formats);
    log::info!("LOGICAL SIZE: {}x{}", settings.width, settings.height);

    let mut core = SimCore::new(settings, surface.ticks_ms());
    core.run(&mut surface);

    log::info!("Shutting down with {} squares.", core.population().len());
    ExitCode::SUCCESS
}
