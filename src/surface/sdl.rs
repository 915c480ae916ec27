use std::time::Instant;

use sdl3::{EventPump, Sdl};
use sdl3::pixels::Color;
use sdl3::rect::Rect;
use sdl3::render::Canvas;
use sdl3::video::Window;

use crate::error::{AppError, Result};
use crate::settings::Settings;
use crate::sim::Rgba;

use super::{BackendInfo, DrawCommand, Input, Surface, input};

/// Fullscreen SDL3 window with an accelerated, vsync-gated renderer.
pub struct SdlSurface {
    event_pump: EventPump,  // Event queue for the window.
    canvas: Canvas<Window>, // Canvas to draw on.
    epoch: Instant,         // Origin of `ticks_ms`.
    _sdl: Sdl,              // SDL context, torn down last.
}

impl SdlSurface {
    /// Initializes SDL, opens the window, and creates the renderer for it.
    pub fn new(settings: &Settings) -> Result<Self> {
        let sdl = sdl3::init()?;
        let video = sdl.video()?;

        #[cfg(feature = "gles2")]
        sdl3::hint::set(sdl3::hint::names::RENDER_DRIVER, "opengles2");

        // Pace frames on the display refresh.
        sdl3::hint::set(sdl3::hint::names::RENDER_VSYNC, "1");

        let window = video
            .window(settings.title, settings.width, settings.height)
            .fullscreen()
            .build()
            .map_err(|why| AppError::Window(why.to_string()))?;

        let mut canvas = sdl3::render::create_renderer(window, None)?;
        require_accelerated(&canvas.renderer_name)?;

        // Keep simulation coordinates fixed regardless of the display's real resolution.
        canvas.set_logical_size(
            settings.width,
            settings.height,
            sdl3::sys::render::SDL_LOGICAL_PRESENTATION_LETTERBOX,
        )?;

        let event_pump = sdl.event_pump()?;

        Ok(Self {
            event_pump,
            canvas,
            epoch: Instant::now(),
            _sdl: sdl,
        })
    }
}

impl Surface for SdlSurface {
    fn poll_input(&mut self, out: &mut Vec<Input>) {
        input::get_input(&mut self.event_pump, out);
    }

    fn draw(&mut self, command: DrawCommand) {
        match command {
            DrawCommand::Clear(color) => {
                self.canvas.set_draw_color(Color::from(color));
                self.canvas.clear();
            }
            DrawCommand::FillRect(x, y, size, color) => {
                self.canvas.set_draw_color(Color::from(color));
                let _ = self.canvas.fill_rect(Rect::new(x, y, size, size));
            }
        }
    }

    fn present(&mut self) {
        self.canvas.present();
    }

    #[allow(clippy::cast_possible_truncation)]
    fn ticks_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    fn backend_info(&self) -> BackendInfo {
        use sdl3::sys::pixels::{SDL_PIXELFORMAT_UNKNOWN, SDL_PixelFormat};
        use sdl3::sys::properties::SDL_GetPointerProperty;
        use sdl3::sys::render::{
            SDL_GetRendererProperties, SDL_PROP_RENDERER_TEXTURE_FORMATS_POINTER,
        };

        let renderer = self.canvas.raw();

        // SAFETY: `renderer` is owned by `self.canvas` and outlives this call. The format list
        // is owned by SDL and terminated by `SDL_PIXELFORMAT_UNKNOWN`.
        let texture_formats = unsafe {
            let props = SDL_GetRendererProperties(renderer);
            let formats = SDL_GetPointerProperty(
                props,
                SDL_PROP_RENDERER_TEXTURE_FORMATS_POINTER,
                std::ptr::null_mut(),
            ) as *const SDL_PixelFormat;

            let mut texture_formats = 0;
            if !formats.is_null() {
                while *formats.add(texture_formats) != SDL_PIXELFORMAT_UNKNOWN {
                    texture_formats += 1;
                }
            }

            texture_formats
        };

        BackendInfo {
            name: self.canvas.renderer_name.clone(),
            texture_formats,
        }
    }
}

/// Name SDL gives its CPU rasterizer.
const SOFTWARE_RENDERER: &str = "software";

/// Rejects renderers that do not draw on the GPU.
fn require_accelerated(name: &str) -> Result<()> {
    if name.eq_ignore_ascii_case(SOFTWARE_RENDERER) {
        return Err(AppError::Renderer(format!(
            "no accelerated renderer available, got '{name}'"
        )));
    }

    Ok(())
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Color {
        Color::RGBA(color.0, color.1, color.2, color.3)
    }
}
