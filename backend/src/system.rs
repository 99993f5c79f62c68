use crate::error::{PlatformError, PlatformResult};
use crate::math::{Color, Rect};
use sdl2;
use sdl2::event::Event;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub enum IoEvent {
    Quit,
    Other,
}

impl From<Event> for IoEvent {
    fn from(event: Event) -> IoEvent {
        match event {
            Event::Quit { .. } => IoEvent::Quit,
            _ => IoEvent::Other,
        }
    }
}

/// Entry point of a windowing library: brings the video subsystem up.
pub trait Platform {
    type Video: VideoDevice;

    fn init_video(&self) -> PlatformResult<Self::Video>;
}

pub trait VideoDevice {
    type Surface: Surface;

    /// Creates the window and its renderer in one go.
    fn create_window_and_renderer(self, w: u32, h: u32) -> PlatformResult<Self::Surface>;
}

/// A window with a renderer bound to it.
pub trait Surface {
    fn set_title(&mut self, title: &str) -> PlatformResult<()>;
    /// Non-blocking. `None` once the queue is drained.
    fn poll_event(&mut self) -> Option<IoEvent>;
    fn set_draw_color(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect) -> Result<(), String>;
    fn present(&mut self);
}

pub struct Sdl;

pub struct SdlVideo {
    sdl_context: sdl2::Sdl,
    video_subsystem: sdl2::VideoSubsystem,
    event_pump: sdl2::EventPump,
}

impl Platform for Sdl {
    type Video = SdlVideo;

    fn init_video(&self) -> PlatformResult<SdlVideo> {
        let sdl_context = sdl2::init().map_err(PlatformError::VideoInit)?;
        let video_subsystem = sdl_context.video().map_err(PlatformError::VideoInit)?;
        let event_pump = sdl_context.event_pump().map_err(PlatformError::VideoInit)?;
        log::info!(
            "SDL video initialized, driver: {}",
            video_subsystem.current_video_driver()
        );
        Ok(SdlVideo {
            sdl_context,
            video_subsystem,
            event_pump,
        })
    }
}

impl VideoDevice for SdlVideo {
    type Surface = System;

    fn create_window_and_renderer(self, w: u32, h: u32) -> PlatformResult<System> {
        let window = match self.video_subsystem.window("", w, h).build() {
            Ok(w) => w,
            Err(e) => return Err(PlatformError::WindowCreation(e.to_string())),
        };
        let canvas = match window.into_canvas().build() {
            Ok(c) => c,
            Err(e) => return Err(PlatformError::WindowCreation(e.to_string())),
        };
        log::info!("created {w}x{h} window with renderer");

        Ok(System {
            sdl_context: self.sdl_context,
            video_subsystem: self.video_subsystem,
            canvas,
            event_pump: self.event_pump,
        })
    }
}

/// Owns the window/renderer pair; both go away when this is dropped.
pub struct System {
    // kept alive for as long as the canvas is
    #[allow(dead_code)]
    sdl_context: sdl2::Sdl,
    #[allow(dead_code)]
    video_subsystem: sdl2::VideoSubsystem,
    canvas: Canvas<Window>,
    event_pump: sdl2::EventPump,
}

impl Surface for System {
    fn set_title(&mut self, title: &str) -> PlatformResult<()> {
        self.canvas
            .window_mut()
            .set_title(title)
            .map_err(|e| PlatformError::WindowCreation(format!("invalid window title: {e}")))
    }

    fn poll_event(&mut self) -> Option<IoEvent> {
        self.event_pump.poll_event().map(IoEvent::from)
    }

    fn set_draw_color(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
    }

    fn fill_rect(&mut self, rect: Rect) -> Result<(), String> {
        self.canvas.fill_rect(sdl2::rect::Rect::from(rect))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_quit() {
        let e = IoEvent::from(Event::Quit { timestamp: 0 });
        assert!(matches!(e, IoEvent::Quit));
    }

    // The only test in this crate that touches real SDL: Sdl may only be
    // initialized from one thread at a time.
    #[test]
    fn software_renderer_on_dummy_driver() {
        std::env::set_var("SDL_VIDEODRIVER", "dummy");
        let state = crate::app::RunState::from_args(["--exit"]);
        crate::app::run(&Sdl, &crate::app::Settings::default(), state).unwrap();

        let mut surface = Sdl.init_video().unwrap().create_window_and_renderer(640, 480).unwrap();
        surface.set_title("devenv C & SDL2 example").unwrap();
        surface.set_draw_color(Color::RED);
        surface.fill_rect(crate::math::DEMO_RECT).unwrap();
        surface.present();
    }

    #[test]
    fn everything_else_is_other() {
        let e = IoEvent::from(Event::AppLowMemory { timestamp: 0 });
        assert!(matches!(e, IoEvent::Other));
    }
}
