use crate::error::PlatformResult;
use crate::math::{Color, Rect, DEMO_RECT};
use crate::system::{IoEvent, Platform, Surface, VideoDevice};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

impl RunState {
    /// `args` must not include the program name.
    pub fn from_args<I, S>(args: I) -> RunState
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(first), None) if first.as_ref() == "--exit" => RunState::Stopped,
            _ => RunState::Running,
        }
    }
}

pub struct Settings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub rect: Rect,
    pub color: Color,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            title: "devenv C & SDL2 example".to_string(),
            width: 640,
            height: 480,
            rect: DEMO_RECT,
            color: Color::RED,
        }
    }
}

/// Drains every queued event. Each drained event, quit included, is
/// followed by a fill + present. Returns the number of frames presented.
pub fn drain_events<S: Surface>(surface: &mut S, settings: &Settings, state: &mut RunState) -> usize {
    let mut frames = 0;
    while let Some(event) = surface.poll_event() {
        match event {
            IoEvent::Quit => {
                log::debug!("quit requested");
                *state = RunState::Stopped;
            }
            IoEvent::Other => {}
        }

        surface.set_draw_color(settings.color);
        if let Err(e) = surface.fill_rect(settings.rect) {
            log::warn!("fill_rect failed: {e}");
        }
        surface.present();
        frames += 1;
    }
    frames
}

pub fn run<P: Platform>(platform: &P, settings: &Settings, mut state: RunState) -> PlatformResult<()> {
    let video = platform.init_video()?;
    let mut surface = video.create_window_and_renderer(settings.width, settings.height)?;
    surface.set_title(&settings.title)?;

    if state == RunState::Stopped {
        log::info!("--exit given, skipping the event loop");
    }

    let mut frames = 0;
    while state == RunState::Running {
        frames += drain_events(&mut surface, settings, &mut state);
    }
    log::debug!("event loop finished after {frames} frames");
    Ok(())
}
