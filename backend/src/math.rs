#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Rect {
        Rect { x, y, w, h }
    }
}

impl From<Rect> for sdl2::rect::Rect {
    #[inline(always)]
    fn from(r: Rect) -> sdl2::rect::Rect {
        sdl2::rect::Rect::new(r.x, r.y, r.w, r.h)
    }
}

// 8-bit RGBA
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const RED: Color = Color::rgba(255, 0, 0, 255);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl From<Color> for sdl2::pixels::Color {
    #[inline(always)]
    fn from(c: Color) -> sdl2::pixels::Color {
        sdl2::pixels::Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

/// The square every frame fills, centered-ish in a 640x480 window.
pub const DEMO_RECT: Rect = Rect::new(270, 190, 100, 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_rect_is_fixed() {
        assert_eq!(DEMO_RECT, Rect { x: 270, y: 190, w: 100, h: 100 });
    }

    #[test]
    fn red_is_opaque() {
        assert_eq!((Color::RED.r, Color::RED.g, Color::RED.b, Color::RED.a), (255, 0, 0, 255));
    }

    #[test]
    fn converts_to_sdl_types() {
        let r: sdl2::rect::Rect = DEMO_RECT.into();
        assert_eq!((r.x(), r.y(), r.width(), r.height()), (270, 190, 100, 100));

        let c: sdl2::pixels::Color = Color::RED.into();
        assert_eq!(c.rgba(), (255, 0, 0, 255));
    }
}
