//! Frame description handed to the renderer

use serde::{Deserialize, Serialize};

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel multiply blend (`self * other / 255`)
    pub fn multiply(self, other: Rgb) -> Rgb {
        let mul = |a: u8, b: u8| ((a as u16 * b as u16) / 255) as u8;
        Rgb::new(mul(self.r, other.r), mul(self.g, other.g), mul(self.b, other.b))
    }
}

/// Base images supplied by the asset collaborator (all face left)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteImage {
    PlayerSwim(u8),
    /// Chomp images are numbered from 1
    PlayerChomp(u8),
    EnemySwim(u8),
    DeadFish,
}

/// A base image plus the derivations to apply to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpriteKey {
    pub image: SpriteImage,
    /// Target size in pixels
    pub size: (u32, u32),
    /// Flip horizontally (fish facing right)
    pub mirrored: bool,
    /// Multiply-blend colour, applied before scaling
    pub tint: Option<Rgb>,
}

/// One blit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub key: SpriteKey,
    pub top_left: (i32, i32),
}

/// One line of centred text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDraw {
    pub text: String,
    pub center: (i32, i32),
    pub font_size: u32,
    pub color: Rgb,
}

/// Everything needed to paint one screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub background: Rgb,
    /// Drawn in order; later sprites cover earlier ones
    pub sprites: Vec<SpriteDraw>,
    pub texts: Vec<TextDraw>,
    /// Splash frames stay up this long before the next one
    pub hold_ms: Option<u32>,
}

impl Frame {
    pub fn new(background: Rgb) -> Self {
        Self {
            background,
            sprites: Vec::new(),
            texts: Vec::new(),
            hold_ms: None,
        }
    }
}

/// Display collaborator
pub trait Renderer {
    fn draw(&mut self, frame: &Frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiply_blend() {
        let white = Rgb::new(255, 255, 255);
        let tint = Rgb::new(201, 126, 62);
        assert_eq!(white.multiply(tint), tint);
        assert_eq!(Rgb::new(0, 0, 0).multiply(tint), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::new(128, 128, 128).multiply(Rgb::new(128, 64, 0)), Rgb::new(64, 32, 0));
    }
}
