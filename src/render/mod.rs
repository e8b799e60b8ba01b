//! Rendering boundary
//!
//! The simulation never draws. Each tick it is turned into a [`Frame`]: a
//! background colour, an ordered list of sprites to blit and some text. A
//! [`Renderer`] collaborator puts that on screen; sprites are named by
//! [`SpriteKey`] values which an [`AssetOps`] implementation turns into real
//! image handles through [`SpriteCache`].

pub mod assets;
pub mod frame;
pub mod scene;
pub mod splash;

pub use assets::{AssetOps, NamedAssets, NamedHandle, SpriteCache};
pub use frame::{Frame, Renderer, Rgb, SpriteDraw, SpriteImage, SpriteKey, TextDraw};
pub use scene::{play_frame, sprite_key};
pub use splash::{lost_frames, splash_frames, won_frames};

/// Presentation constants
pub mod style {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const XKCD_CRIMSON: Rgb = Rgb::new(140, 0, 15);
    pub const XKCD_BABY_BLUE: Rgb = Rgb::new(162, 207, 254);
    pub const XKCD_CERULEAN: Rgb = Rgb::new(4, 133, 209);

    pub const BG_COLOR: Rgb = XKCD_BABY_BLUE;
    pub const INVERT_BG_COLOR: Rgb = XKCD_CERULEAN;
    pub const LOSE_SCREEN_COLOR: Rgb = XKCD_CRIMSON;

    /// Score text sits this far below the top edge
    pub const SCORE_HEIGHT_OFFSET: i32 = 32;
    pub const SCORE_FONT_SIZE: u32 = 24;
    pub const END_SPLASH_FONT_SIZE: u32 = 36;
    /// Splash fish is drawn this far above the centre
    pub const END_SPLASH_PLAYER_OFFSET: i32 = 100;

    pub const WIN_FLASHES: usize = 5;
    pub const WIN_FLASH_DURATION_MS: u32 = 500;
    pub const LOSE_SCREEN_DURATION_MS: u32 = 2000;

    pub const WIN_TEXT: &str = "You won!";
    pub const LOSE_TEXT: &str = "You got eaten";
}
