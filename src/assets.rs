//! Image loading, scaling and mask derivation
//!
//! The only fallible startup path in the game: a missing or corrupt
//! asset aborts with a diagnostic naming the file. Decoded images stay
//! in memory as plain RGBA8 so a frontend can blit them while the sim
//! derives collision masks from the alpha channel.

use std::path::Path;

use anyhow::{Context, Result};
use glam::Vec2;

use crate::consts::MASK_ALPHA_THRESHOLD;
use crate::settings::TrackConfig;
use crate::sim::{Mask, Sprite};

/// A decoded RGBA8 image
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Image {
    /// Wrap a raw buffer; `rgba` must be `width * height * 4` bytes
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Decode an image file
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = image::open(path)
            .with_context(|| format!("failed to load image '{}'", path.display()))?
            .to_rgba8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            rgba: decoded.into_raw(),
        })
    }

    /// Decode and scale in one step, the way every track sheet comes in
    pub fn load_scaled(path: &Path, factor: f32) -> Result<Self> {
        Ok(Self::load(path)?.scaled(factor))
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Raw pixels, row-major RGBA8
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Nearest-neighbor scaling by `factor`
    pub fn scaled(&self, factor: f32) -> Self {
        let width = ((self.width as f32 * factor).round() as u32).max(1);
        let height = ((self.height as f32 * factor).round() as u32).max(1);
        let mut rgba = Vec::with_capacity((width * height * 4) as usize);

        for y in 0..height {
            // sample the source pixel each destination center lands on
            let sy = (((y as f32 + 0.5) * self.height as f32 / height as f32) as u32)
                .min(self.height - 1);
            for x in 0..width {
                let sx = (((x as f32 + 0.5) * self.width as f32 / width as f32) as u32)
                    .min(self.width - 1);
                let i = ((sy * self.width + sx) * 4) as usize;
                rgba.extend_from_slice(&self.rgba[i..i + 4]);
            }
        }
        Self {
            width,
            height,
            rgba,
        }
    }

    /// Solid-pixel mask of this image
    pub fn to_mask(&self) -> Mask {
        Mask::from_alpha(self.width, self.height, &self.rgba, MASK_ALPHA_THRESHOLD)
    }

    /// Collision sprite for a car drawn from this image
    pub fn to_sprite(&self) -> Sprite {
        Sprite::new(self.to_mask())
    }
}

/// Every sheet the track needs, scaled, with collision masks derived
#[derive(Debug, Clone)]
pub struct TrackAssets {
    pub grass: Image,
    pub track: Image,
    pub border: Image,
    pub finish: Image,
    pub player_car: Image,
    pub rival_car: Image,
    pub border_mask: Mask,
    pub finish_mask: Mask,
}

impl TrackAssets {
    /// Load the standard asset set from `dir`. Any missing or corrupt
    /// file aborts startup with the offending path in the error.
    pub fn load(dir: &Path, config: &TrackConfig) -> Result<Self> {
        let grass = Image::load_scaled(&dir.join("grass.jpg"), config.grass_scale)?;
        let track = Image::load_scaled(&dir.join("track.png"), config.track_scale)?;
        let border = Image::load_scaled(&dir.join("track-border.png"), config.border_scale)?;
        let finish = Image::load_scaled(&dir.join("finish.png"), config.finish_scale)?;
        let player_car = Image::load_scaled(&dir.join("red-car.png"), config.car_scale)?;
        let rival_car = Image::load_scaled(&dir.join("green-car.png"), config.car_scale)?;

        log::info!(
            "loaded track assets from {} (track {}x{})",
            dir.display(),
            track.width(),
            track.height()
        );

        let border_mask = border.to_mask();
        let finish_mask = finish.to_mask();
        Ok(Self {
            grass,
            track,
            border,
            finish,
            player_car,
            rival_car,
            border_mask,
            finish_mask,
        })
    }
}
