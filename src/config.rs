use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::foundation::core::{Millis, Viewport};
use crate::foundation::error::{BouquetError, BouquetResult};
use crate::foundation::rng::SeededRng;
use crate::paint::color::Color;
use crate::render::cpu::CpuSurfaceOpts;
use crate::runtime::host::ScriptedHost;
use crate::scene::SceneOpts;
use crate::scene::background::DEFAULT_STAR_COUNT;
use crate::scene::bouquet::FlowerCap;

/// Scripted pointer-down in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TapDef {
    /// Clock value the tap is delivered at.
    pub at_ms: Millis,
    /// Client x.
    pub x: f64,
    /// Client y.
    pub y: f64,
}

/// JSON-facing run configuration. Every field is optional.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct SceneConfig {
    /// Drawable size in CSS pixels.
    pub viewport: Viewport,
    /// Device pixels per CSS pixel.
    pub device_pixel_ratio: f64,
    /// Generator seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Number of background stars.
    pub star_count: usize,
    /// Bound on accumulated flowers. `None` keeps every flower.
    pub max_flowers: Option<usize>,
    /// Frame rate of the scripted host.
    pub fps: u32,
    /// Frames the scripted host delivers.
    pub frames: u64,
    /// Scripted pointer events.
    pub taps: Vec<TapDef>,
    /// Opaque backing colour.
    pub clear: Color,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            device_pixel_ratio: 1.0,
            seed: None,
            star_count: DEFAULT_STAR_COUNT,
            max_flowers: None,
            fps: 60,
            frames: 120,
            taps: Vec::new(),
            clear: Color::BLACK,
        }
    }
}

impl SceneConfig {
    /// Parse from a JSON reader and validate.
    pub fn from_reader<R: std::io::Read>(r: R) -> BouquetResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BouquetError::serde(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse from a JSON file on disk and validate.
    pub fn from_path(path: impl AsRef<Path>) -> BouquetResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            BouquetError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check ranges serde cannot express.
    pub fn validate(&self) -> BouquetResult<()> {
        let vp = self.viewport;
        if !(vp.width.is_finite() && vp.height.is_finite() && vp.width > 0.0 && vp.height > 0.0) {
            return Err(BouquetError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        if !(self.device_pixel_ratio.is_finite() && self.device_pixel_ratio > 0.0) {
            return Err(BouquetError::validation(
                "device_pixel_ratio must be finite and > 0",
            ));
        }
        if self.fps == 0 {
            return Err(BouquetError::validation("fps must be non-zero"));
        }
        if self.max_flowers == Some(0) {
            return Err(BouquetError::validation("max_flowers must be at least 1"));
        }
        if let Some(tap) = self
            .taps
            .iter()
            .find(|t| !(t.at_ms.is_finite() && t.at_ms >= 0.0))
        {
            return Err(BouquetError::validation(format!(
                "tap time must be finite and >= 0, got {}",
                tap.at_ms
            )));
        }
        Ok(())
    }

    /// Scene startup options.
    pub fn scene_opts(&self) -> SceneOpts {
        SceneOpts {
            star_count: self.star_count,
            cap: FlowerCap::from_option(self.max_flowers),
        }
    }

    /// CPU surface options.
    pub fn surface_opts(&self) -> CpuSurfaceOpts {
        CpuSurfaceOpts {
            device_pixel_ratio: self.device_pixel_ratio,
            clear: self.clear,
        }
    }

    /// Seeded generator, or an entropy-seeded one without a seed.
    pub fn rng(&self) -> SeededRng {
        match self.seed {
            Some(seed) => SeededRng::from_seed_u64(seed),
            None => SeededRng::from_entropy(),
        }
    }

    /// Host replaying the configured taps at the configured frame rate.
    pub fn scripted_host(&self) -> BouquetResult<ScriptedHost> {
        let host = ScriptedHost::new(self.fps, self.frames, self.viewport)?;
        Ok(self
            .taps
            .iter()
            .fold(host, |host, tap| host.with_tap(tap.at_ms, tap.x, tap.y)))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
