//! Density-independent sizes.
//!
//! Dimensions are declared in dp and resolved against the host's `Density`
//! once, when a model is laid out.

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(self, density: Density) -> f32 {
        self.0 * density.scale
    }
}

/// Physical pixels per dp.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Density {
    pub scale: f32,
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}
