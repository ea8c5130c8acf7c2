//! Image feature sampling: turn a raster's bright pixels into node and path
//! candidates for the image-driven network variant.
//!
//! Scanning reads every pixel row it touches, so it runs once per relayout,
//! never per frame.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error)]
pub enum FeatureError {
    #[error("pixel buffer holds {got} bytes, expected {expected} for {width}x{height}")]
    BufferSize {
        expected: usize,
        got: usize,
        width: u32,
        height: u32,
    },
}

/// A bright-pixel node candidate with its breathing rhythm.
#[derive(Clone, Copy, Debug)]
pub struct NodePoint {
    pub pos: Vec2,
    /// Breathing frequency in Hz.
    pub freq: f32,
    pub phase: f32,
}

#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    pub nodes: Vec<NodePoint>,
    pub paths: Vec<Vec2>,
}

impl FeatureSet {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.paths.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct SamplerConfig {
    /// Scan every `step`-th pixel in both axes.
    pub step: u32,
    pub node_luma: f32,
    pub path_luma: f32,
    /// Keep probabilities break up the scan grid; without them the sampled
    /// points sit on visible rows and columns.
    pub node_keep: f32,
    pub path_keep: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            step: SAMPLE_STEP,
            node_luma: NODE_LUMA,
            path_luma: PATH_LUMA,
            node_keep: NODE_KEEP,
            path_keep: PATH_KEEP,
        }
    }
}

/// Scan an RGBA buffer for node (high-luma) and path (mid-luma) candidates.
pub fn scan_features(
    rgba: &[u8],
    width: u32,
    height: u32,
    config: &SamplerConfig,
    rng: &mut impl Rng,
) -> Result<FeatureSet, FeatureError> {
    let expected = width as usize * height as usize * 4;
    if rgba.len() != expected {
        return Err(FeatureError::BufferSize {
            expected,
            got: rgba.len(),
            width,
            height,
        });
    }

    let step = config.step.max(1) as usize;
    let mut set = FeatureSet::default();
    for y in (0..height as usize).step_by(step) {
        for x in (0..width as usize).step_by(step) {
            let i = (y * width as usize + x) * 4;
            let luma = (rgba[i] as f32 + rgba[i + 1] as f32 + rgba[i + 2] as f32) / 3.0;
            if luma > config.node_luma {
                if rng.gen::<f32>() < config.node_keep {
                    set.nodes.push(NodePoint {
                        pos: Vec2::new(x as f32, y as f32),
                        freq: NODE_FREQ_MIN + rng.gen::<f32>() * NODE_FREQ_SPAN,
                        phase: rng.gen::<f32>() * TAU,
                    });
                }
            } else if luma > config.path_luma && rng.gen::<f32>() < config.path_keep {
                set.paths.push(Vec2::new(x as f32, y as f32));
            }
        }
    }
    log::debug!(
        "[features] scanned {}x{}: {} nodes, {} paths",
        width,
        height,
        set.nodes.len(),
        set.paths.len()
    );
    Ok(set)
}
