//! Decorative "looks like a model" prediction path. The linear scorer is
//! never trained, so its output carries no signal; it exists so the demo
//! can exercise real pixel data while honoring the same no-sign override
//! as the mock backend.

use crate::frame::{Frame, FRAME_SIZE};
use crate::prediction::{Prediction, Predictor, NO_SIGN_PROBABILITY};
use crate::vocabulary::GLOSSES;
use ndarray::{Array1, Array2};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Frames are mean-pooled into a POOL_GRID x POOL_GRID grid per channel.
const POOL_GRID: usize = 4;
const FEATURE_DIM: usize = POOL_GRID * POOL_GRID * 3;

/// Fixed seed so the (untrained) weights are identical across processes.
const WEIGHT_SEED: u64 = 0x7f1d_5ea5;

pub struct ToyModelPredictor {
    weights: Array2<f32>,
    rng: Mutex<StdRng>,
}

impl ToyModelPredictor {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        let mut weight_rng = StdRng::seed_from_u64(WEIGHT_SEED);
        let weights = Array2::from_shape_fn((GLOSSES.len(), FEATURE_DIM), |_| {
            weight_rng.random_range(-1.0f32..1.0)
        });

        Self {
            weights,
            rng: Mutex::new(rng),
        }
    }

    fn features(frame: &Frame) -> Array1<f32> {
        let pixels = frame.pixels();
        let cell = FRAME_SIZE as usize / POOL_GRID;
        let norm = (cell * cell) as f32 * 255.0;
        let mut features = Array1::zeros(FEATURE_DIM);

        for gy in 0..POOL_GRID {
            for gx in 0..POOL_GRID {
                let mut sums = [0f32; 3];
                for y in 0..cell {
                    for x in 0..cell {
                        let pixel = pixels.get_pixel((gx * cell + x) as u32, (gy * cell + y) as u32);
                        sums[0] += pixel[0] as f32;
                        sums[1] += pixel[1] as f32;
                        sums[2] += pixel[2] as f32;
                    }
                }
                let base = (gy * POOL_GRID + gx) * 3;
                for channel in 0..3 {
                    features[base + channel] = sums[channel] / norm;
                }
            }
        }

        features
    }

    /// Arg-max over the softmaxed logits: (vocabulary index, probability).
    fn score(&self, frame: &Frame) -> (usize, f32) {
        let logits = self.weights.dot(&Self::features(frame));
        let max = logits.iter().fold(f32::NEG_INFINITY, |a, &b| a.max(b));
        let exp = logits.mapv(|l| (l - max).exp());
        let sum = exp.sum();

        exp.iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(index, &e)| (index, e / sum))
            .expect("vocabulary is non-empty")
    }
}

impl Default for ToyModelPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for ToyModelPredictor {
    fn predict(&self, frame: &Frame) -> anyhow::Result<Prediction> {
        let (index, probability) = self.score(frame);

        if self.rng.lock().random_bool(NO_SIGN_PROBABILITY) {
            return Ok(Prediction::no_sign());
        }

        Ok(Prediction {
            gloss: GLOSSES[index].to_string(),
            confidence: probability as f64,
        })
    }
}
