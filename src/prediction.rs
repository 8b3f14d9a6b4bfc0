use crate::frame::Frame;
use crate::vocabulary::{GLOSSES, NO_SIGN_SENTINEL};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Probability that a prediction is overridden to the no-sign sentinel.
pub const NO_SIGN_PROBABILITY: f64 = 0.3;
/// Confidence reported alongside the sentinel.
pub const NO_SIGN_CONFIDENCE: f64 = 0.1;
/// Confidence range for mock vocabulary predictions.
const CONFIDENCE_LOW: f64 = 0.4;
const CONFIDENCE_HIGH: f64 = 0.95;

#[derive(Debug, Clone)]
pub struct Prediction {
    pub gloss: String,
    pub confidence: f64,
}

impl Prediction {
    pub fn no_sign() -> Self {
        Self {
            gloss: NO_SIGN_SENTINEL.to_string(),
            confidence: NO_SIGN_CONFIDENCE,
        }
    }

    /// Confidence rounded to three decimals, as the API reports it.
    pub fn rounded_confidence(&self) -> f64 {
        (self.confidence * 1000.0).round() / 1000.0
    }
}

/// A prediction backend. Implementations must apply the no-sign override
/// themselves so that both backends share the same observable contract.
pub trait Predictor: Send + Sync {
    fn predict(&self, frame: &Frame) -> anyhow::Result<Prediction>;
}

/// Draws a uniformly random gloss and confidence, ignoring the frame.
pub struct MockPredictor {
    rng: Mutex<StdRng>,
}

impl MockPredictor {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl Default for MockPredictor {
    fn default() -> Self {
        Self::new()
    }
}

impl Predictor for MockPredictor {
    fn predict(&self, _frame: &Frame) -> anyhow::Result<Prediction> {
        let mut rng = self.rng.lock();
        let index = rng.random_range(0..GLOSSES.len());
        let confidence = rng.random_range(CONFIDENCE_LOW..CONFIDENCE_HIGH);

        if rng.random_bool(NO_SIGN_PROBABILITY) {
            return Ok(Prediction::no_sign());
        }

        Ok(Prediction {
            gloss: GLOSSES[index].to_string(),
            confidence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::tests::red_png;
    use crate::vocabulary;

    fn test_frame() -> Frame {
        Frame::from_bytes(&red_png(32, 32)).unwrap()
    }

    #[test]
    fn predictions_stay_inside_the_contract() {
        let predictor = MockPredictor::with_rng(StdRng::seed_from_u64(7));
        let frame = test_frame();

        for _ in 0..1_000 {
            let prediction = predictor.predict(&frame).unwrap();
            if prediction.gloss == vocabulary::NO_SIGN_SENTINEL {
                assert_eq!(prediction.confidence, NO_SIGN_CONFIDENCE);
            } else {
                assert!(vocabulary::contains(&prediction.gloss));
                assert!(prediction.confidence >= CONFIDENCE_LOW);
                assert!(prediction.confidence < CONFIDENCE_HIGH);
            }
        }
    }

    #[test]
    fn no_sign_rate_converges_to_thirty_percent() {
        let predictor = MockPredictor::with_rng(StdRng::seed_from_u64(42));
        let frame = test_frame();
        let samples = 10_000;

        let no_sign = (0..samples)
            .filter(|_| {
                predictor.predict(&frame).unwrap().gloss == vocabulary::NO_SIGN_SENTINEL
            })
            .count();

        let rate = no_sign as f64 / samples as f64;
        assert!((rate - NO_SIGN_PROBABILITY).abs() < 0.02, "rate was {rate}");
    }

    #[test]
    fn confidence_rounds_to_three_decimals() {
        let prediction = Prediction {
            gloss: "merhaba".to_string(),
            confidence: 0.73149,
        };
        assert_eq!(prediction.rounded_confidence(), 0.731);
    }
}
