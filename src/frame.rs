use image::{imageops::FilterType, RgbImage};
use thiserror::Error;

/// Side length every incoming frame is normalized to.
pub const FRAME_SIZE: u32 = 224;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("Empty image payload")]
    Empty,
}

/// A validated, decoded camera frame: three-channel RGB at
/// `FRAME_SIZE` x `FRAME_SIZE`, whatever the client uploaded.
#[derive(Debug)]
pub struct Frame {
    image: RgbImage,
}

impl Frame {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FrameError> {
        if bytes.is_empty() {
            return Err(FrameError::Empty);
        }

        let decoded = image::load_from_memory(bytes)?;
        let image = decoded
            .resize_exact(FRAME_SIZE, FRAME_SIZE, FilterType::CatmullRom)
            .to_rgb8();

        Ok(Self { image })
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.image
    }
}
