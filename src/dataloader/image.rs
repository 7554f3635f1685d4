use std::path::Path;

use image::{RgbImage, imageops::FilterType};
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    tensor::{Tensor, TensorDesc},
    utils::error::Result,
};

/// Loads an image file, resizes it to `size x size` and converts it to a
/// (3, size, size) tensor with values in [0, 1].
pub fn load_image(path: &Path, size: u32) -> Result<Tensor> {
    let img = image::open(path)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    let rgb = img.resize_exact(size, size, FilterType::Triangle).to_rgb8();
    rgb_to_tensor(&rgb)
}

/// Planar CHW layout: all red values, then green, then blue.
pub fn rgb_to_tensor(img: &RgbImage) -> Result<Tensor> {
    let (width, height) = img.dimensions();
    let (width, height) = (width as usize, height as usize);
    let plane = width * height;

    let mut data = vec![0.0f32; 3 * plane];
    for (x, y, pixel) in img.enumerate_pixels() {
        let idx = y as usize * width + x as usize;
        for c in 0..3 {
            data[c * plane + idx] = pixel[c] as f32 / 255.0;
        }
    }

    Tensor::from_vec(TensorDesc::new(3, height, width), data)
}

/// Reproducible uniform noise in [0, 1), for running without an image file.
pub fn synthetic_image(desc: TensorDesc, seed: u64) -> Tensor {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tensor = Tensor::zeros(desc);
    for v in tensor.as_mut_slice() {
        *v = rng.random::<f32>();
    }
    tensor
}
