use rand::Rng;
use std::f32::consts::PI;

/// Box-Muller transform to generate normal distribution
pub fn normal_sample<R: Rng + ?Sized>(rng: &mut R, mean: f32, std_dev: f32) -> f32 {
    // (0, 1] so ln never sees zero
    let u1 = 1.0 - rng.random::<f32>();
    let u2 = rng.random::<f32>();

    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
    mean + std_dev * z
}

/// Spatial output size of a convolution: `floor((n - k + 2p) / s) + 1`.
///
/// Returns `None` when the stride is zero, the kernel does not fit the
/// padded input, or the padded size overflows.
pub fn conv_output_size(input: usize, kernel: usize, stride: usize, padding: usize) -> Option<usize> {
    let padded = padding.checked_mul(2).and_then(|p| input.checked_add(p))?;
    if stride == 0 || kernel == 0 || kernel > padded {
        return None;
    }
    Some((padded - kernel) / stride + 1)
}

/// Spatial output size of an unpadded pooling window: `floor((n - k) / s) + 1`.
pub fn pool_output_size(input: usize, kernel: usize, stride: usize) -> Option<usize> {
    conv_output_size(input, kernel, stride, 0)
}

/// Index of the first maximum. Strict `>` keeps the earliest of equal values.
pub fn argmax(values: &[f32]) -> Option<usize> {
    let (first, rest) = values.split_first()?;

    let mut max_idx = 0;
    let mut max_value = *first;
    for (i, &v) in rest.iter().enumerate() {
        if v > max_value {
            max_value = v;
            max_idx = i + 1;
        }
    }
    Some(max_idx)
}
