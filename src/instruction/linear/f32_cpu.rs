/// Dense matrix-vector product: `dst[i] = sum_j weights[i, j] * src[j]`.
/// Weights are `[out_features, in_features]` row-major, no bias.
pub fn f32_cpu(in_features: usize, out_features: usize, src: &[f32], weights: &[f32], dst: &mut [f32]) {
    debug_assert_eq!(src.len(), in_features);
    debug_assert_eq!(weights.len(), in_features * out_features);
    debug_assert_eq!(dst.len(), out_features);

    for (out, row) in dst.iter_mut().zip(weights.chunks_exact(in_features)) {
        let mut sum = 0.0f32;
        for (w, x) in row.iter().zip(src) {
            sum += w * x;
        }
        *out = sum;
    }
}
