/// Single-threaded 2D cross-correlation for f32 tensors, no bias.
///
/// Layouts: src `[C_in, H, W]`, weights `[C_out, C_in, K, K]`, dst
/// `[C_out, H_out, W_out]`. Kernel taps that land outside the input are
/// skipped, which is the same as zero padding without building a padded copy.
pub fn f32_cpu(
    src_dims: [usize; 3],
    weight_dims: [usize; 4],
    dst_dims: [usize; 3],
    src: &[f32],
    weights: &[f32],
    dst: &mut [f32],
    stride: usize,
    padding: usize,
) {
    let [in_channels, in_h, in_w] = src_dims;
    let [out_channels, filter_in_channels, k_h, k_w] = weight_dims;
    let [_, out_h, out_w] = dst_dims;

    debug_assert_eq!(in_channels, filter_in_channels);
    debug_assert_eq!(src.len(), in_channels * in_h * in_w);
    debug_assert_eq!(weights.len(), out_channels * in_channels * k_h * k_w);
    debug_assert_eq!(dst.len(), out_channels * out_h * out_w);

    let stride = stride as isize;
    let padding = padding as isize;

    for oc in 0..out_channels {
        let w_oc = oc * in_channels * k_h * k_w;
        for oh in 0..out_h {
            for ow in 0..out_w {
                let mut sum = 0.0f32;

                for ic in 0..in_channels {
                    let src_ic = ic * in_h * in_w;
                    let w_ic = w_oc + ic * k_h * k_w;
                    for kh in 0..k_h {
                        let ih = oh as isize * stride + kh as isize - padding;
                        if ih < 0 || ih >= in_h as isize {
                            continue;
                        }
                        let src_row = src_ic + ih as usize * in_w;
                        let w_row = w_ic + kh * k_w;
                        for kw in 0..k_w {
                            let iw = ow as isize * stride + kw as isize - padding;
                            if iw < 0 || iw >= in_w as isize {
                                continue;
                            }
                            sum += src[src_row + iw as usize] * weights[w_row + kw];
                        }
                    }
                }

                dst[(oc * out_h + oh) * out_w + ow] = sum;
            }
        }
    }
}
