/// 2D max pooling for f32 tensors, no padding.
///
/// Each window is anchored at `(oh * stride, ow * stride)` and seeded with the
/// anchor element. Window offsets past the trailing edge are skipped, so an
/// edge window may cover fewer than `kernel * kernel` elements.
pub fn f32_cpu(
    src_dims: [usize; 3],
    dst_dims: [usize; 3],
    src: &[f32],
    dst: &mut [f32],
    kernel: usize,
    stride: usize,
) {
    let [channels, in_h, in_w] = src_dims;
    let [_, out_h, out_w] = dst_dims;

    debug_assert_eq!(src.len(), channels * in_h * in_w);
    debug_assert_eq!(dst.len(), channels * out_h * out_w);

    for c in 0..channels {
        let src_c = c * in_h * in_w;
        for oh in 0..out_h {
            let ih = oh * stride;
            for ow in 0..out_w {
                let iw = ow * stride;

                let mut max_value = src[src_c + ih * in_w + iw];
                for kh in 0..kernel {
                    let nih = ih + kh;
                    if nih >= in_h {
                        break;
                    }
                    for kw in 0..kernel {
                        let niw = iw + kw;
                        if niw >= in_w {
                            break;
                        }
                        let value = src[src_c + nih * in_w + niw];
                        if value > max_value {
                            max_value = value;
                        }
                    }
                }

                dst[(c * out_h + oh) * out_w + ow] = max_value;
            }
        }
    }
}
