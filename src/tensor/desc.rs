use std::fmt::{Display, Formatter, Result as FmtResult};

/// Shape of a dense (channel, row, column) tensor in row-major layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TensorDesc {
    dims: [usize; 3],
}

impl TensorDesc {
    pub const fn new(channels: usize, height: usize, width: usize) -> Self {
        Self {
            dims: [channels, height, width],
        }
    }

    // A flat vector is stored as (n, 1, 1)
    pub const fn vector(len: usize) -> Self {
        Self::new(len, 1, 1)
    }

    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    pub fn channels(&self) -> usize {
        self.dims[0]
    }

    pub fn height(&self) -> usize {
        self.dims[1]
    }

    pub fn width(&self) -> usize {
        self.dims[2]
    }

    pub fn num_elements(&self) -> usize {
        self.dims.iter().product()
    }

    pub fn size_in_bytes(&self) -> usize {
        self.num_elements() * std::mem::size_of::<f32>()
    }

    pub fn strides(&self) -> [usize; 3] {
        Self::compute_strides(&self.dims)
    }

    // Flatten to 1D, channel-major
    pub fn flatten(&self) -> Self {
        Self::vector(self.num_elements())
    }

    pub fn is_vector(&self) -> bool {
        self.dims[1] == 1 && self.dims[2] == 1
    }

    /// Linear offset of `(c, h, w)`, or `None` when any index is out of range.
    pub fn offset(&self, c: usize, h: usize, w: usize) -> Option<usize> {
        if c >= self.dims[0] || h >= self.dims[1] || w >= self.dims[2] {
            return None;
        }
        let s = self.strides();
        Some(c * s[0] + h * s[1] + w * s[2])
    }

    pub fn compute_strides(dims: &[usize; 3]) -> [usize; 3] {
        [dims[1] * dims[2], dims[2], 1]
    }
}

impl Display for TensorDesc {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.is_vector() {
            write!(f, "[{}]", self.dims[0])
        } else {
            write!(f, "[{}, {}, {}]", self.dims[0], self.dims[1], self.dims[2])
        }
    }
}
