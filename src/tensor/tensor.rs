use crate::{
    tensor::desc::TensorDesc,
    utils::error::{Result, SpikeNetError},
};

/// Fixed-shape f32 buffer. The element count is set at construction and the
/// backing slice can never grow or shrink.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor {
    desc: TensorDesc,
    data: Box<[f32]>,
}

impl Tensor {
    pub fn zeros(desc: TensorDesc) -> Self {
        Self {
            desc,
            data: vec![0.0; desc.num_elements()].into_boxed_slice(),
        }
    }

    pub fn filled(desc: TensorDesc, value: f32) -> Self {
        Self {
            desc,
            data: vec![value; desc.num_elements()].into_boxed_slice(),
        }
    }

    /// Wraps host data, rejecting a length that does not match the shape.
    pub fn from_vec(desc: TensorDesc, data: Vec<f32>) -> Result<Self> {
        if data.len() != desc.num_elements() {
            return Err(SpikeNetError::InputShape {
                expected: desc.num_elements(),
                actual: data.len(),
            });
        }
        Ok(Self {
            desc,
            data: data.into_boxed_slice(),
        })
    }

    pub fn desc(&self) -> &TensorDesc {
        &self.desc
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, c: usize, h: usize, w: usize) -> Option<f32> {
        self.desc.offset(c, h, w).map(|i| self.data[i])
    }

    /// Returns `false` and leaves the tensor untouched when out of range.
    pub fn set(&mut self, c: usize, h: usize, w: usize, value: f32) -> bool {
        match self.desc.offset(c, h, w) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_rejects_wrong_length() {
        let desc = TensorDesc::new(2, 2, 2);
        let err = Tensor::from_vec(desc, vec![0.0; 7]).unwrap_err();
        assert!(matches!(
            err,
            SpikeNetError::InputShape {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut t = Tensor::zeros(TensorDesc::new(2, 3, 4));
        assert!(t.set(1, 2, 3, 5.0));
        assert_eq!(t.get(1, 2, 3), Some(5.0));
        assert_eq!(t.as_slice()[23], 5.0);
        assert!(!t.set(2, 0, 0, 1.0));
        assert_eq!(t.get(0, 3, 0), None);
    }

    #[test]
    fn fill_overwrites_every_element() {
        let mut t = Tensor::filled(TensorDesc::vector(6), 3.0);
        t.fill(-1.0);
        assert!(t.as_slice().iter().all(|&v| v == -1.0));
        assert_eq!(t.len(), 6);
    }
}
