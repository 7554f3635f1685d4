use rand::{
    SeedableRng,
    distr::{Distribution, Uniform},
    rngs::StdRng,
};

use crate::{
    model::config::NetworkPlan,
    utils::{
        error::{Result, SpikeNetError},
        math::normal_sample,
    },
};

/// Borrowed, read-only weight tensors for the five parameterised stages.
/// Layouts are `(out, in, k, k)` for convolutions and `(out, in)` for the
/// dense layers.
#[derive(Clone, Copy, Debug)]
pub struct NetworkWeights<'w> {
    pub conv1: &'w [f32],
    pub conv2: &'w [f32],
    pub conv3: &'w [f32],
    pub fc1: &'w [f32],
    pub fc2: &'w [f32],
}

impl<'w> NetworkWeights<'w> {
    // Parameterless stages get an empty slice
    pub fn for_stage(&self, name: &str) -> &'w [f32] {
        match name {
            "conv1" => self.conv1,
            "conv2" => self.conv2,
            "conv3" => self.conv3,
            "fc1" => self.fc1,
            "fc2" => self.fc2,
            _ => &[],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WeightInit {
    Xavier,
    He,
    UniformRandom { min: f32, max: f32 },
    Constant(f32),
}

impl WeightInit {
    pub fn init(&self, dims: &[usize], rng: &mut StdRng) -> Result<Vec<f32>> {
        let total_elements: usize = dims.iter().product();
        let (fan_in, fan_out) = calculate_fan_in_out(dims);

        let uniform = |min: f32, max: f32, rng: &mut StdRng| -> Result<Vec<f32>> {
            let dist = Uniform::new(min, max).map_err(|e| {
                SpikeNetError::InvalidConfig(format!("uniform range [{min}, {max}): {e}"))
            })?;
            Ok((0..total_elements).map(|_| dist.sample(rng)).collect())
        };

        match self {
            WeightInit::Xavier => {
                let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
                uniform(-limit, limit, rng)
            }

            WeightInit::He => {
                let std_dev = (2.0 / fan_in as f32).sqrt();
                Ok((0..total_elements)
                    .map(|_| normal_sample(rng, 0.0, std_dev))
                    .collect())
            }

            WeightInit::UniformRandom { min, max } => uniform(*min, *max, rng),

            WeightInit::Constant(value) => Ok(vec![*value; total_elements]),
        }
    }
}

// (out, in, k...) -> (in * k..., out * k...)
fn calculate_fan_in_out(dims: &[usize]) -> (usize, usize) {
    let out_features = dims.first().copied().unwrap_or(1);
    let in_features = dims.get(1).copied().unwrap_or(1);
    let kernel_size: usize = dims.iter().skip(2).product();
    (
        (in_features * kernel_size).max(1),
        (out_features * kernel_size).max(1),
    )
}

/// Owned weight tensors, for hosts that load or synthesise weights at runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeightStore {
    pub conv1: Vec<f32>,
    pub conv2: Vec<f32>,
    pub conv3: Vec<f32>,
    pub fc1: Vec<f32>,
    pub fc2: Vec<f32>,
}

impl WeightStore {
    /// Deterministic synthetic weights sized from the plan.
    pub fn seeded(plan: &NetworkPlan, init: &WeightInit, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut store = Self::default();
        for stage in plan.parameter_stages() {
            let dims = stage.layer.parameter_dims().unwrap_or_default();
            *store.slot_mut(stage.name)? = init.init(&dims, &mut rng)?;
        }
        Ok(store)
    }

    /// Splits one flat buffer into stage tensors, in pipeline order.
    pub fn from_flat(plan: &NetworkPlan, flat: &[f32]) -> Result<Self> {
        let expected: usize = plan.parameter_count();
        if flat.len() != expected {
            return Err(SpikeNetError::WeightShape {
                layer: "network".to_string(),
                expected,
                actual: flat.len(),
            });
        }

        let mut store = Self::default();
        let mut offset = 0;
        for stage in plan.parameter_stages() {
            let len = stage.layer.parameter_count();
            *store.slot_mut(stage.name)? = flat[offset..offset + len].to_vec();
            offset += len;
        }
        Ok(store)
    }

    /// Concatenates the stage tensors in pipeline order.
    pub fn to_flat(&self) -> Vec<f32> {
        let mut flat = Vec::with_capacity(self.len());
        for part in [&self.conv1, &self.conv2, &self.conv3, &self.fc1, &self.fc2] {
            flat.extend_from_slice(part);
        }
        flat
    }

    pub fn len(&self) -> usize {
        self.conv1.len() + self.conv2.len() + self.conv3.len() + self.fc1.len() + self.fc2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_weights(&self) -> NetworkWeights<'_> {
        NetworkWeights {
            conv1: &self.conv1,
            conv2: &self.conv2,
            conv3: &self.conv3,
            fc1: &self.fc1,
            fc2: &self.fc2,
        }
    }

    fn slot_mut(&mut self, name: &str) -> Result<&mut Vec<f32>> {
        match name {
            "conv1" => Ok(&mut self.conv1),
            "conv2" => Ok(&mut self.conv2),
            "conv3" => Ok(&mut self.conv3),
            "fc1" => Ok(&mut self.fc1),
            "fc2" => Ok(&mut self.fc2),
            other => Err(SpikeNetError::InvalidConfig(format!(
                "stage {other} has no weight tensor"
            ))),
        }
    }
}
