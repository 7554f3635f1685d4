use crate::{
    layer::{factory::Layers, layer::Layer},
    tensor::TensorDesc,
    utils::error::{Result, SpikeNetError},
};

pub const INPUT_CHANNELS: usize = 3;
pub const INPUT_SIZE: usize = 32;
pub const NUM_CLASSES: usize = 10;
pub const THRESHOLD: f32 = 1.0;
pub const LIF_BETA: f32 = 0.9;
pub const LIF_STAGES: usize = 5;

/// Stage names of the fixed pipeline, in execution order.
pub const STAGE_NAMES: [&str; 14] = [
    "conv1", "lif1", "pool1", "conv2", "lif2", "pool2", "conv3", "lif3", "pool3", "flatten",
    "fc1", "lif4", "fc2", "lif5",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConvConfig {
    pub in_channels: usize,
    pub out_channels: usize,
    pub kernel: usize,
    pub stride: usize,
    pub padding: usize,
}

impl ConvConfig {
    // 3x3, stride 1, padding 1: spatial size is preserved
    pub const fn same(in_channels: usize, out_channels: usize) -> Self {
        Self {
            in_channels,
            out_channels,
            kernel: 3,
            stride: 1,
            padding: 1,
        }
    }
}

/// Numbers of the fixed topology
/// `conv1 → lif → pool → conv2 → lif → pool → conv3 → lif → pool → flatten →
/// fc1 → lif → fc2 → lif`. The stage sequence itself is not configurable.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub input_channels: usize,
    pub input_size: usize,
    pub conv1: ConvConfig,
    pub conv2: ConvConfig,
    pub conv3: ConvConfig,
    pub pool_kernel: usize,
    pub pool_stride: usize,
    pub fc1_in: usize,
    pub fc1_out: usize,
    pub threshold: f32,
    pub betas: [f32; LIF_STAGES],
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_channels: INPUT_CHANNELS,
            input_size: INPUT_SIZE,
            conv1: ConvConfig::same(3, 16),
            conv2: ConvConfig::same(16, 32),
            conv3: ConvConfig::same(32, 64),
            pool_kernel: 2,
            pool_stride: 2,
            fc1_in: 64 * 4 * 4,
            fc1_out: 128,
            threshold: THRESHOLD,
            betas: [LIF_BETA; LIF_STAGES],
        }
    }
}

impl NetworkConfig {
    /// Validates every stage against its input and derives the plan.
    pub fn build(&self) -> Result<NetworkPlan> {
        if self.input_channels == 0 || self.input_size == 0 {
            return Err(SpikeNetError::InvalidConfig(format!(
                "input shape ({}, {}, {}) must be non-empty",
                self.input_channels, self.input_size, self.input_size
            )));
        }

        let input = TensorDesc::new(self.input_channels, self.input_size, self.input_size);
        let mut stages = Vec::with_capacity(STAGE_NAMES.len());
        let mut shape = input;

        for (name, layer) in STAGE_NAMES.into_iter().zip(self.layers()) {
            let output = layer.output_shape(&shape).map_err(|e| e.in_stage(name))?;
            stages.push(StagePlan {
                name,
                layer,
                input: shape,
                output,
            });
            shape = output;
        }

        Ok(NetworkPlan { input, stages })
    }

    fn layers(&self) -> Vec<Box<dyn Layer>> {
        let conv = |c: &ConvConfig| {
            Layers::conv2d(c.in_channels, c.out_channels, c.kernel, c.stride, c.padding)
        };
        let lif = |i: usize| Layers::lif(self.betas[i], self.threshold);
        let pool = || Layers::maxpool(self.pool_kernel, self.pool_stride);

        vec![
            conv(&self.conv1),
            lif(0),
            pool(),
            conv(&self.conv2),
            lif(1),
            pool(),
            conv(&self.conv3),
            lif(2),
            pool(),
            Layers::flatten(),
            Layers::linear(self.fc1_in, self.fc1_out),
            lif(3),
            Layers::linear(self.fc1_out, NUM_CLASSES),
            lif(4),
        ]
    }
}

pub struct StagePlan {
    pub name: &'static str,
    pub layer: Box<dyn Layer>,
    pub input: TensorDesc,
    pub output: TensorDesc,
}

/// Validated per-stage shapes of a configuration.
pub struct NetworkPlan {
    pub input: TensorDesc,
    pub stages: Vec<StagePlan>,
}

impl NetworkPlan {
    pub fn output(&self) -> TensorDesc {
        self.stages.last().map(|s| s.output).unwrap_or(self.input)
    }

    pub fn stage(&self, name: &str) -> Option<&StagePlan> {
        self.stages.iter().find(|s| s.name == name)
    }

    pub fn stage_index(&self, name: &str) -> Option<usize> {
        self.stages.iter().position(|s| s.name == name)
    }

    // Stages that consume a weight tensor, in pipeline order
    pub fn parameter_stages(&self) -> impl Iterator<Item = &StagePlan> {
        self.stages.iter().filter(|s| s.layer.parameter_count() > 0)
    }

    pub fn parameter_count(&self) -> usize {
        self.stages.iter().map(|s| s.layer.parameter_count()).sum()
    }

    // Bytes of every stage output buffer held at once
    pub fn activation_bytes(&self) -> usize {
        self.stages.iter().map(|s| s.output.size_in_bytes()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_plan_shapes() {
        let plan = NetworkConfig::default().build().unwrap();
        let shapes: Vec<(&str, TensorDesc)> = plan.stages.iter().map(|s| (s.name, s.output)).collect();

        assert_eq!(
            shapes,
            vec![
                ("conv1", TensorDesc::new(16, 32, 32)),
                ("lif1", TensorDesc::new(16, 32, 32)),
                ("pool1", TensorDesc::new(16, 16, 16)),
                ("conv2", TensorDesc::new(32, 16, 16)),
                ("lif2", TensorDesc::new(32, 16, 16)),
                ("pool2", TensorDesc::new(32, 8, 8)),
                ("conv3", TensorDesc::new(64, 8, 8)),
                ("lif3", TensorDesc::new(64, 8, 8)),
                ("pool3", TensorDesc::new(64, 4, 4)),
                ("flatten", TensorDesc::vector(1024)),
                ("fc1", TensorDesc::vector(128)),
                ("lif4", TensorDesc::vector(128)),
                ("fc2", TensorDesc::vector(NUM_CLASSES)),
                ("lif5", TensorDesc::vector(NUM_CLASSES)),
            ]
        );
        assert_eq!(plan.output(), TensorDesc::vector(10));
        assert_eq!(
            plan.parameter_count(),
            16 * 3 * 9 + 32 * 16 * 9 + 64 * 32 * 9 + 1024 * 128 + 128 * 10
        );
        assert_eq!(
            plan.parameter_stages().map(|s| s.name).collect::<Vec<_>>(),
            vec!["conv1", "conv2", "conv3", "fc1", "fc2"]
        );
    }

    #[test]
    fn channel_mismatch_names_the_stage() {
        let config = NetworkConfig {
            conv2: ConvConfig::same(8, 32),
            ..Default::default()
        };
        match config.build() {
            Err(SpikeNetError::ChannelMismatch {
                stage,
                expected,
                actual,
            }) => {
                assert_eq!(stage, "conv2");
                assert_eq!(expected, 8);
                assert_eq!(actual, 16);
            }
            other => panic!("expected channel mismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn fc1_width_must_match_flattened_features() {
        let config = NetworkConfig {
            fc1_in: 1000,
            ..Default::default()
        };
        assert!(matches!(
            config.build(),
            Err(SpikeNetError::ChannelMismatch { ref stage, expected: 1000, actual: 1024 }) if stage == "fc1"
        ));
    }

    #[test]
    fn input_too_small_for_three_pools_is_rejected() {
        let config = NetworkConfig {
            input_size: 4,
            ..Default::default()
        };
        match config.build() {
            Err(SpikeNetError::InvalidConfig(msg)) => assert!(msg.starts_with("pool3")),
            other => panic!("expected invalid config, got {:?}", other.err()),
        }
    }

    #[test]
    fn oversized_padding_is_an_error_not_an_overflow() {
        let mut config = NetworkConfig::default();
        config.conv1.padding = usize::MAX / 2 + 1;
        match config.build() {
            Err(SpikeNetError::InvalidConfig(msg)) => assert!(msg.starts_with("conv1"), "{msg}"),
            other => panic!("expected invalid config, got {:?}", other.err()),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let config = NetworkConfig {
            input_channels: 0,
            ..Default::default()
        };
        assert!(matches!(config.build(), Err(SpikeNetError::InvalidConfig(_))));
    }
}
