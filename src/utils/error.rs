use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpikeNetError {
    #[error("Invalid network configuration: {0}")]
    InvalidConfig(String),

    #[error("Stage {stage} expected {expected} input channels, got {actual}")]
    ChannelMismatch {
        stage: String,
        expected: usize,
        actual: usize,
    },

    #[error("Weights for {layer} must hold {expected} values, got {actual}")]
    WeightShape {
        layer: String,
        expected: usize,
        actual: usize,
    },

    #[error("Input tensor has {actual} elements, network expects {expected}")]
    InputShape { expected: usize, actual: usize },

    #[error("Weight file error: {0}")]
    WeightFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl SpikeNetError {
    // Layers report shape errors under their type name; the plan knows which
    // pipeline stage they belong to.
    pub fn in_stage(self, stage_name: &str) -> Self {
        match self {
            SpikeNetError::ChannelMismatch {
                expected, actual, ..
            } => SpikeNetError::ChannelMismatch {
                stage: stage_name.to_string(),
                expected,
                actual,
            },
            SpikeNetError::WeightShape {
                expected, actual, ..
            } => SpikeNetError::WeightShape {
                layer: stage_name.to_string(),
                expected,
                actual,
            },
            SpikeNetError::InvalidConfig(msg) => {
                SpikeNetError::InvalidConfig(format!("{stage_name}: {msg}"))
            }
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpikeNetError>;
