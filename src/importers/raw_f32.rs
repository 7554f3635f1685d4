//! Raw weight blobs: the five weight tensors (conv1, conv2, conv3, fc1, fc2)
//! stored back to back as little-endian f32, no header.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::{
    model::{config::NetworkPlan, weights::WeightStore},
    utils::error::{Result, SpikeNetError},
};

pub fn decode_f32_le(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(SpikeNetError::WeightFile(format!(
            "{} bytes is not a whole number of f32 values",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}

pub fn encode_f32_le(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

pub fn load_weights(path: &Path, plan: &NetworkPlan) -> Result<WeightStore> {
    let bytes = fs::read(path)?;
    let expected = plan.parameter_count() * 4;
    if bytes.len() != expected {
        return Err(SpikeNetError::WeightFile(format!(
            "{} holds {} bytes, the network needs {}",
            path.display(),
            bytes.len(),
            expected
        )));
    }

    let store = WeightStore::from_flat(plan, &decode_f32_le(&bytes)?)?;
    info!(path = %path.display(), values = store.len(), "loaded weights");
    Ok(store)
}

pub fn save_weights(path: &Path, store: &WeightStore) -> Result<()> {
    fs::write(path, encode_f32_le(&store.to_flat()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{config::NetworkConfig, weights::WeightInit};

    #[test]
    fn decode_rejects_partial_values() {
        assert!(decode_f32_le(&[0, 0, 128]).is_err());
        assert_eq!(
            decode_f32_le(&1.5f32.to_le_bytes()).unwrap(),
            vec![1.5]
        );
    }

    #[test]
    fn file_round_trip_and_size_check() {
        let plan = NetworkConfig::default().build().unwrap();
        let store = WeightStore::seeded(&plan, &WeightInit::Xavier, 5).unwrap();

        let path = std::env::temp_dir().join(format!("spikenet-weights-{}.bin", std::process::id()));
        save_weights(&path, &store).unwrap();
        assert_eq!(load_weights(&path, &plan).unwrap(), store);

        let mut truncated = encode_f32_le(&store.to_flat());
        truncated.truncate(truncated.len() - 4);
        fs::write(&path, truncated).unwrap();
        assert!(matches!(
            load_weights(&path, &plan),
            Err(SpikeNetError::WeightFile(_))
        ));

        fs::remove_file(&path).unwrap();
        assert!(matches!(load_weights(&path, &plan), Err(SpikeNetError::Io(_))));
    }
}
