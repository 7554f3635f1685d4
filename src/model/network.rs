use tracing::{Level, debug, info};

use crate::{
    instruction::instruction::Instruction,
    model::{
        config::{NetworkConfig, NetworkPlan},
        scratch::Scratch,
        weights::NetworkWeights,
    },
    tensor::{Tensor, TensorDesc},
    utils::{
        error::{Result, SpikeNetError},
        math::argmax,
    },
};

/// The fixed spiking CNN, bound to borrowed read-only weights.
///
/// All shape checking happens in [`Network::new`]; the per-image path only
/// checks that the input tensor has the planned shape.
pub struct Network<'w> {
    plan: NetworkPlan,
    instructions: Vec<Box<dyn Instruction + 'w>>,
}

impl<'w> Network<'w> {
    pub fn new(config: &NetworkConfig, weights: &NetworkWeights<'w>) -> Result<Self> {
        Self::from_plan(config.build()?, weights)
    }

    pub fn from_plan(plan: NetworkPlan, weights: &NetworkWeights<'w>) -> Result<Self> {
        let mut instructions = Vec::with_capacity(plan.stages.len());
        for stage in &plan.stages {
            let instruction = stage
                .layer
                .build_instruction(&stage.input, weights.for_stage(stage.name))
                .map_err(|e| e.in_stage(stage.name))?;
            debug!(stage = stage.name, instruction = ?instruction, "built stage");
            instructions.push(instruction);
        }
        check_chain(plan.input, &instructions)?;

        info!(
            input = %plan.input,
            output = %plan.output(),
            stages = plan.stages.len(),
            parameters = plan.parameter_count(),
            "network ready"
        );

        Ok(Self { plan, instructions })
    }

    pub fn plan(&self) -> &NetworkPlan {
        &self.plan
    }

    pub fn input_desc(&self) -> TensorDesc {
        self.plan.input
    }

    pub fn instructions(&self) -> &[Box<dyn Instruction + 'w>] {
        &self.instructions
    }

    fn stage_layout(&self) -> impl ExactSizeIterator<Item = (TensorDesc, usize)> + '_ {
        self.instructions
            .iter()
            .map(|i| (*i.dst_desc(), i.state_len()))
    }

    /// Working memory sized for this network.
    pub fn new_scratch(&self) -> Scratch {
        Scratch::new(self.stage_layout())
    }

    /// Classifies one image with freshly allocated scratch.
    pub fn classify(&self, input: &Tensor) -> Result<usize> {
        let mut scratch = self.new_scratch();
        self.classify_with(input, &mut scratch)
    }

    /// Classifies one image reusing `scratch`. Neuron state is reset first, so
    /// nothing carries over from a previous call.
    pub fn classify_with(&self, input: &Tensor, scratch: &mut Scratch) -> Result<usize> {
        let output = self.forward_with(input, scratch)?;
        argmax(output).ok_or_else(|| SpikeNetError::InvalidConfig("network output is empty".into()))
    }

    /// Runs every stage once and returns the final spike vector.
    pub fn forward_with<'s>(&self, input: &Tensor, scratch: &'s mut Scratch) -> Result<&'s [f32]> {
        if *input.desc() != self.plan.input {
            return Err(SpikeNetError::InputShape {
                expected: self.plan.input.num_elements(),
                actual: input.len(),
            });
        }
        if !scratch.matches(self.stage_layout()) {
            return Err(SpikeNetError::InvalidConfig(
                "scratch was sized for a different network".into(),
            ));
        }

        scratch.reset();

        for (i, (instruction, stage)) in self.instructions.iter().zip(&self.plan.stages).enumerate() {
            let (done, rest) = scratch.buffers.split_at_mut(i);
            let src = match done.last() {
                Some(prev) => prev.as_slice(),
                None => input.as_slice(),
            };
            let dst = rest[0].as_mut_slice();

            instruction.execute_cpu(src, dst, &mut scratch.states[i]);

            if instruction.state_len() > 0 && tracing::enabled!(Level::DEBUG) {
                let spikes = dst.iter().filter(|&&v| v > 0.0).count();
                debug!(stage = stage.name, output = %stage.output, spikes, units = dst.len(), "stage spikes");
            }
        }

        Ok(scratch
            .buffers
            .last()
            .map(Tensor::as_slice)
            .unwrap_or_default())
    }
}

/// Every stage must read exactly what the stage before it writes.
fn check_chain(input: TensorDesc, instructions: &[Box<dyn Instruction + '_>]) -> Result<()> {
    let mut expected = input;
    for (i, instruction) in instructions.iter().enumerate() {
        if *instruction.src_desc() != expected {
            return Err(SpikeNetError::InvalidConfig(format!(
                "stage {} ({}) reads {} but receives {}",
                i,
                instruction.name(),
                instruction.src_desc(),
                expected
            )));
        }
        expected = *instruction.dst_desc();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        instruction,
        model::{
            config::ConvConfig,
            weights::{WeightInit, WeightStore},
        },
    };

    fn tiny_config() -> NetworkConfig {
        NetworkConfig {
            input_channels: 1,
            input_size: 8,
            conv1: ConvConfig::same(1, 2),
            conv2: ConvConfig::same(2, 2),
            conv3: ConvConfig::same(2, 2),
            fc1_in: 2,
            fc1_out: 4,
            ..Default::default()
        }
    }

    #[test]
    fn rejects_wrong_weight_length_at_construction() {
        let plan = tiny_config().build().unwrap();
        let mut store = WeightStore::seeded(&plan, &WeightInit::Constant(1.0), 0).unwrap();
        store.fc1.pop();

        match Network::new(&tiny_config(), &store.as_weights()) {
            Err(SpikeNetError::WeightShape {
                layer,
                expected,
                actual,
            }) => {
                assert_eq!(layer, "fc1");
                assert_eq!(expected, 8);
                assert_eq!(actual, 7);
            }
            other => panic!("expected weight shape error, got {:?}", other.err()),
        }
    }

    #[test]
    fn rejects_wrong_input_shape() {
        let plan = tiny_config().build().unwrap();
        let store = WeightStore::seeded(&plan, &WeightInit::Constant(1.0), 0).unwrap();
        let network = Network::new(&tiny_config(), &store.as_weights()).unwrap();

        let input = Tensor::zeros(TensorDesc::new(1, 8, 7));
        assert!(matches!(
            network.classify(&input),
            Err(SpikeNetError::InputShape {
                expected: 64,
                actual: 56
            })
        ));
    }

    #[test]
    fn rejects_scratch_from_another_network() {
        let plan = tiny_config().build().unwrap();
        let store = WeightStore::seeded(&plan, &WeightInit::Constant(1.0), 0).unwrap();
        let network = Network::new(&tiny_config(), &store.as_weights()).unwrap();

        let other_config = NetworkConfig {
            fc1_out: 5,
            ..tiny_config()
        };
        let other_plan = other_config.build().unwrap();
        let other_store = WeightStore::seeded(&other_plan, &WeightInit::Constant(1.0), 0).unwrap();
        let other = Network::new(&other_config, &other_store.as_weights()).unwrap();

        let mut scratch = other.new_scratch();
        let input = Tensor::zeros(network.input_desc());
        assert!(matches!(
            network.classify_with(&input, &mut scratch),
            Err(SpikeNetError::InvalidConfig(_))
        ));
    }

    #[test]
    fn constant_weights_fire_every_unit() {
        // Ones in, ones for weights: every pre-activation is >= 1, every stage
        // spikes everywhere, and the all-ones output resolves to class 0.
        let plan = tiny_config().build().unwrap();
        let store = WeightStore::seeded(&plan, &WeightInit::Constant(1.0), 0).unwrap();
        let network = Network::new(&tiny_config(), &store.as_weights()).unwrap();

        let input = Tensor::filled(network.input_desc(), 1.0);
        let mut scratch = network.new_scratch();
        let output = network.forward_with(&input, &mut scratch).unwrap().to_vec();

        assert_eq!(output, vec![1.0; 10]);
        assert_eq!(network.classify_with(&input, &mut scratch).unwrap(), 0);
        let lif1 = network.plan().stage_index("lif1").unwrap();
        assert!(scratch.neuron_states(lif1).iter().all(|n| n.should_spike));
    }

    #[test]
    fn selects_the_only_spiking_class() {
        // fc2 row 7 is the only one that reaches threshold
        let plan = tiny_config().build().unwrap();
        let mut store = WeightStore::seeded(&plan, &WeightInit::Constant(1.0), 0).unwrap();
        store.fc2 = vec![0.0; 4 * 10];
        for j in 0..4 {
            store.fc2[7 * 4 + j] = 0.5;
        }
        let network = Network::new(&tiny_config(), &store.as_weights()).unwrap();

        let input = Tensor::filled(network.input_desc(), 1.0);
        assert_eq!(network.classify(&input).unwrap(), 7);
    }

    #[test]
    fn stage_chain_must_line_up() {
        let input = TensorDesc::new(2, 2, 2);
        let chained = vec![
            instruction::lif(input, 0.9, 1.0),
            instruction::reshape(input, input.flatten()),
            instruction::lif(input.flatten(), 0.9, 1.0),
        ];
        assert!(check_chain(input, &chained).is_ok());

        let broken = vec![
            instruction::lif(input, 0.9, 1.0),
            instruction::lif(TensorDesc::vector(8), 0.9, 1.0),
        ];
        match check_chain(input, &broken) {
            Err(SpikeNetError::InvalidConfig(msg)) => {
                assert!(msg.starts_with("stage 1 (LIF)"), "{msg}");
            }
            other => panic!("expected invalid config, got {other:?}"),
        }
    }
}
