use spikenet::{
    Network, NetworkConfig, Tensor, TensorDesc, WeightInit, WeightStore, argmax, load_weights,
    save_weights, synthetic_image,
};

fn seeded_store(config: &NetworkConfig, seed: u64) -> WeightStore {
    let plan = config.build().unwrap();
    WeightStore::seeded(&plan, &WeightInit::He, seed).unwrap()
}

#[test]
fn reference_network_has_expected_shapes() {
    let plan = NetworkConfig::default().build().unwrap();

    assert_eq!(plan.input, TensorDesc::new(3, 32, 32));
    assert_eq!(plan.stage("pool1").unwrap().output, TensorDesc::new(16, 16, 16));
    assert_eq!(plan.stage("pool2").unwrap().output, TensorDesc::new(32, 8, 8));
    assert_eq!(plan.stage("pool3").unwrap().output, TensorDesc::new(64, 4, 4));
    assert_eq!(plan.stage("flatten").unwrap().output, TensorDesc::vector(1024));
    assert_eq!(plan.output(), TensorDesc::vector(10));
}

#[test]
fn zero_image_never_spikes_and_resolves_to_class_zero() {
    let config = NetworkConfig::default();
    let store = seeded_store(&config, 1);
    let network = Network::new(&config, &store.as_weights()).unwrap();

    let input = Tensor::zeros(network.input_desc());
    let mut scratch = network.new_scratch();

    for _ in 0..3 {
        assert_eq!(network.classify_with(&input, &mut scratch).unwrap(), 0);
        assert!(scratch.output().unwrap().as_slice().iter().all(|&v| v == 0.0));
    }
}

#[test]
fn repeated_calls_are_independent() {
    let config = NetworkConfig::default();
    let store = seeded_store(&config, 2);
    let network = Network::new(&config, &store.as_weights()).unwrap();

    let image = synthetic_image(network.input_desc(), 11);
    let other = synthetic_image(network.input_desc(), 12);

    let mut first = network.new_scratch();
    let class = network.classify_with(&image, &mut first).unwrap();

    // Dirty the scratch with a different image, then rerun the first one
    let mut second = network.new_scratch();
    network.classify_with(&other, &mut second).unwrap();
    assert_eq!(network.classify_with(&image, &mut second).unwrap(), class);

    for stage in 0..first.num_stages() {
        assert_eq!(first.neuron_states(stage), second.neuron_states(stage), "stage {stage}");
        assert_eq!(first.stage_output(stage), second.stage_output(stage), "stage {stage}");
    }
    assert_eq!(network.classify(&image).unwrap(), class);
}

#[test]
fn spiking_stages_apply_a_single_threshold_test() {
    let config = NetworkConfig::default();
    let store = seeded_store(&config, 3);
    let network = Network::new(&config, &store.as_weights()).unwrap();
    let plan = network.plan();

    let image = synthetic_image(network.input_desc(), 4);
    let mut scratch = network.new_scratch();
    network.classify_with(&image, &mut scratch).unwrap();

    for lif in ["lif1", "lif2", "lif3", "lif4", "lif5"] {
        let idx = plan.stage_index(lif).unwrap();
        let current = scratch.stage_output(idx - 1).unwrap().as_slice();
        let spikes = scratch.stage_output(idx).unwrap().as_slice();
        let states = scratch.neuron_states(idx);

        assert_eq!(states.len(), current.len());
        for ((&i, &s), n) in current.iter().zip(spikes).zip(states) {
            assert_eq!(n.membrane_potential, i);
            assert_eq!(n.should_spike, i >= config.threshold);
            assert_eq!(s, if i >= config.threshold { 1.0 } else { 0.0 });
        }
    }

    let output = scratch.output().unwrap().as_slice();
    assert!(output.iter().all(|&v| v == 0.0 || v == 1.0));
}

#[test]
fn ties_resolve_to_the_lowest_class() {
    assert_eq!(argmax(&[0.0, 1.0, 0.0, 1.0, 1.0]), Some(1));
    assert_eq!(argmax(&[0.0; 10]), Some(0));
    assert_eq!(argmax(&[]), None);
}

#[test]
fn weights_survive_a_file_round_trip() {
    let config = NetworkConfig::default();
    let plan = config.build().unwrap();
    let store = seeded_store(&config, 5);

    let path = std::env::temp_dir().join(format!("spikenet-pipeline-{}.bin", std::process::id()));
    save_weights(&path, &store).unwrap();
    let loaded = load_weights(&path, &plan).unwrap();
    std::fs::remove_file(&path).unwrap();

    let image = synthetic_image(plan.input, 6);
    let a = Network::new(&config, &store.as_weights()).unwrap();
    let b = Network::new(&config, &loaded.as_weights()).unwrap();

    let mut sa = a.new_scratch();
    let mut sb = b.new_scratch();
    assert_eq!(
        a.forward_with(&image, &mut sa).unwrap(),
        b.forward_with(&image, &mut sb).unwrap()
    );
}
