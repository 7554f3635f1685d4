use std::path::PathBuf;

use spikenet::{
    MonotonicClock, Network, NetworkConfig, SpikeNetError, TickSource, WeightInit, WeightStore,
    init_tracing, load_image, load_weights, print_model_stats, synthetic_image, timed,
    timing::tick::ticks_to_micros,
};
use tracing::{info, warn};

const USAGE: &str = "usage: spikenet [--weights <file> | --seed <u64>] [--image <png>] [--iterations <n>] [--stats]";

#[derive(Debug)]
struct DriverOptions {
    weights: Option<PathBuf>,
    seed: u64,
    image: Option<PathBuf>,
    iterations: usize,
    stats: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            weights: None,
            seed: 727,
            image: None,
            iterations: 1,
            stats: false,
        }
    }
}

impl DriverOptions {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, SpikeNetError> {
        let mut options = Self::default();

        while let Some(arg) = args.next() {
            let mut value = |flag: &str| {
                args.next()
                    .ok_or_else(|| SpikeNetError::InvalidConfig(format!("{flag} needs a value")))
            };
            match arg.as_str() {
                "--weights" => options.weights = Some(PathBuf::from(value("--weights")?)),
                "--image" => options.image = Some(PathBuf::from(value("--image")?)),
                "--seed" => options.seed = parse_number("--seed", &value("--seed")?)?,
                "--iterations" => {
                    options.iterations = parse_number("--iterations", &value("--iterations")?)?
                }
                "--stats" => options.stats = true,
                other => {
                    return Err(SpikeNetError::InvalidConfig(format!(
                        "unknown argument {other}\n{USAGE}"
                    )));
                }
            }
        }

        Ok(options)
    }
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, SpikeNetError> {
    raw.parse()
        .map_err(|_| SpikeNetError::InvalidConfig(format!("{flag}: cannot parse {raw:?}")))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let options = DriverOptions::parse(std::env::args().skip(1))?;
    let config = NetworkConfig::default();
    let plan = config.build()?;

    let store = match &options.weights {
        Some(path) => load_weights(path, &plan)?,
        None => {
            warn!(seed = options.seed, "no weight file given, using seeded random weights");
            WeightStore::seeded(&plan, &WeightInit::He, options.seed)?
        }
    };
    let weights = store.as_weights();
    let network = Network::from_plan(plan, &weights)?;

    let input = match &options.image {
        Some(path) => load_image(path, config.input_size as u32)?,
        None => synthetic_image(network.input_desc(), options.seed),
    };

    if options.stats {
        print_model_stats(&network);
    }

    let clock = MonotonicClock::new();
    let mut scratch = network.new_scratch();

    for iteration in 0..options.iterations {
        let (class, ticks) = timed(&clock, || network.classify_with(&input, &mut scratch));
        let class = class?;
        info!(
            iteration,
            class,
            ticks,
            micros = ticks_to_micros(ticks, clock.ticks_per_second()),
            "classified"
        );
    }

    Ok(())
}
