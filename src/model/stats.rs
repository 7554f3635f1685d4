use std::fmt::{self, Write};

use crate::{instruction::lif::neuron::LifNeuron, model::network::Network};

fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.2} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.2} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Per-stage summary table: shapes, parameters and scratch memory.
pub fn format_model_stats(network: &Network<'_>) -> String {
    let mut out = String::new();
    // writing into a String never fails
    let _ = write_model_stats(&mut out, network);
    out
}

fn write_model_stats(out: &mut impl Write, network: &Network<'_>) -> fmt::Result {
    let plan = network.plan();
    let mut total_scratch = 0usize;

    writeln!(out, "Model Statistics")?;
    writeln!(out, "================")?;
    writeln!(out, "Input: {}  Output: {}", plan.input, plan.output())?;
    writeln!(out, "{:-<100}", "")?;
    writeln!(
        out,
        "{:<4} {:<8} {:<8} {:<14} {:<14} {:<10} {:<12} {}",
        "ID", "Stage", "Type", "Input Shape", "Output Shape", "Params", "Scratch", "Config"
    )?;
    writeln!(out, "{:-<100}", "")?;

    for (i, (stage, instruction)) in plan.stages.iter().zip(network.instructions()).enumerate() {
        let scratch = stage.output.size_in_bytes()
            + instruction.state_len() * std::mem::size_of::<LifNeuron>();
        total_scratch += scratch;

        writeln!(
            out,
            "{:<4} {:<8} {:<8} {:<14} {:<14} {:<10} {:<12} {}",
            i,
            stage.name,
            instruction.name(),
            stage.input.to_string(),
            stage.output.to_string(),
            stage.layer.parameter_count(),
            format_bytes(scratch),
            stage.layer.config_string().unwrap_or_default()
        )?;
    }

    writeln!(out, "{:-<100}", "")?;
    let params = plan.parameter_count();
    writeln!(
        out,
        "Parameters: {} ({})",
        params,
        format_bytes(params * std::mem::size_of::<f32>())
    )?;
    writeln!(out, "Scratch per call: {}", format_bytes(total_scratch))
}

pub fn print_model_stats(network: &Network<'_>) {
    println!("{}", format_model_stats(network));
}
