use ecom::presets;
use rfm::executable_utils::{initialize_executable, run_report};

fn main() -> anyhow::Result<()> {
    let config = initialize_executable(presets::clothing_store)?;
    tracing::info!("Starting clothing report");
    run_report(config)
}
