use ecom::presets;
use rfm::executable_utils::{initialize_executable, run_report};

fn main() -> anyhow::Result<()> {
    let config = initialize_executable(presets::sample)?;
    tracing::info!("Starting sample report");
    run_report(config)
}
