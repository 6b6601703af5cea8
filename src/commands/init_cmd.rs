use tracing::info;

use crate::commands::base_commands::CommandError;
use crate::domain::pricing_inputs::PricingInputs;
use crate::services::inputs_yaml::serialize_inputs_to_yaml;

pub fn init_command(output: &str) -> Result<(), CommandError> {
    let mut buffer = Vec::new();
    serialize_inputs_to_yaml(&mut buffer, &PricingInputs::default())?;
    std::fs::write(output, buffer).map_err(|source| CommandError::WriteOutput {
        path: output.to_string(),
        source,
    })?;
    info!(output, "default inputs written");
    println!("Default pricing inputs written to {output}");
    Ok(())
}
