use af_core::{Role, Target, generate_prank};

use crate::OutputFormat;

pub fn run(name: &str, role: &str, strict: bool, format: OutputFormat) -> Result<(), String> {
    let role = resolve_role(role, strict)?;
    let target = Target::new(name, role);
    let message = generate_prank(&target);

    match format {
        OutputFormat::Text => println!("{message}"),
        OutputFormat::Json => {
            let out = serde_json::json!({
                "name": target.name(),
                "role": target.role(),
                "message": message,
            });
            let json = serde_json::to_string(&out).map_err(|e| format!("JSON error: {e}"))?;
            println!("{json}");
        }
    }

    Ok(())
}

fn resolve_role(label: &str, strict: bool) -> Result<Role, String> {
    if strict {
        let role = label.parse::<Role>().map_err(|e| e.to_string())?;
        tracing::debug!(%label, %role, "resolved role");
        return Ok(role);
    }

    match Role::parse(label) {
        Some(role) => {
            tracing::debug!(%label, %role, "resolved role");
            Ok(role)
        }
        None => {
            tracing::debug!(%label, "unrecognized role, using default prank");
            Ok(Role::Other)
        }
    }
}
