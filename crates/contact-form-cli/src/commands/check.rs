use anyhow::Result;
use colored::Colorize;
use contact_form_core::{check_field, Config, FieldId, ValidationResult};

/// Returns whether the value passed
pub fn execute(config: &Config, field: &str, value: &str) -> Result<bool> {
    let field: FieldId = field.parse()?;
    let result = run(config, field, value);

    match &result {
        ValidationResult::Valid => println!("{}", "ok".green()),
        ValidationResult::Invalid(err) => println!("{}: {}", field.to_string().red(), err),
    }
    Ok(result.is_valid())
}

fn run(config: &Config, field: FieldId, value: &str) -> ValidationResult {
    let result = check_field(field, value, &config.form.rules());
    tracing::debug!(%field, valid = result.is_valid(), "checked");
    result
}
