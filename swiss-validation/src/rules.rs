// Validation rules builder

use crate::{ValidationError, ValidationErrors};
use std::collections::HashMap;
use std::sync::Arc;

type ValidatorFn = Arc<dyn Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync>;

/// Ordered list of validators for one field.
#[derive(Clone)]
pub struct ValidationRules {
    validators: Vec<ValidatorFn>,
    field: String,
    required: bool,
}

impl ValidationRules {
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            validators: Vec::new(),
            field: field.into(),
            required: false,
        }
    }

    /// Report the field as missing when a [`ValidationBuilder`] input lacks it.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add<F>(mut self, validator: F) -> Self
    where
        F: Fn(&str, &str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.validators.push(Arc::new(validator));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    /// Run every validator; all failures are returned, not just the first.
    pub fn validate(&self, value: &str) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = self
            .validators
            .iter()
            .filter_map(|validator| validator(value, &self.field).err())
            .collect();

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Rules for several fields of one input.
#[derive(Clone, Default)]
pub struct ValidationBuilder {
    rules: Vec<ValidationRules>,
}

impl ValidationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, rules: ValidationRules) -> Self {
        self.rules.push(rules);
        self
    }

    /// Validate every field with rules. Absent optional fields are skipped.
    pub fn validate(&self, data: &HashMap<String, String>) -> Result<(), ValidationErrors> {
        let mut all = ValidationErrors::default();

        for rule in &self.rules {
            match data.get(&rule.field) {
                Some(value) => {
                    if let Err(errors) = rule.validate(value) {
                        all.errors.extend(errors);
                    }
                }
                None if rule.required => all.add(
                    ValidationError::new(&rule.field, format!("{} is required", rule.field))
                        .with_constraint("required"),
                ),
                None => {}
            }
        }

        if !all.is_empty() {
            swiss_log::debug!("validation failed for {} rule(s)", all.len());
        }
        all.into_result()
    }
}
