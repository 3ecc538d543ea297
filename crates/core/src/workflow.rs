//! Prompt workflow payload validation.
//!
//! The wire payload keeps every field optional so a missing `name` or
//! `prompt_template` is reported as a field-level validation failure rather
//! than an opaque deserialization error. [`WorkflowPayload::into_fields`]
//! turns a checked payload into [`WorkflowFields`], which is what the
//! repository layer persists.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

use crate::error::CoreError;

/// Maximum length of a workflow name in characters.
pub const MAX_NAME_LENGTH: u64 = 255;

/// Maximum length of a workflow description in characters.
pub const MAX_DESCRIPTION_LENGTH: u64 = 5_000;

/// Maximum length of a prompt template in characters.
pub const MAX_PROMPT_TEMPLATE_LENGTH: u64 = 100_000;

/// Request body for creating or fully replacing a prompt workflow.
///
/// `parameters` must be a JSON object when present; anything else is
/// rejected while deserializing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct WorkflowPayload {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = MAX_NAME_LENGTH, message = "name must be between 1 and 255 characters")
    )]
    pub name: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "description must be at most 5000 characters"))]
    pub description: Option<String>,

    #[validate(
        required(message = "prompt_template is required"),
        length(
            min = 1,
            max = MAX_PROMPT_TEMPLATE_LENGTH,
            message = "prompt_template must be between 1 and 100000 characters"
        )
    )]
    pub prompt_template: Option<String>,

    pub parameters: Option<Map<String, Value>>,
}

/// The four mutable columns of a prompt workflow, already validated.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowFields {
    pub name: String,
    pub description: Option<String>,
    pub prompt_template: String,
    pub parameters: Option<Value>,
}

impl WorkflowPayload {
    /// Validate the payload and unwrap its required fields.
    pub fn into_fields(self) -> Result<WorkflowFields, CoreError> {
        self.validate()?;

        let (Some(name), Some(prompt_template)) = (self.name, self.prompt_template) else {
            return Err(CoreError::Validation(
                "name and prompt_template are required".to_string(),
            ));
        };

        Ok(WorkflowFields {
            name,
            description: self.description,
            prompt_template,
            parameters: self.parameters.map(Value::Object),
        })
    }
}
