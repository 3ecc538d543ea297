//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts (prompt workflows are written
//!   from validated `WorkflowFields` instead)

pub mod prompt_evaluation;
pub mod prompt_workflow;
pub mod test_case;
pub mod test_result;
pub mod test_suite;
