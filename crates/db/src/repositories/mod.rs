//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every call checks a connection
//! out of the pool for the duration of one statement.

pub mod prompt_evaluation_repo;
pub mod prompt_workflow_repo;
pub mod test_case_repo;
pub mod test_result_repo;
pub mod test_suite_repo;

pub use prompt_evaluation_repo::PromptEvaluationRepo;
pub use prompt_workflow_repo::PromptWorkflowRepo;
pub use test_case_repo::TestCaseRepo;
pub use test_result_repo::TestResultRepo;
pub use test_suite_repo::TestSuiteRepo;
