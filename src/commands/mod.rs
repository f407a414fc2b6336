pub mod audit;
pub mod explain;
pub mod init;
pub mod manifest;

mod context;

pub use audit::{AuditOptions, run_audit, run_audit_impl};
pub use explain::{ContentState, Explanation, explain_path, run_explain};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use manifest::{run_manifest, run_manifest_impl};
