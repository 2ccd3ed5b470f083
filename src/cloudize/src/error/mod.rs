//! Error types

mod cloudize;
mod credentials;
mod object_store;
mod plan_namespace;
mod rewrite;
mod upload;

pub use cloudize::CloudizeError;
pub use credentials::CredentialsError;
pub use object_store::ObjectStoreError;
pub use plan_namespace::PlanNamespaceError;
pub use rewrite::RewriteError;
pub use upload::UploadError;
