pub mod ingest_artifact;
pub mod list_status_checks;
pub mod record_status_check;
pub mod retrieve_artifact;

pub use ingest_artifact::IngestArtifactUseCase;
pub use list_status_checks::ListStatusChecksUseCase;
pub use record_status_check::RecordStatusCheckUseCase;
pub use retrieve_artifact::{RetrieveArtifactUseCase, RetrievedArtifact};
