//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! any storage engine, codec, or transport.

mod artifact_repository;
mod blob_store;
mod clock;
mod codec;
mod status_repository;

pub use artifact_repository::ArtifactRepositoryPort;
pub use blob_store::BlobStorePort;
pub use clock::ClockPort;
pub use codec::CodecPort;
pub use status_repository::StatusCheckRepositoryPort;
