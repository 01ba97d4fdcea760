//! In-memory repository mirroring the remote project collection.

mod project;

pub use project::InMemoryProjectRepository;
