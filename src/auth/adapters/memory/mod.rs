//! In-memory fake of the hosted authentication provider.

mod gateway;

pub use gateway::InMemoryAuthGateway;
