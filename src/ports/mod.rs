//! Ports (trait boundaries) for external dependencies.
//!
//! These traits are owned by the domain and implemented by agents and by the
//! adapters in the infrastructure layer.

pub mod agent;
pub mod observer;
pub mod repository;

pub use agent::Agent;
pub use observer::Observer;
pub use repository::QTableRepository;
