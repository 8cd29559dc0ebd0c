//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies and provides factory
//! methods for creating agents from configuration.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │        App (DI Container)            │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - MsgPackRepository                 │   │
//! │  │  - InMemoryRepository (testing)      │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Ports (ports)                │   │
//! │  │  - QTableRepository, Agent, Observer │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Domain Logic                        │   │
//! │  │  - boards, search, Q-learning        │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use gridgames::app::{AgentConfig, AgentKind, App};
//! use gridgames::connect_four::ConnectFourBoard;
//!
//! let app = App::new();
//! let config = AgentConfig::new(AgentKind::Heuristic).with_seed(42);
//! let agent = app.create_agent::<ConnectFourBoard>(&config, None)?;
//! # Ok::<(), gridgames::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{AgentConfig, AgentKind};
pub use container::{App, AppBuilder};
