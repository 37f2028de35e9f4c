//! Application layer: configuration and agent construction.
//!
//! # Usage
//!
//! ```
//! use kalaha_agent::{
//!     app::{AgentConfig, AgentKind, App},
//!     ports::Agent,
//! };
//!
//! let app = App::new().with_default_seed(7);
//! let agent = app.create_agent(AgentKind::Minimax, &AgentConfig::default().with_depth(4))?;
//! assert_eq!(agent.name(), "minimax");
//! # Ok::<(), kalaha_agent::Error>(())
//! ```

pub mod config;
pub mod container;

pub use config::{AgentConfig, AppConfig, ClientConfig, MAX_DEPTH};
pub use container::{AgentKind, App};
