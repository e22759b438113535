//! # safrochaind
//!
//! Operator binary for the Safrochain module.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration (defaults, then `SAFRO_*` environment, then flags)
//! 2. Install the log subscriber
//! 3. Lock the data directory and open the store
//! 4. Run one command as a single state transition
//!
//! Any module error aborts the command with a non-zero exit; a failed
//! `init` leaves the chain unstarted.

pub mod config;
pub mod lock;
pub mod logging;
pub mod node;
pub mod store;

pub use config::{load_config, ConfigError, NodeConfig, StorageBackend};
pub use node::Node;
