//! awsenv - Load deployment secrets into a shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and execution
//! │   └── output        # stderr helpers
//! └── core/             # Core library components
//!     ├── config        # Environment table, region, override variable
//!     ├── constants     # Built-in defaults
//!     ├── environment   # Environment identifier -> secret identifier
//!     ├── materialize   # Override check, fetch, decode, format
//!     ├── payload       # Text-or-structured secret payloads
//!     ├── types         # Domain type aliases
//!     ├── export        # `export KEY=VALUE` formatting
//!     └── store/        # Secret store backends
//!         ├── mod       # SecretStore trait and failure taxonomy
//!         └── aws       # AWS Secrets Manager
//! ```
//!
//! # Usage
//!
//! ```sh
//! eval "$(awsenv prod)"
//! ```

pub mod cli;
pub mod core;
pub mod error;
