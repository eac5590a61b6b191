//! Warren - run commands with parameter-store secrets in the environment.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── run           # Run with merged environment
//! │   ├── env           # Print merged environment (dotenv / export)
//! │   ├── keys          # List remote parameter names under the prefix
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config        # .warren.toml management
//!     ├── env           # Process environment snapshot, dotenv rendering
//!     ├── template      # ${VAR} expansion for configured prefixes
//!     ├── resolver      # Fetch, strip, merge logic
//!     └── store/        # Remote parameter store backends
//!         ├── mod       # ParameterStore trait
//!         ├── ssm       # AWS SSM Parameter Store implementation
//!         └── memory    # In-memory fake for tests
//! ```
//!
//! # Features
//!
//! - Fetches every parameter under a path prefix, decrypted on read
//! - Overlays fetched secrets onto the process environment
//! - Falls back to the plain environment when the store is unreachable
//! - Templated prefixes (`/myapp/${STAGE}/`) resolved from the environment

pub mod cli;
pub mod core;
pub mod error;
