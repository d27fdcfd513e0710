//! Stagehand - stages the environment for the rest of a deployment job.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Input flags (also readable from INPUT_* env vars)
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── args          # Name-mapping syntax and step argument resolution
//!     ├── constants     # Settings key template, registry host, file names
//!     ├── store/        # Parameter store client
//!     │   ├── mod       # ParameterStore trait
//!     │   └── ssm       # AWS SSM implementation
//!     ├── runner        # CI runner capability (export, mask, log)
//!     ├── creds         # .netrc / .npmrc content and writers
//!     └── action        # Export stages and the sequential driver
//! ```
//!
//! # What it does
//!
//! Invoked once per CI job, stagehand resolves its inputs, then runs three
//! strictly ordered stages against AWS SSM Parameter Store:
//!
//! 1. Fetch the per-region deployment settings blob and export the requested
//!    plain variables for the target environment.
//! 2. Batch-fetch the requested secrets, register a log mask for each value,
//!    and export them.
//! 3. Fetch the registry token and write `.netrc` and `~/.npmrc` so later
//!    steps can authenticate to the private package registry.
//!
//! Every failure is fatal to the run; nothing is retried or rolled back.

pub mod cli;
pub mod core;
pub mod error;
