// ============================================================================
// Strict linting - Dangerous or non-idiomatic practices are forbidden
// ============================================================================

#![deny(warnings)]                    // All warnings are treated as errors
#![deny(unsafe_code)]                 // Unsafe code is forbidden
#![deny(missing_docs)]                // All public items must be documented
#![deny(dead_code)]                   // Unused code is forbidden
#![deny(non_camel_case_types)]        // Types must follow CamelCase convention

// Additional strictness - Leave nothing unchecked
#![deny(unused_imports)]              // Unused imports are forbidden
#![deny(unused_variables)]            // Unused variables are forbidden
#![deny(unused_must_use)]             // Must handle Result and Option explicitly
#![deny(non_snake_case)]              // Variables and functions must be snake_case
#![deny(non_upper_case_globals)]      // Constants must be UPPER_CASE
#![deny(nonstandard_style)]           // Non-standard code style is forbidden
#![forbid(unsafe_op_in_unsafe_fn)]    // Unsafe ops in unsafe fns are forbidden

// Clippy lints (warnings only)
#![warn(clippy::all)]                 // All standard Clippy lints
#![warn(clippy::pedantic)]            // Very strict Clippy lints
#![warn(clippy::nursery)]             // Experimental lints
#![warn(clippy::unwrap_used)]         // unwrap() warning
#![warn(clippy::expect_used)]         // expect() warning
#![warn(clippy::panic)]               // panic!() warning
#![warn(clippy::print_stdout)]        // println!() warning
#![warn(clippy::todo)]                // TODO warning
#![warn(clippy::unimplemented)]       // unimplemented!() warning
#![warn(clippy::missing_const_for_fn)] // Force const when possible
#![warn(clippy::unwrap_in_result)]    // unwrap() in Result warning
#![warn(clippy::module_inception)]    // Module with same name as crate warning
#![warn(clippy::redundant_clone)]     // Useless clones warning
#![warn(clippy::shadow_unrelated)]    // Shadowing unrelated variables warning
#![warn(clippy::too_many_arguments)]  // Limit function arguments
#![warn(clippy::cognitive_complexity)] // Limit cognitive complexity

// Safety and robustness lints
#![deny(overflowing_literals)]        // Overflowing literals are forbidden
#![deny(arithmetic_overflow)]         // Arithmetic overflow is forbidden

// ============================================================================
// Crate Documentation
// ============================================================================

//! # Kubeforge
//!
//! The configuration front-end for Docker-backed Kubernetes development
//! clusters: loading, defaulting, and validation of cluster configuration.
//!
//! ## Overview
//!
//! Kubeforge owns the declarative configuration of a provisioned cluster.
//! The configuration is a small tree: a node image plus optional
//! control-plane lifecycle customization (commands to run before boot,
//! before `kubeadm`, and after `kubeadm`). Node provisioning and image
//! building consume the validated configuration and live outside this
//! crate.
//!
//! Validation is exhaustive by design: one pass reports *every* violation
//! in the configuration, in a fixed traversal order, so users fix all
//! problems in one round trip.
//!
//! ## Modules
//!
//! - [`config`]: Configuration parsing, defaulting, and validation
//! - [`cli`]: Command-line interface
//! - [`error`]: Error hierarchy
//!
//! ## Example
//!
//! ```yaml
//! image: kubeforge/node:v1.31.0
//!
//! controlPlane:
//!   nodeLifecycle:
//!     preBoot:
//!       - name: preload images
//!         command: ["docker", "pull", "registry.k8s.io/pause:3.10"]
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod cli;
pub mod config;
pub mod error;

// ============================================================================
// Re-exports
// ============================================================================

pub use cli::{Cli, Commands, OutputFormatter};
pub use config::{
    ClusterConfig, ConfigParser, ConfigValidator, ValidationErrors, Violation, ViolationKind,
};
pub use error::{KubeforgeError, Result};
