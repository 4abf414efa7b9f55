//! Configuration module for the kubeforge provisioner.
//!
//! This module handles all configuration-related functionality:
//! - Parsing and deserializing `kubeforge.cluster.yaml`
//! - Defaulting of omitted values
//! - Validation of configuration values

mod spec;
mod parser;
mod validator;
pub mod defaults;

pub use spec::{
    ClusterConfig, ControlPlaneConfig, LifecycleHook, LifecyclePhase, NodeLifecycle,
};
pub use parser::{ConfigParser, find_config_file};
pub use validator::{ConfigValidator, ValidationErrors, Violation, ViolationKind};
