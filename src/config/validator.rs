//! Configuration validation for cluster specs.
//!
//! Validation is exhaustive: the whole configuration tree is always
//! traversed and every violation found is reported, so a user never has to
//! re-run validation to discover the next unrelated problem. The traversal
//! order is fixed, which keeps error output stable across runs for the
//! same input.

use tracing::debug;

use super::spec::{ClusterConfig, LifecycleHook, LifecyclePhase};

/// Validator for cluster configurations.
///
/// Validation is a pure read-only pass: the configuration is never mutated
/// or defaulted here. Run [`defaults::apply`](super::defaults::apply) first
/// if the configuration may contain omitted values.
#[derive(Debug, Default)]
pub struct ConfigValidator;

/// The kind of rule a violation breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// A required scalar field is empty.
    EmptyField,
    /// A lifecycle hook declares no command tokens.
    EmptyCommand,
}

/// A single validation rule failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The kind of rule broken.
    pub kind: ViolationKind,
    /// Path of the field that failed validation.
    pub field: String,
    /// Human-readable description of the failure.
    pub message: String,
}

/// Every violation found in one validation pass, in traversal order.
///
/// Never constructed empty by the validator: a valid configuration yields
/// `Ok(())` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ConfigValidator {
    /// Creates a new validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Validates a cluster configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationErrors`] holding one entry per violated rule,
    /// in traversal order: the image first, then the lifecycle hooks of
    /// each phase (`preBoot`, `preKubeadm`, `postKubeadm`) in sequence
    /// order.
    pub fn validate(&self, config: &ClusterConfig) -> Result<(), ValidationErrors> {
        let mut violations = validate_image(config);

        if let Some(control_plane) = &config.control_plane
            && let Some(lifecycle) = &control_plane.node_lifecycle
        {
            for (phase, hooks) in lifecycle.phases() {
                for (index, hook) in hooks.iter().enumerate() {
                    violations.extend(validate_lifecycle_hook(hook, phase, index));
                }
            }
        }

        if violations.is_empty() {
            debug!("Configuration validation passed");
            Ok(())
        } else {
            debug!("Configuration validation found {} violation(s)", violations.len());
            Err(ValidationErrors::new(violations))
        }
    }
}

/// Checks that the node image is declared.
fn validate_image(config: &ClusterConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if config.image.is_empty() {
        violations.push(Violation {
            kind: ViolationKind::EmptyField,
            field: String::from("image"),
            message: String::from("Node image cannot be empty"),
        });
    }

    violations
}

/// Checks that a lifecycle hook declares a command to execute.
fn validate_lifecycle_hook(
    hook: &LifecycleHook,
    phase: LifecyclePhase,
    index: usize,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    if hook.command.is_empty() {
        let message = hook.name.as_ref().map_or_else(
            || format!("Hook in phase {phase} declares no command"),
            |name| format!("Hook '{name}' in phase {phase} declares no command"),
        );
        violations.push(Violation {
            kind: ViolationKind::EmptyCommand,
            field: format!("controlPlane.nodeLifecycle.{phase}[{index}].command"),
            message,
        });
    }

    violations
}

impl ViolationKind {
    /// Returns the rule identifier used in CLI and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyField => "empty-field",
            Self::EmptyCommand => "empty-command",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationErrors {
    /// Creates an aggregate from the violations found in one pass.
    #[must_use]
    pub const fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Returns the violations in the order they were found.
    #[must_use]
    pub fn errors(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if the aggregate holds no violations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
