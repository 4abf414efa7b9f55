//! Configuration specification types for cluster provisioning.
//!
//! This module defines the structs that map to the `kubeforge.cluster.yaml`
//! file. These types are plain data: defaulting and validation are separate
//! passes that read (or, for defaulting, fill in) what is declared here.

use serde::{Deserialize, Serialize};

/// The root configuration for a provisioned cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// Node image used to boot cluster nodes.
    ///
    /// An omitted image deserializes as empty and is filled in by the
    /// defaulting pass before validation.
    #[serde(default)]
    pub image: String,

    /// Control-plane customization, present only if declared.
    #[serde(default)]
    pub control_plane: Option<ControlPlaneConfig>,
}

/// Configuration specific to control-plane nodes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneConfig {
    /// Lifecycle customization applied to control-plane nodes.
    #[serde(default)]
    pub node_lifecycle: Option<NodeLifecycle>,
}

/// The ordered hook phases applied while provisioning a node.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeLifecycle {
    /// Hooks run before the node container boots.
    #[serde(default)]
    pub pre_boot: Vec<LifecycleHook>,

    /// Hooks run after boot, before `kubeadm` is invoked.
    #[serde(default)]
    pub pre_kubeadm: Vec<LifecycleHook>,

    /// Hooks run after `kubeadm` completes.
    #[serde(default)]
    pub post_kubeadm: Vec<LifecycleHook>,
}

/// A single command to run at a lifecycle phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleHook {
    /// Optional name identifying the hook in diagnostics.
    #[serde(default)]
    pub name: Option<String>,

    /// Command tokens to execute.
    #[serde(default)]
    pub command: Vec<String>,
}

/// Labels for the three lifecycle phases, in execution order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LifecyclePhase {
    /// Before the node container boots.
    PreBoot,
    /// After boot, before `kubeadm`.
    PreKubeadm,
    /// After `kubeadm`.
    PostKubeadm,
}

impl LifecyclePhase {
    /// Returns the phase label as it appears in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreBoot => "preBoot",
            Self::PreKubeadm => "preKubeadm",
            Self::PostKubeadm => "postKubeadm",
        }
    }
}

impl std::fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NodeLifecycle {
    /// Returns each phase paired with its hooks, in execution order.
    #[must_use]
    pub fn phases(&self) -> [(LifecyclePhase, &[LifecycleHook]); 3] {
        [
            (LifecyclePhase::PreBoot, self.pre_boot.as_slice()),
            (LifecyclePhase::PreKubeadm, self.pre_kubeadm.as_slice()),
            (LifecyclePhase::PostKubeadm, self.post_kubeadm.as_slice()),
        ]
    }

    /// Returns the total number of hooks across all phases.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.pre_boot.len() + self.pre_kubeadm.len() + self.post_kubeadm.len()
    }
}

impl ClusterConfig {
    /// Returns the total number of lifecycle hooks declared for the
    /// control plane, or zero if no lifecycle customization is declared.
    #[must_use]
    pub fn hook_count(&self) -> usize {
        self.control_plane
            .as_ref()
            .and_then(|cp| cp.node_lifecycle.as_ref())
            .map_or(0, NodeLifecycle::hook_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phases_in_execution_order() {
        let lifecycle = NodeLifecycle::default();
        let phases: Vec<LifecyclePhase> =
            lifecycle.phases().iter().map(|(phase, _)| *phase).collect();

        assert_eq!(
            phases,
            vec![
                LifecyclePhase::PreBoot,
                LifecyclePhase::PreKubeadm,
                LifecyclePhase::PostKubeadm,
            ]
        );
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(LifecyclePhase::PreBoot.as_str(), "preBoot");
        assert_eq!(LifecyclePhase::PreKubeadm.as_str(), "preKubeadm");
        assert_eq!(LifecyclePhase::PostKubeadm.as_str(), "postKubeadm");
    }

    #[test]
    fn test_omitted_substructures_deserialize_absent() {
        let config: ClusterConfig =
            serde_yaml::from_str("image: kubeforge/node:v1.31.0").unwrap();

        assert_eq!(config.image, "kubeforge/node:v1.31.0");
        assert!(config.control_plane.is_none());
        assert_eq!(config.hook_count(), 0);
    }

    #[test]
    fn test_hook_count_spans_phases() {
        let hook = LifecycleHook {
            name: None,
            command: vec![String::from("true")],
        };
        let config = ClusterConfig {
            image: String::from("kubeforge/node:latest"),
            control_plane: Some(ControlPlaneConfig {
                node_lifecycle: Some(NodeLifecycle {
                    pre_boot: vec![hook.clone()],
                    pre_kubeadm: vec![hook.clone(), hook.clone()],
                    post_kubeadm: vec![hook],
                }),
            }),
        };

        assert_eq!(config.hook_count(), 4);
    }
}
