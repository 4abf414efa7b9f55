//! Configuration defaulting.
//!
//! Defaulting is a separate pass that runs before validation in the CLI
//! flow. The validator never defaults: an empty image handed directly to it
//! is reported as a violation.

use tracing::debug;

use super::spec::ClusterConfig;

/// Node image used when the configuration does not declare one.
pub const DEFAULT_NODE_IMAGE: &str = "kubeforge/node:latest";

/// Fills in default values for omitted fields, in place.
pub fn apply(config: &mut ClusterConfig) {
    if config.image.is_empty() {
        debug!("Defaulting image to {DEFAULT_NODE_IMAGE}");
        config.image = String::from(DEFAULT_NODE_IMAGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_is_defaulted() {
        let mut config = ClusterConfig {
            image: String::new(),
            control_plane: None,
        };
        apply(&mut config);
        assert_eq!(config.image, DEFAULT_NODE_IMAGE);
    }

    #[test]
    fn test_declared_image_is_kept() {
        let mut config = ClusterConfig {
            image: String::from("myImage:latest"),
            control_plane: None,
        };
        apply(&mut config);
        assert_eq!(config.image, "myImage:latest");
    }

    #[test]
    fn test_defaulting_leaves_control_plane_untouched() {
        let mut config = ClusterConfig {
            image: String::new(),
            control_plane: None,
        };
        apply(&mut config);
        assert!(config.control_plane.is_none());
    }
}
