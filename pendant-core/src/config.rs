//! Module configuration.
//!
//! Configuration-file parsing belongs to the host controller; these structs
//! are the already-decoded values. Both modules default to disabled, and
//! their builders return `None` in that case so a disabled module never
//! exists half-constructed.

/// Jog pendant configuration.
///
/// Configuration keys, namespaced under `digitaljogger`:
///
/// | Key | Default | Effect when absent |
/// |---|---|---|
/// | `enable` | `false` | module inactive, no resources allocated |
/// | `axis_x_pin` / `axis_y_pin` / `axis_z_pin` | not connected | member permanently unselectable |
/// | `feed_min_pin` / `feed_mid_pin` / `feed_max_pin` | not connected | member permanently unselectable |
/// | `encoder_a_input_pin` / `encoder_b_input_pin` | not connected | decoder disabled unless both present |
/// | `feedrade_percentage` | — | declared, currently unused |
///
/// The pin descriptors themselves are resolved by the wiring layer into
/// optional [`SelectorLine`](crate::input::SelectorLine) handles and encoder
/// inputs; an absent descriptor simply produces `None`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PendantConfig {
    /// Master enable; everything else is ignored when false.
    pub enable: bool,
    /// Declared by the configuration schema, not yet consumed.
    pub feedrade_percentage: Option<f32>,
}

/// Feed-override module configuration.
///
/// Configuration keys, namespaced under `feedoverride`:
///
/// | Key | Default |
/// |---|---|
/// | `enable` | `false` |
/// | `data_source` | `""` |
/// | `min` | `0.2` |
/// | `max` | `1.2` |
///
/// `min < max` is not enforced; an inverted range inverts the scaling
/// direction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OverrideConfig {
    /// Master enable for the override module.
    pub enable: bool,
    /// Key of the analog data source to sample.
    pub data_source: &'static str,
    /// Factor at joystick position -1.
    pub min: f32,
    /// Factor at joystick position 1.
    pub max: f32,
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            enable: false,
            data_source: "",
            min: 0.2,
            max: 1.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_disabled() {
        assert!(!PendantConfig::default().enable);
        assert!(!OverrideConfig::default().enable);
    }

    #[test]
    fn test_override_default_bounds() {
        let config = OverrideConfig::default();
        assert_eq!(config.min, 0.2);
        assert_eq!(config.max, 1.2);
        assert_eq!(config.data_source, "");
    }
}
