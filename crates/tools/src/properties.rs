use blockview_render::debug::SceneState;
use blockview_render::{RenderingConfig, ShaderParametersBase};
use serde::Serialize;
use std::fmt;

/// A named, bounded tunable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    pub value: f32,
    pub min: f32,
    pub max: f32,
}

impl Property {
    pub fn new(name: impl Into<String>, value: f32, min: f32, max: f32) -> Self {
        Self {
            name: name.into(),
            value,
            min,
            max,
        }
    }

    /// Value mapped to `[0, 1]` across the range. Zero for an empty range.
    pub fn normalized(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {:.3} [{:.3}, {:.3}]",
            self.name, self.value, self.min, self.max
        )
    }
}

/// Something that exposes tunables to a debug UI.
pub trait PropertyProvider {
    fn add_properties_to(&self, properties: &mut Vec<Property>);
}

impl PropertyProvider for RenderingConfig {
    fn add_properties_to(&self, properties: &mut Vec<Property>) {
        properties.push(Property::new(
            "viewingDistance",
            self.active_viewing_distance() as f32,
            1.0,
            32.0,
        ));
    }
}

impl PropertyProvider for SceneState {
    fn add_properties_to(&self, properties: &mut Vec<Property>) {
        properties.push(Property::new("daylight", self.daylight, 0.0, 1.0));
        properties.push(Property::new("sunlight", self.sunlight, 0.0, 1.0));
        properties.push(Property::new("light", self.light_value, 0.0, 1.0));
    }
}

// The base parameter set has nothing tunable of its own.
impl PropertyProvider for ShaderParametersBase<'_> {
    fn add_properties_to(&self, _properties: &mut Vec<Property>) {}
}

/// Ordered set of providers whose properties are listed together.
#[derive(Default)]
pub struct SceneProperties<'a> {
    providers: Vec<&'a dyn PropertyProvider>,
}

impl<'a> SceneProperties<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `provider` if present. Absent providers contribute nothing.
    pub fn with(mut self, provider: Option<&'a dyn PropertyProvider>) -> Self {
        if let Some(provider) = provider {
            self.providers.push(provider);
        }
        self
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    pub fn collect(&self) -> Vec<Property> {
        let mut properties = Vec::new();
        for provider in &self.providers {
            provider.add_properties_to(&mut properties);
        }
        tracing::trace!(count = properties.len(), "collected properties");
        properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_exposes_viewing_distance() {
        let config = RenderingConfig::with_viewing_distance(12);
        let mut props = Vec::new();
        config.add_properties_to(&mut props);
        assert_eq!(props, vec![Property::new("viewingDistance", 12.0, 1.0, 32.0)]);
    }

    #[test]
    fn base_parameters_add_nothing() {
        let config = RenderingConfig::default();
        let params = ShaderParametersBase::new(&config, None, None);
        let mut props = Vec::new();
        params.add_properties_to(&mut props);
        assert!(props.is_empty());
    }

    #[test]
    fn scene_properties_keep_provider_order() {
        let config = RenderingConfig::default();
        let scene = SceneState::default();
        let listing = SceneProperties::new()
            .with(Some(&scene))
            .with(None)
            .with(Some(&config));

        assert_eq!(listing.provider_count(), 2);
        let names: Vec<_> = listing.collect().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["daylight", "sunlight", "light", "viewingDistance"]);
    }

    #[test]
    fn normalized_value() {
        assert_eq!(Property::new("x", 5.0, 0.0, 10.0).normalized(), 0.5);
        assert_eq!(Property::new("x", 20.0, 0.0, 10.0).normalized(), 1.0);
        assert_eq!(Property::new("x", 1.0, 1.0, 1.0).normalized(), 0.0);
    }

    #[test]
    fn display_format() {
        let p = Property::new("daylight", 0.5, 0.0, 1.0);
        assert_eq!(p.to_string(), "daylight = 0.500 [0.000, 1.000]");
    }
}
