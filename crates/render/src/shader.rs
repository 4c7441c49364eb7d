use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

/// Optional shader program features toggled per pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShaderFeature {
    DeferredLighting,
    UseMatrixStack,
    AlphaReject,
}

/// Value stored in a named uniform slot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Uniform {
    Float(f32),
    Float3(Vec3),
    Bool(bool),
}

impl Uniform {
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Uniform::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float3(&self) -> Option<Vec3> {
        match self {
            Uniform::Float3(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Uniform::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

/// A shared, stateful shader program instance.
pub trait ShaderProgram {
    fn name(&self) -> &str;

    /// Turn `feature` on if the program was built with it. Returns whether
    /// it is active afterwards.
    fn add_feature_if_available(&mut self, feature: ShaderFeature) -> bool;

    fn remove_feature(&mut self, feature: ShaderFeature);

    fn has_feature(&self, feature: ShaderFeature) -> bool;

    fn set_uniform(&mut self, name: &str, value: Uniform);

    /// Bind the program for subsequent draw calls.
    fn enable(&mut self);

    fn set_float(&mut self, name: &str, value: f32) {
        self.set_uniform(name, Uniform::Float(value));
    }

    fn set_float3(&mut self, name: &str, value: Vec3) {
        self.set_uniform(name, Uniform::Float3(value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.set_uniform(name, Uniform::Bool(value));
    }
}

/// Named shader program lookup.
pub trait ShaderLibrary {
    fn program_mut(&mut self, name: &str) -> Option<&mut dyn ShaderProgram>;
}

/// Enables features on a borrowed program and removes them again on drop.
///
/// Only features this scope actually turned on are removed, so a feature that
/// was already active when the scope opened is still active after it closes.
pub struct FeatureScope<'a, P: ShaderProgram + ?Sized> {
    program: &'a mut P,
    enabled: Vec<ShaderFeature>,
}

impl<'a, P: ShaderProgram + ?Sized> FeatureScope<'a, P> {
    pub fn enable(program: &'a mut P, features: &[ShaderFeature]) -> Self {
        let mut enabled = Vec::with_capacity(features.len());
        for &feature in features {
            if program.has_feature(feature) {
                continue;
            }
            if program.add_feature_if_available(feature) {
                enabled.push(feature);
            } else {
                tracing::debug!(program = program.name(), ?feature, "feature not available");
            }
        }
        Self { program, enabled }
    }

    /// Features this scope turned on and will turn off.
    pub fn enabled(&self) -> &[ShaderFeature] {
        &self.enabled
    }
}

impl<P: ShaderProgram + ?Sized> Deref for FeatureScope<'_, P> {
    type Target = P;

    fn deref(&self) -> &P {
        self.program
    }
}

impl<P: ShaderProgram + ?Sized> DerefMut for FeatureScope<'_, P> {
    fn deref_mut(&mut self) -> &mut P {
        self.program
    }
}

impl<P: ShaderProgram + ?Sized> Drop for FeatureScope<'_, P> {
    fn drop(&mut self) {
        for feature in self.enabled.drain(..).rev() {
            self.program.remove_feature(feature);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::DebugShaderProgram;

    #[test]
    fn scope_restores_neutral_state() {
        let mut program = DebugShaderProgram::with_all_features("block");
        {
            let scope = FeatureScope::enable(
                &mut program,
                &[ShaderFeature::DeferredLighting, ShaderFeature::UseMatrixStack],
            );
            assert!(scope.has_feature(ShaderFeature::DeferredLighting));
            assert!(scope.has_feature(ShaderFeature::UseMatrixStack));
            assert_eq!(scope.enabled().len(), 2);
        }
        assert!(program.active_features().is_empty());
    }

    #[test]
    fn scope_keeps_features_that_were_already_on() {
        let mut program = DebugShaderProgram::with_all_features("block");
        program.add_feature_if_available(ShaderFeature::DeferredLighting);
        {
            let scope = FeatureScope::enable(
                &mut program,
                &[ShaderFeature::DeferredLighting, ShaderFeature::UseMatrixStack],
            );
            assert_eq!(scope.enabled(), &[ShaderFeature::UseMatrixStack]);
        }
        assert!(program.has_feature(ShaderFeature::DeferredLighting));
        assert!(!program.has_feature(ShaderFeature::UseMatrixStack));
    }

    #[test]
    fn unavailable_features_are_skipped() {
        let mut program = DebugShaderProgram::new("plain", []);
        {
            let scope = FeatureScope::enable(&mut program, &[ShaderFeature::AlphaReject]);
            assert!(scope.enabled().is_empty());
        }
        assert!(program.feature_log().is_empty());
    }

    #[test]
    fn scope_works_through_trait_objects() {
        let mut program = DebugShaderProgram::with_all_features("block");
        {
            let dynamic: &mut dyn ShaderProgram = &mut program;
            let mut scope = FeatureScope::enable(dynamic, &[ShaderFeature::AlphaReject]);
            scope.set_float("light", 0.5);
        }
        assert_eq!(program.float("light"), Some(0.5));
        assert!(!program.has_feature(ShaderFeature::AlphaReject));
    }

    #[test]
    fn uniform_accessors() {
        assert_eq!(Uniform::Float(2.0).as_float(), Some(2.0));
        assert_eq!(Uniform::Float(2.0).as_bool(), None);
        assert_eq!(Uniform::Float3(Vec3::X).as_float3(), Some(Vec3::X));
        assert_eq!(Uniform::Bool(true).as_bool(), Some(true));
    }
}
