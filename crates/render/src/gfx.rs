use glam::{Mat4, Vec3};
use std::ops::{Deref, DerefMut};

/// Immediate-mode graphics context: a model-view matrix stack plus draws.
pub trait GraphicsContext {
    fn push_matrix(&mut self);

    fn pop_matrix(&mut self);

    /// Post-multiply the current matrix by a translation.
    fn translate(&mut self, offset: Vec3);

    /// Post-multiply the current matrix by `matrix`.
    fn multiply_matrix(&mut self, matrix: &Mat4);

    /// Issue an indexed draw with the current matrix and bound program.
    fn draw_indexed(&mut self, label: &str, index_count: u32);
}

/// Pushes the matrix stack on creation and pops it on drop.
pub struct MatrixScope<'a, G: GraphicsContext + ?Sized> {
    gfx: &'a mut G,
}

impl<'a, G: GraphicsContext + ?Sized> MatrixScope<'a, G> {
    pub fn push(gfx: &'a mut G) -> Self {
        gfx.push_matrix();
        Self { gfx }
    }
}

impl<G: GraphicsContext + ?Sized> Deref for MatrixScope<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.gfx
    }
}

impl<G: GraphicsContext + ?Sized> DerefMut for MatrixScope<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.gfx
    }
}

impl<G: GraphicsContext + ?Sized> Drop for MatrixScope<'_, G> {
    fn drop(&mut self) {
        self.gfx.pop_matrix();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debug::RecordingContext;

    #[test]
    fn scope_balances_stack() {
        let mut gfx = RecordingContext::new();
        {
            let mut outer = MatrixScope::push(&mut gfx);
            outer.translate(Vec3::new(1.0, 0.0, 0.0));
            {
                let mut inner = MatrixScope::push(&mut *outer);
                inner.translate(Vec3::new(0.0, 2.0, 0.0));
                assert_eq!(inner.depth(), 2);
                assert!(
                    inner
                        .current()
                        .abs_diff_eq(Mat4::from_translation(Vec3::new(1.0, 2.0, 0.0)), 1e-6)
                );
            }
            assert_eq!(outer.depth(), 1);
            assert!(
                outer
                    .current()
                    .abs_diff_eq(Mat4::from_translation(Vec3::X), 1e-6)
            );
        }
        assert_eq!(gfx.depth(), 0);
        assert_eq!(gfx.max_depth(), 2);
        assert!(gfx.current().abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }
}
