use crate::view::DashboardView;

/// Draws the views. Called exactly once per recompute.
pub trait Renderer {
    fn render(&mut self, view: &DashboardView);
}
