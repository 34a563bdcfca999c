use std::io;

use crate::layer::DrawLayer;


// Something layers can be painted on. A render pass is `clear`, one or more `submit`s, `redraw`.
// Layers must be painted in submission order.
pub trait Surface {
    fn clear(&mut self);
    fn submit(&mut self, layers: &[DrawLayer]);
    fn redraw(&mut self) -> io::Result<()>;
}

// Remembers what was drawn. Useful for comparing render passes and for driving the viewer
// without a real screen.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pending: Vec<DrawLayer>,
    shown: Vec<DrawLayer>,
    num_redraws: usize,
}

impl RecordingSurface {
    pub fn new() -> Self { Self::default() }

    // Layers as of the last `redraw`.
    pub fn shown(&self) -> &[DrawLayer] { &self.shown }
    pub fn num_redraws(&self) -> usize { self.num_redraws }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) { self.pending.clear(); }
    fn submit(&mut self, layers: &[DrawLayer]) { self.pending.extend_from_slice(layers); }
    fn redraw(&mut self) -> io::Result<()> {
        self.shown = self.pending.clone();
        self.num_redraws += 1;
        Ok(())
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) { (**self).clear() }
    fn submit(&mut self, layers: &[DrawLayer]) { (**self).submit(layers) }
    fn redraw(&mut self) -> io::Result<()> { (**self).redraw() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::GridPoint;
    use crate::layer::Ink;

    #[test]
    fn recording() {
        let layer = DrawLayer::Fill { at: GridPoint::new(1, 2), ink: Ink::default() };
        let mut surface = RecordingSurface::new();
        surface.submit(std::slice::from_ref(&layer));
        assert!(surface.shown().is_empty());
        surface.redraw().unwrap();
        assert_eq!(surface.shown(), [layer.clone()]);
        surface.clear();
        surface.redraw().unwrap();
        assert!(surface.shown().is_empty());
        assert_eq!(surface.num_redraws(), 2);
    }
}
