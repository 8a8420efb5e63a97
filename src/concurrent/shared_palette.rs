use crate::core::CreationError;
use crate::stack::colour::{ColourId, ColourService, Palette};
use parking_lot::Mutex;
use std::sync::Arc;

/// A palette whose cursor is shared by all clones.
///
/// Stacks built from clones of one `SharedPalette` draw from a single colour sequence,
/// so layers stay distinguishable across stacks shown side by side.
#[derive(Clone, Debug, Default)]
pub struct SharedPalette {
    inner: Arc<Mutex<Palette>>,
}

impl SharedPalette {
    pub fn new(colours: Vec<ColourId>) -> Result<SharedPalette, CreationError> {
        Palette::new(colours).map(SharedPalette::from_palette)
    }

    pub fn from_palette(palette: Palette) -> SharedPalette {
        SharedPalette { inner: Arc::new(Mutex::new(palette)) }
    }

    pub fn reset(&self) {
        self.inner.lock().reset();
    }

    pub fn next_shared(&self) -> ColourId {
        self.inner.lock().next_colour()
    }
}

impl ColourService for SharedPalette {
    fn next_colour(&mut self) -> ColourId {
        self.next_shared()
    }
}
