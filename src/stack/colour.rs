use crate::core::constants::DEFAULT_PALETTE;
use crate::core::CreationError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ColourId(pub u16);

impl fmt::Display for ColourId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "colour#{}", self.0)
    }
}

pub trait ColourService {
    fn next_colour(&mut self) -> ColourId;
}

impl<'a, C: ColourService + ?Sized> ColourService for &'a mut C {
    fn next_colour(&mut self) -> ColourId {
        (**self).next_colour()
    }
}

/// Hands out colours from a fixed list, starting over once it is exhausted.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colours: Vec<ColourId>,
    cursor: usize,
}

impl Palette {
    pub fn new(colours: Vec<ColourId>) -> Result<Palette, CreationError> {
        expect!(colours.is_empty(), CreationError::EmptyPalette);
        Ok(Palette { colours, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.colours.len()
    }

    pub fn colours(&self) -> &[ColourId] {
        &self.colours
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colours: DEFAULT_PALETTE.iter().cloned().map(ColourId).collect(),
            cursor: 0,
        }
    }
}

impl ColourService for Palette {
    fn next_colour(&mut self) -> ColourId {
        let colour = self.colours[self.cursor];
        self.cursor = (self.cursor + 1) % self.colours.len();
        colour
    }
}
