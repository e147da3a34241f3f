//! Lightbox viewer state machine.
//!
//! The viewer is either closed or open at a specific image index; modeling it
//! as a tagged variant keeps "open with no valid index" unrepresentable.

/// Modal image viewer state for a post with a known image count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open {
        index: usize,
    },
}

impl Lightbox {
    /// Open the viewer at `index`. Out-of-range indices are ignored.
    pub fn open(&mut self, index: usize, count: usize) {
        if index < count {
            *self = Lightbox::Open { index };
        }
    }

    /// Close the viewer.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// Advance to the next image, wrapping around at the end.
    pub fn next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if let Lightbox::Open { index } = self {
            *index = (*index + 1) % count;
        }
    }

    /// Step back to the previous image, wrapping around at the start.
    pub fn previous(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if let Lightbox::Open { index } = self {
            *index = (*index + count - 1) % count;
        }
    }

    /// The currently displayed image index, if the viewer is open.
    pub fn current(&self) -> Option<usize> {
        match self {
            Lightbox::Open { index } => Some(*index),
            Lightbox::Closed => None,
        }
    }
}
