//! A per-tick list of things to draw on screen for whoever is watching.
//!
//! Nothing in here affects what the bot does. The host decides whether and how
//! to render it.

use nalgebra::Vector3;
use std::mem;

/// An RGB color.
pub type Color = [u8; 3];

pub struct EEG {
    drawables: Vec<Drawable>,
}

impl EEG {
    pub fn new() -> EEG {
        EEG {
            drawables: Vec::new(),
        }
    }

    pub fn draw(&mut self, drawable: Drawable) {
        self.drawables.push(drawable);
    }

    /// The drawables queued so far this tick.
    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    /// Hand over everything queued this tick, leaving the list empty.
    pub fn take_drawables(&mut self) -> Vec<Drawable> {
        mem::replace(&mut self.drawables, Vec::new())
    }
}

impl Default for EEG {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    /// A line of text in the screen's corner.
    Print(String, Color),
    /// Text floating at a location in the world.
    Text3D(Vector3<f32>, String, Color),
}

impl Drawable {
    pub fn print(text: impl Into<String>, color: Color) -> Drawable {
        Drawable::Print(text.into(), color)
    }

    pub fn text_3d(loc: Vector3<f32>, text: impl Into<String>, color: Color) -> Drawable {
        Drawable::Text3D(loc, text.into(), color)
    }
}

pub mod color {
    use super::Color;

    pub const WHITE: Color = [255, 255, 255];
    pub const GREEN: Color = [0, 255, 0];
}

#[cfg(test)]
mod tests {
    use crate::eeg::{color, Drawable, EEG};
    use nalgebra::Vector3;

    #[test]
    fn take_drains() {
        let mut eeg = EEG::new();
        eeg.draw(Drawable::print("hello", color::WHITE));
        eeg.draw(Drawable::text_3d(Vector3::zeros(), "there", color::GREEN));
        assert_eq!(eeg.drawables().len(), 2);

        let drawables = eeg.take_drawables();
        assert_eq!(drawables[0], Drawable::Print("hello".to_string(), color::WHITE));
        assert!(eeg.drawables().is_empty());
    }
}
