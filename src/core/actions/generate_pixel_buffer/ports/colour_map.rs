use crate::core::data::colour::Colour;
use std::error::Error;

/// Turns one generator result into the colour written to the frame.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> Result<Colour, Box<dyn Error>>;

    fn display_name(&self) -> &str;
}
