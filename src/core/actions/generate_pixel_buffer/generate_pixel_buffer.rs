use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum GeneratePixelBufferError {
    Cancelled(Cancelled),
    ColourMap(Box<dyn Error>),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cancelled(c) => write!(f, "{}", c),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cancelled(c) => Some(c),
            Self::ColourMap(err) => Some(err.as_ref()),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Colours a row-major list of generator results into a frame covering
/// `pixel_rect`. The list must hold exactly one value per pixel.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    generate_pixel_buffer_cancelable(input, mapper, pixel_rect, &NeverCancel)
}

/// Like [`generate_pixel_buffer`], polling `cancel` every
/// [`CANCEL_CHECK_INTERVAL_PIXELS`] values.
pub fn generate_pixel_buffer_cancelable<T, CMap, C>(
    input: Vec<T>,
    mapper: &CMap,
    pixel_rect: PixelRect,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError>
where
    CMap: ColourMap<T>,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(input.len() * 3);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let Colour { r, g, b } = mapper.map(value).map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(pixel_rect, buffer)?)
}
