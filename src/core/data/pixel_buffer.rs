use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds {
        pixel: Point,
        pixel_rect: PixelRect,
    },
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                pixel_rect_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "pixel rect size {} does not match buffer size {}",
                    pixel_rect_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, pixel_rect } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of PixelRect bounds top:{}, left:{}, bottom:{}, right:{}",
                    pixel.x,
                    pixel.y,
                    pixel_rect.top_left().y,
                    pixel_rect.top_left().x,
                    pixel_rect.bottom_right().y,
                    pixel_rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB frame, row-major, starting at the rect's top-left pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    /// A cleared (black) frame.
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let pixel_rect_size = pixel_rect_to_buffer_size(pixel_rect);

        if pixel_rect_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.byte_offset(pixel)?;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.byte_offset(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    fn byte_offset(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        self.pixel_rect
            .index_of(pixel)
            .map(|index| index * BYTES_PER_PIXEL)
            .ok_or(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            })
    }
}
