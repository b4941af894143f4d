use super::error::{DisplayError, Result};

/// Bytes per pixel in the blue, green, red, alpha layout
pub const BYTES_PER_PIXEL: usize = 4;

/// Off-screen pixel buffer mirroring what the window shows.
///
/// Pixels are stored top row first, four bytes each in blue, green, red,
/// alpha order. Storage is one `u32` per pixel so the buffer can be handed to
/// presenters as words and to renderers as flat bytes without copying.
#[derive(Debug, Clone)]
pub struct OffscreenSurface {
    width: u32,
    height: u32,
    words: Vec<u32>,
}

impl OffscreenSurface {
    /// Allocate a zeroed (black, transparent) surface
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let words = Self::allocate(width, height)?;
        Ok(Self {
            width,
            height,
            words,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.words.len()
    }

    /// Total size in bytes of a full frame
    pub fn buffer_size(&self) -> usize {
        self.pixel_count() * BYTES_PER_PIXEL
    }

    /// Flat byte view
    pub fn pixels(&self) -> &[u8] {
        bytemuck::cast_slice(&self.words)
    }

    /// Flat mutable byte view for renderers that draw in place
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.words)
    }

    /// One little-endian BGRA word per pixel
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Copy a full frame into the surface.
    ///
    /// Nothing is written unless `pixels` is exactly one frame long.
    pub fn write(&mut self, pixels: &[u8]) -> Result<()> {
        if pixels.is_empty() {
            return Err(DisplayError::InvalidArgument("empty pixel buffer"));
        }
        let expected = self.buffer_size();
        if pixels.len() != expected {
            return Err(DisplayError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        self.pixels_mut().copy_from_slice(pixels);
        Ok(())
    }

    /// Fill every pixel with one BGRA value
    pub fn fill(&mut self, bgra: [u8; 4]) {
        self.words.fill(u32::from_ne_bytes(bgra));
    }

    /// Reallocate to new dimensions, clearing the contents.
    ///
    /// Returns `Ok(false)` when the size is unchanged or either side is zero;
    /// the current buffer is kept in both cases.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<bool> {
        if (width, height) == self.dimensions() || width == 0 || height == 0 {
            return Ok(false);
        }
        self.words = Self::allocate(width, height)?;
        self.width = width;
        self.height = height;
        Ok(true)
    }

    fn allocate(width: u32, height: u32) -> Result<Vec<u32>> {
        if width == 0 || height == 0 {
            return Err(DisplayError::AllocationFailure(format!(
                "surface dimensions {}x{} must be non-zero",
                width, height
            )));
        }
        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|count| count.checked_mul(BYTES_PER_PIXEL).is_some())
            .ok_or_else(|| {
                DisplayError::AllocationFailure(format!(
                    "surface {}x{} is too large",
                    width, height
                ))
            })?;

        let mut words = Vec::new();
        words.try_reserve_exact(count).map_err(|e| {
            DisplayError::AllocationFailure(format!(
                "surface {}x{}: {}",
                width, height, e
            ))
        })?;
        words.resize(count, 0);
        Ok(words)
    }
}
