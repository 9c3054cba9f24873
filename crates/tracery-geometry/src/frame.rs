//! CPU pixel buffers and animation sequences.
//!
//! A [`Frame`] is a tightly packed RGBA8 image, as produced by
//! [`Rasterizer::snapshot`](crate::Rasterizer::snapshot). Frames are collected in a
//! [`FrameSequence`] and written out as an animated PNG.
//!
//! # Example
//!
//! ```ignore
//! let mut frames = FrameSequence::new();
//! for _ in 0..60 {
//!     path.rotate(0.1);
//!     canvas.clear(Color::BLACK);
//!     canvas.stroke(&path, &StrokeStyle::default());
//!     frames.push(canvas.snapshot());
//! }
//! frames.save_apng("spin.png", 2)?;
//! ```

use crate::{Color, ExportError, ExportResult};

/// An RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Frame {
    /// Wrap a row-major RGBA8 buffer. The buffer must hold exactly
    /// `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> ExportResult<Self> {
        if pixels.len() != width as usize * height as usize * 4 {
            return Err(ExportError::InvalidFrame {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A frame with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Color) -> Self {
        let rgba = color.to_rgba8();
        let pixels = rgba
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 4)
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the raw RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get one pixel, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels
            .get(offset..offset + 4)
            .and_then(|px| px.try_into().ok())
    }

    /// Consume the frame and return its bytes.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Save this frame as a static PNG image.
    #[cfg(feature = "export")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> ExportResult<()> {
        let img = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .ok_or(ExportError::Encode(
                "Failed to create image from raw data".to_string(),
            ))?;

        img.save(path).map_err(|e| ExportError::Io(format!("{}", e)))?;

        tracing::debug!(width = self.width, height = self.height, "saved png");
        Ok(())
    }
}

/// An ordered list of frames for animation export.
#[derive(Debug, Clone, Default)]
pub struct FrameSequence {
    frames: Vec<Frame>,
}

impl FrameSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a frame.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drop every frame.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Get the frames in order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Check the sequence can be exported and return the shared frame size.
    ///
    /// Fails with [`ExportError::NoFrames`] when empty, and with
    /// [`ExportError::FrameSizeMismatch`] on the first frame whose size differs from the
    /// first one.
    pub fn validate(&self) -> ExportResult<(u32, u32)> {
        let first = self.frames.first().ok_or(ExportError::NoFrames)?;
        let expected = first.dimensions();

        for (index, frame) in self.frames.iter().enumerate().skip(1) {
            if frame.dimensions() != expected {
                return Err(ExportError::FrameSizeMismatch {
                    index,
                    expected,
                    found: frame.dimensions(),
                });
            }
        }

        Ok(expected)
    }

    /// Save the sequence as an endlessly looping animated PNG.
    ///
    /// `delay` is the time each frame is shown, in hundredths of a second (2 for 50 FPS,
    /// 4 for 25 FPS).
    #[cfg(feature = "export")]
    pub fn save_apng(&self, path: impl AsRef<std::path::Path>, delay: u16) -> ExportResult<()> {
        use std::io::BufWriter;

        let (width, height) = self.validate()?;
        let encode = |e: png::EncodingError| ExportError::Encode(e.to_string());

        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_animated(self.frames.len() as u32, 0).map_err(encode)?;
        encoder.set_frame_delay(delay, 100).map_err(encode)?;

        let mut png_writer = encoder.write_header().map_err(encode)?;
        for frame in &self.frames {
            png_writer.write_image_data(frame.pixels()).map_err(encode)?;
        }
        png_writer.finish().map_err(encode)?;

        tracing::debug!(frames = self.frames.len(), width, height, delay, "saved apng");
        Ok(())
    }
}

impl Extend<Frame> for FrameSequence {
    fn extend<I: IntoIterator<Item = Frame>>(&mut self, iter: I) {
        self.frames.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_buffer_size_checked() {
        assert!(Frame::new(2, 2, vec![0; 16]).is_ok());
        assert_eq!(
            Frame::new(2, 2, vec![0; 15]),
            Err(ExportError::InvalidFrame {
                width: 2,
                height: 2,
                len: 15
            })
        );
    }

    #[test]
    fn test_filled_frame() {
        let frame = Frame::filled(3, 2, Color::RED);
        assert_eq!(frame.pixels().len(), 24);
        assert_eq!(frame.pixel(2, 1), Some([255, 0, 0, 255]));
        assert_eq!(frame.pixel(3, 0), None);
    }

    #[test]
    fn test_empty_sequence_has_no_frames() {
        assert_eq!(FrameSequence::new().validate(), Err(ExportError::NoFrames));
    }

    #[test]
    fn test_sequence_size_mismatch() {
        let mut frames = FrameSequence::new();
        frames.push(Frame::filled(4, 4, Color::BLACK));
        frames.push(Frame::filled(4, 4, Color::WHITE));
        assert_eq!(frames.validate(), Ok((4, 4)));

        frames.push(Frame::filled(4, 3, Color::WHITE));
        assert_eq!(
            frames.validate(),
            Err(ExportError::FrameSizeMismatch {
                index: 2,
                expected: (4, 4),
                found: (4, 3),
            })
        );

        frames.clear();
        assert!(frames.is_empty());
    }
}
