//! Binary PPM (P6) output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ember_math::{Interval, Vec3};

/// How linear colors are squeezed into [0, 1] before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToneMap {
    /// Clamp each channel independently.
    #[default]
    Clamp,
    /// If any channel exceeds 1, divide the whole pixel by its largest
    /// channel first (keeps hue), then clamp.
    NormalizeMax,
}

/// Convert a linear color to 8-bit RGB: `clamp(c, 0, 1) * 255`, truncated.
pub fn color_to_rgb8(color: Vec3, tone: ToneMap) -> [u8; 3] {
    let color = match tone {
        ToneMap::Clamp => color,
        ToneMap::NormalizeMax => {
            let max = color.max_element();
            if max > 1.0 {
                color * (1.0 / max)
            } else {
                color
            }
        }
    };

    let r = (255.0 * Interval::UNIT.clamp(color.x)) as u8;
    let g = (255.0 * Interval::UNIT.clamp(color.y)) as u8;
    let b = (255.0 * Interval::UNIT.clamp(color.z)) as u8;
    [r, g, b]
}

/// Serialize a row-major pixel buffer as binary PPM.
///
/// Panics if `pixels` does not hold exactly `width * height` entries.
pub fn write_ppm<W: Write>(
    writer: &mut W,
    width: u32,
    height: u32,
    pixels: &[Vec3],
    tone: ToneMap,
) -> io::Result<()> {
    assert_eq!(pixels.len(), (width as usize) * (height as usize));

    write!(writer, "P6\n{} {}\n255\n", width, height)?;
    for color in pixels {
        writer.write_all(&color_to_rgb8(*color, tone))?;
    }
    writer.flush()
}

/// Write a pixel buffer to a PPM file, replacing any existing file.
pub fn save_ppm(
    path: impl AsRef<Path>,
    width: u32,
    height: u32,
    pixels: &[Vec3],
    tone: ToneMap,
) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ppm(&mut writer, width, height, pixels, tone)
}
