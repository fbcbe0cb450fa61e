// Modules --------------------------------------------------------------------
pub mod bmp;
pub mod color;
pub mod emit;
pub mod error;
pub mod planes;
pub mod tiles;
#[cfg(test)] mod mocks;


// STD Dependencies -----------------------------------------------------------
use std::io::Read;


// Internal Dependencies ------------------------------------------------------
pub use self::bmp::{Bitmap, BitmapHeader};
pub use self::color::HardwarePalette;
pub use self::emit::OutputFormat;
pub use self::error::{ConversionError, FormatError, TruncatedInputError};
use self::planes::TILE_BYTES;


// Conversion -----------------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Options {
    pub format: OutputFormat,
    pub colors: bool
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: OutputFormat::Asm,
            colors: true
        }
    }
}

#[derive(Debug)]
pub struct Conversion {
    pub header: BitmapHeader,
    pub palette_entries: usize,
    pub tiles: Vec<[u8; TILE_BYTES]>,
    pub max_index: u8,
    pub text: String
}

/// Decodes a bitmap from `input` and renders its tiles and palette.
pub fn convert<R: Read>(input: R, options: &Options) -> Result<Conversion, ConversionError> {
    let bitmap = Bitmap::read(input)?;
    let palette = HardwarePalette::from_entries(&bitmap.palette);
    let tiles: Vec<[u8; TILE_BYTES]> = tiles::grid_to_tiles(&bitmap.pixels).iter().map(planes::pack_tile).collect();
    let text = emit::render(options.format, &tiles, &palette, options.colors);
    Ok(Conversion {
        palette_entries: bitmap.palette.len(),
        max_index: bitmap.pixels.max_index(),
        header: bitmap.header,
        tiles,
        text
    })
}
