// STD Dependencies -----------------------------------------------------------
use std::io::{self, ErrorKind, Read};


// External Dependencies ------------------------------------------------------
use byteorder::{ReadBytesExt, LE};


// Internal Dependencies ------------------------------------------------------
use crate::color::PaletteEntry;
use crate::error::{ConversionError, FormatError, TruncatedInputError};


// Constants ------------------------------------------------------------------
pub const SIGNATURE: &[u8; 2] = b"BM";
pub const FILE_HEADER_SIZE: usize = 14;
pub const DIB_HEADER_SIZE: u32 = 40;


// Types ----------------------------------------------------------------------
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitmapHeader {
    pub pixel_offset: u32,
    pub dib_size: u32,
    pub width: u32,
    pub height: u32,
    pub bpp: u16,
    pub compression: u32,
    pub palette_size: u32
}

impl BitmapHeader {
    pub fn row_bytes(&self) -> usize {
        row_bytes(self.width as usize, self.bpp)
    }

    pub fn row_padding(&self) -> usize {
        row_padding(self.width as usize, self.bpp)
    }
}

/// Palette indices of a decoded bitmap, row 0 being the top of the image.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PixelGrid {
    pub width: usize,
    pub height: usize,
    pixels: Vec<u8>
}

impl PixelGrid {

    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height]
        }
    }

    /// Takes rows in file order, i.e. the bottom row first.
    pub fn from_bottom_up(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        let pixels = if width == 0 {
            pixels

        } else {
            pixels.chunks(width).rev().flatten().copied().collect()
        };
        Self {
            width,
            height,
            pixels
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        self.pixels[y * self.width + x] = index;
    }

    pub fn row(&self, y: usize) -> &[u8] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    pub fn max_index(&self) -> u8 {
        self.pixels.iter().copied().max().unwrap_or(0)
    }

}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Bitmap {
    pub header: BitmapHeader,
    pub palette: Vec<PaletteEntry>,
    pub pixels: PixelGrid
}


// Bitmap Reader --------------------------------------------------------------
impl Bitmap {

    pub fn read<R: Read>(input: R) -> Result<Self, ConversionError> {
        let mut reader = BitmapReader::new(input);
        let header = read_header(&mut reader)?;

        let mut palette = Vec::with_capacity((header.palette_size as usize).min(256));
        for i in 0..header.palette_size {
            let stage = || format!("palette entry {}", i);
            let blue = reader.field(stage, 1, |r| r.read_u8())?;
            let green = reader.field(stage, 1, |r| r.read_u8())?;
            let red = reader.field(stage, 1, |r| r.read_u8())?;
            reader.skip(stage, 1)?;
            palette.push(PaletteEntry::new(blue, green, red));
        }

        // Some encoders leave a gap between the palette and the pixel data
        let pixel_offset = header.pixel_offset as usize;
        if pixel_offset > reader.offset {
            reader.skip(|| "gap before pixel data".to_string(), pixel_offset - reader.offset)?;
        }

        let pixels = read_pixels(&mut reader, &header)?;
        Ok(Self {
            header,
            palette,
            pixels
        })
    }

}

fn read_header<R: Read>(reader: &mut BitmapReader<R>) -> Result<BitmapHeader, ConversionError> {
    let file_header = || "file header".to_string();
    let dib_header = || "DIB header".to_string();

    let mut signature = [0; 2];
    reader.bytes(file_header, &mut signature)?;
    if &signature != SIGNATURE {
        return Err(FormatError::new(
            "signature",
            format!("expected \"BM\" but found {:?}", String::from_utf8_lossy(&signature))

        ).into());
    }

    // File size and two reserved words
    reader.skip(file_header, 8)?;

    let pixel_offset = reader.field(file_header, 4, |r| r.read_u32::<LE>())?;
    let dib_size = reader.field(dib_header, 4, |r| r.read_u32::<LE>())?;
    if dib_size != DIB_HEADER_SIZE {
        return Err(FormatError::new(
            "DIB header size",
            format!("only the {}-byte BITMAPINFOHEADER is supported (was {})", DIB_HEADER_SIZE, dib_size)

        ).into());
    }

    let width = reader.field(dib_header, 4, |r| r.read_u32::<LE>())?;
    let height = reader.field(dib_header, 4, |r| r.read_i32::<LE>())?;
    if height < 0 {
        return Err(FormatError::new(
            "height",
            format!("top-down bitmaps are not supported (height was {})", height)

        ).into());
    }

    // Color planes, always 1
    reader.skip(dib_header, 2)?;

    let bpp = reader.field(dib_header, 2, |r| r.read_u16::<LE>())?;
    if !matches!(bpp, 1 | 2 | 4 | 8) {
        return Err(FormatError::new(
            "bits per pixel",
            format!("only indexed bitmaps with 1, 2, 4 or 8 bits per pixel are supported (was {})", bpp)

        ).into());
    }

    let compression = reader.field(dib_header, 4, |r| r.read_u32::<LE>())?;
    if compression != 0 {
        return Err(FormatError::new(
            "compression",
            format!("unsupported compression type (was {})", compression)

        ).into());
    }

    // Raw bitmap size, horizontal and vertical resolution
    reader.skip(dib_header, 12)?;

    let palette_size = match reader.field(dib_header, 4, |r| r.read_u32::<LE>())? {
        0 => 1 << bpp,
        size => size
    };

    // Important color count
    reader.skip(dib_header, 4)?;

    Ok(BitmapHeader {
        pixel_offset,
        dib_size,
        width,
        height: height as u32,
        bpp,
        compression,
        palette_size
    })
}

fn read_pixels<R: Read>(reader: &mut BitmapReader<R>, header: &BitmapHeader) -> Result<PixelGrid, ConversionError> {
    let (width, height) = (header.width as usize, header.height as usize);
    let pixels_per_byte = 8 / header.bpp as usize;
    let (row_bytes, padding) = (header.row_bytes(), header.row_padding());

    let mut pixels = Vec::new();
    let mut row = Vec::new();
    for file_row in 0..height {
        reader.row(|| format!("pixel row {}", file_row), &mut row, row_bytes)?;
        pixels.extend((0..width).map(|x| {
            unpack_pixel(row[x / pixels_per_byte], x % pixels_per_byte, header.bpp)
        }));

        // Encoders tend to drop the padding of the very last row
        if file_row + 1 == height {
            reader.skip_available(padding)?;

        } else {
            reader.skip(|| format!("padding of pixel row {}", file_row), padding)?;
        }
    }
    Ok(PixelGrid::from_bottom_up(width, height, pixels))
}


// Pixel Helpers --------------------------------------------------------------
/// Extracts the palette index at `slot` (0 being the leftmost pixel) from a
/// byte holding `8 / bpp` packed indices.
pub fn unpack_pixel(unit: u8, slot: usize, bpp: u16) -> u8 {
    let bpp = bpp as usize;
    let remaining = 8 / bpp - 1 - slot;
    let mask = ((1u16 << bpp) - 1) as u8;
    (unit >> (remaining * bpp)) & mask
}

/// Number of bytes holding the pixels of a single row.
pub fn row_bytes(width: usize, bpp: u16) -> usize {
    (bpp as usize * width + 7) / 8
}

/// Number of bytes padding each row to a multiple of four bytes.
pub fn row_padding(width: usize, bpp: u16) -> usize {
    4 * ((bpp as usize * width + 31) / 32) - row_bytes(width, bpp)
}


// Offset Tracking Reader -----------------------------------------------------
struct BitmapReader<R> {
    inner: R,
    offset: usize
}

impl<R: Read> BitmapReader<R> {

    fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0
        }
    }

    fn field<T, S, F>(&mut self, stage: S, size: usize, read: F) -> Result<T, ConversionError>
        where S: FnOnce() -> String,
              F: FnOnce(&mut R) -> io::Result<T>
    {
        let value = read(&mut self.inner).map_err(|err| self.error(stage, err))?;
        self.offset += size;
        Ok(value)
    }

    fn bytes<S: FnOnce() -> String>(&mut self, stage: S, buffer: &mut [u8]) -> Result<(), ConversionError> {
        let size = buffer.len();
        self.field(stage, size, |r| r.read_exact(buffer))
    }

    fn row<S: FnOnce() -> String>(&mut self, stage: S, buffer: &mut Vec<u8>, len: usize) -> Result<(), ConversionError> {
        buffer.clear();
        (&mut self.inner).take(len as u64).read_to_end(buffer).map_err(ConversionError::Io)?;
        if buffer.len() < len {
            Err(TruncatedInputError::new(stage(), self.offset).into())

        } else {
            self.offset += len;
            Ok(())
        }
    }

    fn skip<S: FnOnce() -> String>(&mut self, stage: S, count: usize) -> Result<(), ConversionError> {
        let skipped = self.skip_available(count)?;
        if skipped < count {
            Err(TruncatedInputError::new(stage(), self.offset).into())

        } else {
            Ok(())
        }
    }

    fn skip_available(&mut self, count: usize) -> Result<usize, ConversionError> {
        let skipped = io::copy(&mut (&mut self.inner).take(count as u64), &mut io::sink()).map_err(|err| {
            ConversionError::Io(err)

        })? as usize;
        self.offset += skipped;
        Ok(skipped)
    }

    fn error<S: FnOnce() -> String>(&self, stage: S, err: io::Error) -> ConversionError {
        if err.kind() == ErrorKind::UnexpectedEof {
            TruncatedInputError::new(stage(), self.offset).into()

        } else {
            ConversionError::Io(err)
        }
    }

}
