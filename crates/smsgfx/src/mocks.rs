// Internal Dependencies ------------------------------------------------------
use crate::bmp::{row_padding, DIB_HEADER_SIZE, FILE_HEADER_SIZE, SIGNATURE};
use crate::color::PaletteEntry;


// Synthetic Bitmap Files -----------------------------------------------------
pub struct BitmapBuilder {
    signature: [u8; 2],
    dib_size: u32,
    bpp: u16,
    bpp_field: u16,
    height: Option<i32>,
    compression: u32,
    palette: Vec<PaletteEntry>,
    palette_count: Option<u32>,
    gap: usize,
    rows: Vec<Vec<u8>>
}

impl BitmapBuilder {

    /// `rows` are given top to bottom as palette indices.
    pub fn new(bpp: u16, rows: Vec<Vec<u8>>) -> Self {
        Self {
            signature: *SIGNATURE,
            dib_size: DIB_HEADER_SIZE,
            bpp,
            bpp_field: bpp,
            height: None,
            compression: 0,
            palette: Vec::new(),
            palette_count: None,
            gap: 0,
            rows
        }
    }

    pub fn signature(mut self, signature: &[u8; 2]) -> Self {
        self.signature = *signature;
        self
    }

    pub fn dib_size(mut self, size: u32) -> Self {
        self.dib_size = size;
        self
    }

    pub fn bpp_field(mut self, bpp: u16) -> Self {
        self.bpp_field = bpp;
        self
    }

    pub fn height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn compression(mut self, compression: u32) -> Self {
        self.compression = compression;
        self
    }

    pub fn palette(mut self, palette: Vec<PaletteEntry>) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette_count(mut self, count: u32) -> Self {
        self.palette_count = Some(count);
        self
    }

    pub fn gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let width = self.rows.first().map(|r| r.len()).unwrap_or(0);
        let height = self.height.unwrap_or(self.rows.len() as i32);
        let pixel_offset = FILE_HEADER_SIZE + DIB_HEADER_SIZE as usize + self.palette.len() * 4 + self.gap;

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.signature);
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        bytes.extend_from_slice(&(pixel_offset as u32).to_le_bytes());
        bytes.extend_from_slice(&self.dib_size.to_le_bytes());
        bytes.extend_from_slice(&(width as u32).to_le_bytes());
        bytes.extend_from_slice(&height.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&self.bpp_field.to_le_bytes());
        bytes.extend_from_slice(&self.compression.to_le_bytes());
        bytes.extend_from_slice(&[0; 12]);
        bytes.extend_from_slice(&self.palette_count.unwrap_or(self.palette.len() as u32).to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        for entry in &self.palette {
            bytes.extend_from_slice(&[entry.blue, entry.green, entry.red, 0xFF]);
        }
        bytes.extend(std::iter::repeat(0).take(self.gap));

        let padding = row_padding(width, self.bpp);
        for row in self.rows.iter().rev() {
            bytes.append(&mut pack_row(row, self.bpp));
            bytes.extend(std::iter::repeat(0).take(padding));
        }
        bytes
    }

}

pub fn pack_row(indices: &[u8], bpp: u16) -> Vec<u8> {
    let bpp = bpp as usize;
    let pixels_per_byte = 8 / bpp;
    let mut bytes = vec![0; (indices.len() * bpp + 7) / 8];
    for (x, index) in indices.iter().enumerate() {
        let shift = (pixels_per_byte - 1 - x % pixels_per_byte) * bpp;
        bytes[x / pixels_per_byte] |= index << shift;
    }
    bytes
}

/// Entries whose channels all equal their own index.
pub fn gray_palette(len: usize) -> Vec<PaletteEntry> {
    (0..len).map(|i| PaletteEntry::new(i as u8, i as u8, i as u8)).collect()
}
