// Internal Dependencies ------------------------------------------------------
use crate::tiles::{Tile, TILE_SIZE};


// Constants ------------------------------------------------------------------
pub const PLANES: usize = 4;
pub const TILE_BYTES: usize = PLANES * TILE_SIZE;


// Bitplane Packer ------------------------------------------------------------
/// Collects bit `plane` of every pixel in `row`, leftmost pixel in the high bit.
pub fn pack_row(row: &[u8; TILE_SIZE], plane: usize) -> u8 {
    let mut byte = 0;
    for (x, index) in row.iter().enumerate() {
        if (index >> plane) & 1 == 1 {
            byte |= 1 << (7 - x);
        }
    }
    byte
}

/// The four plane bytes of every row, rows first: `r0p0 r0p1 r0p2 r0p3 r1p0 ...`
pub fn pack_tile(tile: &Tile) -> [u8; TILE_BYTES] {
    let mut bytes = [0; TILE_BYTES];
    for (y, row) in tile.iter().enumerate() {
        for plane in 0..PLANES {
            bytes[y * PLANES + plane] = pack_row(row, plane);
        }
    }
    bytes
}
