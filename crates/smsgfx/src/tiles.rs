// Internal Dependencies ------------------------------------------------------
use crate::bmp::PixelGrid;


// Constants ------------------------------------------------------------------
pub const TILE_SIZE: usize = 8;


// Types ----------------------------------------------------------------------
/// 8x8 palette indices, addressed as `tile[row][column]`.
pub type Tile = [[u8; TILE_SIZE]; TILE_SIZE];


// Tile Slicer ----------------------------------------------------------------
pub fn tiles_per_row(width: usize) -> usize {
    (width + TILE_SIZE - 1) / TILE_SIZE
}

pub fn tiles_per_column(height: usize) -> usize {
    (height + TILE_SIZE - 1) / TILE_SIZE
}

/// Splits the grid into row-major tiles, edge tiles not covered by the image
/// are left zeroed.
pub fn grid_to_tiles(grid: &PixelGrid) -> Vec<Tile> {
    let row_size = tiles_per_row(grid.width);
    let mut tiles = vec![[[0; TILE_SIZE]; TILE_SIZE]; row_size * tiles_per_column(grid.height)];
    for y in 0..grid.height {
        let (ty, oy) = (y / TILE_SIZE, y % TILE_SIZE);
        for (x, index) in grid.row(y).iter().enumerate() {
            tiles[ty * row_size + x / TILE_SIZE][oy][x % TILE_SIZE] = *index;
        }
    }
    tiles
}
