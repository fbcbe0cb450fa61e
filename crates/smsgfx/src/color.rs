// Constants ------------------------------------------------------------------
pub const COLORS_PER_CHANNEL: u8 = 4;
pub const PALETTE_SLOTS: usize = 32;
pub const BACKGROUND_SLOTS: usize = 16;


// Types ----------------------------------------------------------------------
pub type QuantizedColor = u8;

/// Raw palette entry as stored in the bitmap, minus the alpha byte.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PaletteEntry {
    pub blue: u8,
    pub green: u8,
    pub red: u8
}

impl PaletteEntry {
    pub fn new(blue: u8, green: u8, red: u8) -> Self {
        Self {
            blue,
            green,
            red
        }
    }
}


// Color Quantizer ------------------------------------------------------------
/// Packs the low two bits of each channel into a `--BBGGRR` hardware color.
pub fn quantize(entry: PaletteEntry) -> QuantizedColor {
    let mask = COLORS_PER_CHANNEL - 1;
    let (b, g, r) = (entry.blue & mask, entry.green & mask, entry.red & mask);
    r + COLORS_PER_CHANNEL * (g + COLORS_PER_CHANNEL * b)
}


// Hardware Palette -----------------------------------------------------------
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HardwarePalette {
    colors: Vec<QuantizedColor>
}

impl HardwarePalette {

    pub fn from_entries(entries: &[PaletteEntry]) -> Self {
        Self {
            colors: entries.iter().take(PALETTE_SLOTS).copied().map(quantize).collect()
        }
    }

    /// Number of slots backed by a source palette entry.
    pub fn defined(&self) -> usize {
        self.colors.len()
    }

    /// Returns `None` for slots past the end of the source palette.
    pub fn slot(&self, index: usize) -> Option<QuantizedColor> {
        self.colors.get(index).copied()
    }

    pub fn slots(&self) -> impl Iterator<Item = (usize, Option<QuantizedColor>)> + '_ {
        (0..PALETTE_SLOTS).map(move |i| (i, self.slot(i)))
    }

}
