// STD Dependencies -----------------------------------------------------------
use std::fmt::Write;
use std::str::FromStr;


// Internal Dependencies ------------------------------------------------------
use crate::color::{HardwarePalette, BACKGROUND_SLOTS};
use crate::planes::{PLANES, TILE_BYTES};


// Output Formats -------------------------------------------------------------
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OutputFormat {
    Asm,
    C
}

impl FromStr for OutputFormat {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asm" => Ok(OutputFormat::Asm),
            "c" => Ok(OutputFormat::C),
            _ => Err(format!("Unknown output type \"{}\", expected \"asm\" or \"c\"", s))
        }
    }
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Asm
    }
}


// Emitters -------------------------------------------------------------------
pub fn render(format: OutputFormat, tiles: &[[u8; TILE_BYTES]], palette: &HardwarePalette, colors: bool) -> String {
    let mut text = String::new();
    match format {
        OutputFormat::Asm => {
            if colors {
                render_asm_palette(&mut text, palette);
            }
            render_asm_tiles(&mut text, tiles);
        },
        OutputFormat::C => {
            if colors {
                render_c_palette(&mut text, palette);
            }
            render_c_tiles(&mut text, tiles);
        }
    }
    text
}

// Writing into a String cannot fail
fn render_asm_palette(text: &mut String, palette: &HardwarePalette) {
    text.push_str("; palette\n");
    for (i, color) in palette.slots() {
        if let Some(color) = color {
            writeln!(text, ".db ${:02x}; color {:02x}", color, i).ok();

        } else {
            writeln!(text, ".db $00; color {:02x} (undefined)", i).ok();
        }
    }
    text.push('\n');
}

fn render_asm_tiles(text: &mut String, tiles: &[[u8; TILE_BYTES]]) {
    for (i, tile) in tiles.iter().enumerate() {
        writeln!(text, "; tile {}", i).ok();
        for row in tile.chunks(PLANES) {
            let bytes: Vec<String> = row.iter().map(|b| format!("${:02x}", b)).collect();
            writeln!(text, ".db {}", bytes.join(",")).ok();
        }
    }
}

fn render_c_palette(text: &mut String, palette: &HardwarePalette) {
    let colors: Vec<String> = palette.slots().map(|(_, color)| {
        format!("0x{:02x}", color.unwrap_or(0))

    }).collect();
    let (bg_colors, sprite_colors) = colors.split_at(BACKGROUND_SLOTS);
    writeln!(text, "const unsigned char bg_colors[] = {{\n  {}\n}};", bg_colors.join(", ")).ok();
    writeln!(text, "const unsigned char sprite_colors[] = {{\n  {}\n}};", sprite_colors.join(", ")).ok();
    text.push('\n');
}

fn render_c_tiles(text: &mut String, tiles: &[[u8; TILE_BYTES]]) {
    let tiles: Vec<String> = tiles.iter().map(|tile| {
        let bytes: Vec<String> = tile.iter().map(|b| format!("0x{:02x}", b)).collect();
        format!("  {{ {} }}", bytes.join(", "))

    }).collect();
    writeln!(text, "const unsigned char all_tiles[][{}] = {{", TILE_BYTES).ok();
    writeln!(text, "{}", tiles.join(",\n")).ok();
    text.push_str("};\n");
}
