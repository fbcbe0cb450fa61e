// STD Dependencies -----------------------------------------------------------
use std::path::Path;
use std::process;


// External Dependencies ------------------------------------------------------
use file_io::{FileReader, FileWriter, Logger};
use project::{ProjectConfig, ProjectReader};
use smsgfx::{ConversionError, Options};
use smsgfx::color::PALETTE_SLOTS;


// Modules --------------------------------------------------------------------
mod cli;


// CLI Interface --------------------------------------------------------------
fn main() {
    let mut logger = Logger::new();
    let matches = cli::app().get_matches();

    // Support Silent Flag
    if matches.is_present("silent") {
        logger.set_silent();
    }

    let mut reader = match ProjectReader::from_current_dir() {
        Ok(reader) => reader,
        Err(err) => fail(&mut logger, 2, format!("Failed to determine working directory {}", err))
    };

    // Configuration
    let config = if let Some(path) = matches.value_of("config") {
        ProjectConfig::load(&mut logger, &reader, Path::new(path))

    } else {
        ProjectConfig::discover(&mut logger, &reader)
    };
    let (format, colors) = cli::flags(&matches);
    let options = match config.and_then(|config| config.options(format, colors)) {
        Ok(options) => options,
        Err(err) => fail(&mut logger, 3, err.to_string())
    };

    // Conversion
    let input_file = matches.value_of("FILE").map(Path::new);
    let text = match convert(&mut logger, &reader, input_file, &options) {
        Ok(text) => text,
        Err((code, message)) => fail(&mut logger, code, message)
    };

    // Output
    let output_file = matches.value_of("OUTPUT_FILE").map(Path::new);
    if let Err(err) = reader.write_output(output_file, &text) {
        fail(&mut logger, 2, format!("Failed to write tile data to {}", err));
    }
    logger.flush();
}

fn convert(
    logger: &mut Logger,
    reader: &ProjectReader,
    input_file: Option<&Path>,
    options: &Options

) -> Result<String, (i32, String)> {
    let input = reader.open_input(input_file).map_err(|err| {
        (2, format!("Failed to open bitmap file {}", err))
    })?;

    let conversion = smsgfx::convert(input, options).map_err(|err| match err {
        ConversionError::Io(_) => (2, err.to_string()),
        err => (1, format!("Failed to convert bitmap: {}", err))
    })?;

    let header = &conversion.header;
    logger.info(format!(
        "Decoded {}x{} bitmap, {} bpp, {} color(s)",
        header.width,
        header.height,
        header.bpp,
        conversion.palette_entries
    ));
    if conversion.palette_entries > PALETTE_SLOTS {
        logger.warning(format!(
            "Palette has {} entries, only the first {} are used",
            conversion.palette_entries,
            PALETTE_SLOTS
        ));
    }
    if conversion.max_index > 15 {
        logger.warning(format!(
            "Pixel index {} exceeds the 16 colors of a tile, only its lower 4 bits are used",
            conversion.max_index
        ));
    }
    logger.status("Converted", format!("{} tile(s)", conversion.tiles.len()));
    Ok(conversion.text)
}

fn fail(logger: &mut Logger, code: i32, message: String) -> ! {
    logger.error(Logger::format_error(message));
    process::exit(code)
}
