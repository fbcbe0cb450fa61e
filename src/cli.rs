// External Dependencies ------------------------------------------------------
use clap::{Arg, ArgMatches, Command};
use smsgfx::OutputFormat;


// CLI Definition -------------------------------------------------------------
pub fn app() -> Command<'static> {
    Command::new("smstiles")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ivo Wetzel <ivo.wetzel@googlemail.com>")
        .about("Converts indexed bitmap files into Master System tile data")
        .arg(Arg::new("FILE")
            .help("Input bitmap file (if none is provided STDIN is read)")
            .index(1)
        )
        .arg(Arg::new("output")
            .long("output")
            .short('o')
            .takes_value(true)
            .possible_values(["asm", "c"])
            .help("the output type, z80 assembler or C [default: asm]")
        )
        .arg(Arg::new("colors")
            .long("colors")
            .short('c')
            .overrides_with("no-colors")
            .help("output the color table (palette)")
        )
        .arg(Arg::new("no-colors")
            .long("no-colors")
            .overrides_with("colors")
            .help("do not output the color table (palette)")
        )
        .arg(Arg::new("OUTPUT_FILE")
            .long("out-file")
            .short('f')
            .takes_value(true)
            .help("source file to generate instead of writing to STDOUT")
        )
        .arg(Arg::new("config")
            .long("config")
            .takes_value(true)
            .help("configuration file to use instead of the nearest smstiles.toml")
        )
        .arg(Arg::new("silent")
            .long("silent")
            .short('s')
            .help("do not print any status output")
        )
}

/// Output type and palette switch as given on the command line, if at all.
pub fn flags(matches: &ArgMatches) -> (Option<OutputFormat>, Option<bool>) {
    let format = matches.value_of("output").map(|f| {
        f.parse().expect("Clap should not allow invalid output types")
    });
    let colors = if matches.is_present("no-colors") {
        Some(false)

    } else if matches.is_present("colors") {
        Some(true)

    } else {
        None
    };
    (format, colors)
}


// Tests ----------------------------------------------------------------------
#[cfg(test)]
mod test {

    use smsgfx::OutputFormat;
    use super::{app, flags};

    macro_rules! test_flags {
        ($args:expr, $expected:expr) => {
            let matches = app().try_get_matches_from($args).expect("Arguments failed to parse");
            assert_eq!(flags(&matches), $expected);
        }
    }

    #[test]
    fn test_app_is_valid() {
        app().debug_assert();
    }

    #[test]
    fn test_no_flags() {
        test_flags!(vec!["smstiles"], (None, None));
        test_flags!(vec!["smstiles", "tiles.bmp"], (None, None));
    }

    #[test]
    fn test_output_flag() {
        test_flags!(vec!["smstiles", "-o", "c", "tiles.bmp"], (Some(OutputFormat::C), None));
        test_flags!(vec!["smstiles", "--output", "asm"], (Some(OutputFormat::Asm), None));
        assert!(app().try_get_matches_from(vec!["smstiles", "-o", "bin"]).is_err());
    }

    #[test]
    fn test_colors_flags() {
        test_flags!(vec!["smstiles", "--no-colors"], (None, Some(false)));
        test_flags!(vec!["smstiles", "-c"], (None, Some(true)));
        test_flags!(vec!["smstiles", "--colors", "--no-colors"], (None, Some(false)));
        test_flags!(vec!["smstiles", "--no-colors", "--colors"], (None, Some(true)));
    }

    #[test]
    fn test_file_arguments() {
        let matches = app().try_get_matches_from(vec!["smstiles", "-f", "tiles.s", "-s", "sprites.bmp"]).unwrap();
        assert_eq!(matches.value_of("FILE"), Some("sprites.bmp"));
        assert_eq!(matches.value_of("OUTPUT_FILE"), Some("tiles.s"));
        assert!(matches.is_present("silent"));
    }

}
