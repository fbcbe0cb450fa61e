// STD Dependencies -----------------------------------------------------------
use std::fmt;
use std::io::{Error as IOError, Read};
use std::path::{Path, PathBuf};


// External Dependencies ------------------------------------------------------
use colored::Colorize;


// Generic Traits -------------------------------------------------------------
#[derive(Debug)]
pub struct FileError {
    pub io: IOError,
    pub path: PathBuf
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "\"{}\": {}", self.path.display(), self.io)
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.io)
    }
}

/// Status output, kept apart from the generated source on stdout.
pub struct Logger {
    silent: bool,
    output: Vec<String>
}

impl Logger {

    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            silent: false,
            output: Vec::new()
        }
    }

    pub fn format_error<S: Into<String>>(s: S) -> String {
        format!("       {} {}", "Error".bright_red(), s.into())
    }

    pub fn set_silent(&mut self) {
        self.silent = true;
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }

    pub fn warning<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("     {} {}", "Warning".bright_yellow(), s.into()));
        }
    }

    pub fn info<S: Into<String>>(&mut self, s: S) {
        if !self.silent {
            self.output.push(format!("        {} {}", "Info".bright_blue(), s.into()));
        }
    }

    pub fn status<S: Into<String>, U: Into<String>>(&mut self, s: S, m: U) {
        if !self.silent {
            self.output.push(format!("{: >12} {}", s.into().bright_green(), m.into()));
        }
    }

    pub fn flush(&mut self) {
        if !self.output.is_empty() {
            eprintln!("{}", self);
        }
        self.output.clear();
    }

    pub fn error<S: Into<String>>(&mut self, s: S) {
        self.flush();
        eprintln!("{}", s.into());
    }

    /// Buffered lines, oldest first.
    pub fn lines(&self) -> &[String] {
        &self.output
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.output.join("\n"))
    }
}

pub trait FileReader {

    /// Opens `path` for reading, or standard input when no path (or `-`) is given.
    fn open_input(&self, path: Option<&Path>) -> Result<Box<dyn Read>, FileError>;

    fn read_file(&self, path: &Path) -> Result<(PathBuf, String), FileError>;

    fn base_dir(&self) -> &Path;

    fn resolve_path(base: &Path, child: &Path) -> PathBuf {
        if child.is_absolute() {
            child.to_path_buf()

        } else {
            base.join(child)
        }
    }

}

pub trait FileWriter {
    /// Writes `text` to `path`, or standard output when no path is given.
    fn write_output(&mut self, path: Option<&Path>, text: &str) -> Result<(), FileError>;
}


// Tests ----------------------------------------------------------------------
#[cfg(test)]
mod test {

    use std::io::{Error as IOError, ErrorKind};
    use std::path::{Path, PathBuf};
    use super::{FileError, Logger};

    #[test]
    fn test_silent_logger() {
        let mut logger = Logger::new();
        logger.info("Loaded");
        assert_eq!(logger.lines().len(), 1);
        logger.set_silent();
        logger.info("Ignored");
        logger.warning("Ignored");
        logger.status("Converted", "Ignored");
        assert_eq!(logger.lines().len(), 1);
        assert!(logger.is_silent());
    }

    #[test]
    fn test_status_alignment() {
        colored::control::set_override(false);
        let mut logger = Logger::new();
        logger.status("Converted", "4 tile(s)");
        assert_eq!(logger.to_string(), "   Converted 4 tile(s)");
        assert_eq!(Logger::format_error("Oops"), "       Error Oops");
    }

    #[test]
    fn test_file_error_display() {
        let err = FileError {
            io: IOError::new(ErrorKind::NotFound, "No such file"),
            path: PathBuf::from("sprites.bmp")
        };
        assert_eq!(err.to_string(), "\"sprites.bmp\": No such file");
        assert_eq!(err.path, Path::new("sprites.bmp"));
    }

}
