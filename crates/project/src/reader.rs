// STD Dependencies -----------------------------------------------------------
use std::env;
use std::fs::File;
use std::io::{self, BufReader, Error as IOError, Read, Write};
use std::path::{Path, PathBuf};


// External Dependencies ------------------------------------------------------
use file_io::{FileError, FileReader, FileWriter};


// Concrete File IO Implementation --------------------------------------------
#[derive(Debug)]
pub struct ProjectReader {
    base: PathBuf
}

impl ProjectReader {

    pub fn from_current_dir() -> Result<Self, FileError> {
        let base = env::current_dir().map_err(|io| FileError {
            io,
            path: PathBuf::from(".")
        })?;
        Ok(Self::from_absolute(base))
    }

    pub fn from_absolute(base: PathBuf) -> Self {
        Self {
            base
        }
    }

    fn read_file_inner(&self, full_path: &Path) -> Result<String, IOError> {
        let mut file = File::open(full_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    fn write_file_inner(&self, path: &Path, text: &str) -> Result<(), IOError> {
        let mut file = File::create(path)?;
        file.write_all(text.as_bytes())?;
        file.flush()
    }

    fn write_stdout_inner(&self, text: &str) -> Result<(), IOError> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        lock.write_all(text.as_bytes())?;
        lock.flush()
    }

}

impl FileReader for ProjectReader {

    fn base_dir(&self) -> &Path {
        &self.base
    }

    fn open_input(&self, path: Option<&Path>) -> Result<Box<dyn Read>, FileError> {
        match path {
            Some(path) if path != Path::new("-") => {
                let path = Self::resolve_path(&self.base, path);
                let file = File::open(&path).map_err(|io| FileError {
                    io,
                    path
                })?;
                Ok(Box::new(BufReader::new(file)))
            },
            _ => Ok(Box::new(BufReader::new(io::stdin())))
        }
    }

    fn read_file(&self, path: &Path) -> Result<(PathBuf, String), FileError> {
        let path = Self::resolve_path(&self.base, path);
        match self.read_file_inner(&path) {
            Ok(text) => Ok((path, text)),
            Err(io) => Err(FileError {
                io,
                path
            })
        }
    }

}

impl FileWriter for ProjectReader {

    fn write_output(&mut self, path: Option<&Path>, text: &str) -> Result<(), FileError> {
        if let Some(path) = path {
            let path = Self::resolve_path(&self.base, path);
            self.write_file_inner(&path, text).map_err(|io| FileError {
                io,
                path
            })

        } else {
            self.write_stdout_inner(text).map_err(|io| FileError {
                io,
                path: PathBuf::from("<stdout>")
            })
        }
    }

}
