use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

pub use cli::CLIParser;
use error::Error;

mod cli;
pub mod command;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    script_file: Option<PathBuf>,
}

fn open_script_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenScriptFileForReading(file_path.display().to_string(), e)
    })
}

pub fn run_decoder(arguments: &Arguments) -> Result<()> {
    let stdout = io::stdout();
    let mut output = stdout.lock();
    match &arguments.script_file {
        Some(path) => {
            log::info!("Reading commands from '{}'", path.display());
            let script_file = open_script_file(path)?;
            command::run_session(BufReader::new(script_file), &mut output)
        }
        None => {
            log::info!("Reading commands from standard input");
            let stdin = io::stdin();
            command::run_session(stdin.lock(), &mut output)
        }
    }
}
