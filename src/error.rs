use std::fmt::Display;

use crate::huffman::DecodeError;

#[derive(Debug)]
pub enum Error {
    InvalidSymbol(String),
    InvalidFrequency(String),
    InvalidBit(char),
    UnrecognizedCommand(String),
    Decode(DecodeError),
    UnableToOpenScriptFileForReading(String, std::io::Error),
    ScriptRead(std::io::Error),
    OutputWrite(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSymbol(token) => {
                write!(
                    f,
                    "Symbol must be a single character, but got '{}'",
                    token
                )
            }
            Self::InvalidFrequency(token) => {
                write!(
                    f,
                    "Frequency must be a non-negative integer, but got '{}'",
                    token
                )
            }
            Self::InvalidBit(character) => {
                write!(
                    f,
                    "Bit sequences may only contain '0' and '1', but got '{}'",
                    character
                )
            }
            Self::UnrecognizedCommand(command) => {
                write!(f, "Unknown command or malformed arguments: '{}'", command)
            }
            Error::Decode(error) => write!(f, "{}", error),
            Error::UnableToOpenScriptFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open script file '{}' for reading: {}",
                    path, error
                )
            }
            Error::ScriptRead(error) => {
                write!(f, "Failed to read command line from input: {}", error)
            }
            Error::OutputWrite(error) => write!(f, "Failed to write to output: {}", error),
        }
    }
}

impl std::error::Error for Error {}
