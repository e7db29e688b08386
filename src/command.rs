use std::io::{BufRead, Write};

use crate::error::Error;
use crate::huffman::HuffmanTree;

const INSERT_FREQUENCY_COMMAND: &str = "insert_freq";
const PRINT_HEAP_COMMAND: &str = "print_heap";
const BUILD_TREE_COMMAND: &str = "build_tree";
const DECODE_COMMAND: &str = "decode";
const COMMENT_PREFIX: char = '#';

/// One parsed line of a command script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InsertFrequency { symbol: char, frequency: u64 },
    PrintHeap,
    BuildTree,
    Decode { bits: Vec<bool> },
}

/// Parses a single script line. Returns `None` for lines that carry no
/// command: empty lines and lines whose first character is `#`. A line
/// that carries a command but fails to parse yields `Some(Err(..))`.
pub fn parse_line(line: &str) -> Option<crate::Result<Command>> {
    if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
        return None;
    }
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }
    Some(parse_tokens(&tokens))
}

fn parse_tokens(tokens: &[&str]) -> crate::Result<Command> {
    match (tokens[0], tokens.len()) {
        (INSERT_FREQUENCY_COMMAND, 3) => parse_insert_frequency(tokens[1], tokens[2]),
        (PRINT_HEAP_COMMAND, 1) => Ok(Command::PrintHeap),
        (BUILD_TREE_COMMAND, 1) => Ok(Command::BuildTree),
        (DECODE_COMMAND, 2) => parse_decode(tokens[1]),
        _ => Err(Error::UnrecognizedCommand(tokens[0].to_owned())),
    }
}

fn parse_insert_frequency(symbol_token: &str, frequency_token: &str) -> crate::Result<Command> {
    let mut characters = symbol_token.chars();
    let symbol = match (characters.next(), characters.next()) {
        (Some(symbol), None) => symbol,
        _ => return Err(Error::InvalidSymbol(symbol_token.to_owned())),
    };
    let frequency = frequency_token
        .parse::<u64>()
        .map_err(|_| Error::InvalidFrequency(frequency_token.to_owned()))?;
    Ok(Command::InsertFrequency { symbol, frequency })
}

fn parse_decode(bit_token: &str) -> crate::Result<Command> {
    let mut bits = Vec::with_capacity(bit_token.len());
    for character in bit_token.chars() {
        match character {
            '0' => bits.push(false),
            '1' => bits.push(true),
            _ => return Err(Error::InvalidBit(character)),
        }
    }
    Ok(Command::Decode { bits })
}

fn execute<W: Write>(command: Command, tree: &mut HuffmanTree, output: &mut W) -> crate::Result<()> {
    match command {
        Command::InsertFrequency { symbol, frequency } => {
            log::debug!("Inserting symbol '{}' with frequency {}", symbol, frequency);
            tree.insert_frequency(symbol, frequency);
            Ok(())
        }
        Command::PrintHeap => {
            writeln!(output, "{}", tree.heap_listing()).map_err(Error::OutputWrite)
        }
        Command::BuildTree => {
            tree.build();
            log::info!("Huffman tree built");
            Ok(())
        }
        Command::Decode { bits } => {
            let decoded = tree.decode(&bits).map_err(Error::Decode)?;
            log::debug!(
                "Decoded {} symbols from {} bits",
                decoded.chars().count(),
                bits.len()
            );
            writeln!(output, "{}", decoded).map_err(Error::OutputWrite)
        }
    }
}

/// Runs one command session: reads line-oriented commands from `input`
/// and applies them to a fresh tree, writing command results to
/// `output`. A failing command is reported on `output` as a line
/// `Error: <message>` and the session continues with the next line.
/// Only failures of the input or output stream itself abort the
/// session.
pub fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> crate::Result<()> {
    let mut tree = HuffmanTree::new();
    for line in input.lines() {
        let line = line.map_err(Error::ScriptRead)?;
        let parsed = match parse_line(&line) {
            Some(parsed) => parsed,
            None => continue,
        };
        let result = parsed.and_then(|command| execute(command, &mut tree, output));
        if let Err(error) = result {
            match error {
                Error::ScriptRead(_) | Error::OutputWrite(_) => return Err(error),
                recoverable => {
                    log::warn!("Command failed: {}", recoverable);
                    writeln!(output, "Error: {}", recoverable).map_err(Error::OutputWrite)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{parse_line, run_session, Command};
    use crate::error::Error;
    use std::io::Cursor;

    fn parse_command(line: &str) -> Command {
        parse_line(line)
            .expect("Line must carry a command")
            .expect("Command must parse")
    }

    fn parse_error(line: &str) -> Error {
        parse_line(line)
            .expect("Line must carry a command")
            .expect_err("Command must fail to parse")
    }

    fn run(script: &str) -> String {
        let mut output = Vec::new();
        run_session(Cursor::new(script), &mut output).expect("Session must not abort");
        String::from_utf8(output).expect("Output must be valid UTF-8")
    }

    #[test]
    fn parses_insert_frequency() {
        assert_eq!(
            parse_command("insert_freq a 5"),
            Command::InsertFrequency {
                symbol: 'a',
                frequency: 5
            }
        );
    }

    #[test]
    fn parses_insert_frequency_with_surrounding_whitespace() {
        assert_eq!(
            parse_command("  insert_freq \t z   17 "),
            Command::InsertFrequency {
                symbol: 'z',
                frequency: 17
            }
        );
    }

    #[test]
    fn parses_non_ascii_symbols() {
        assert_eq!(
            parse_command("insert_freq é 3"),
            Command::InsertFrequency {
                symbol: 'é',
                frequency: 3
            }
        );
    }

    #[test]
    fn parses_print_heap_and_build_tree() {
        assert_eq!(parse_command("print_heap"), Command::PrintHeap);
        assert_eq!(parse_command("build_tree"), Command::BuildTree);
    }

    #[test]
    fn parses_decode_bits() {
        assert_eq!(
            parse_command("decode 0110"),
            Command::Decode {
                bits: vec![false, true, true, false]
            }
        );
    }

    #[test]
    fn skips_empty_and_comment_lines() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
        assert!(parse_line("# insert_freq a 5").is_none());
    }

    #[test]
    fn comment_marker_must_be_the_first_character_of_the_line() {
        assert!(matches!(
            parse_error(" # not a comment"),
            Error::UnrecognizedCommand(command) if command == "#"
        ));
    }

    #[test]
    fn rejects_multi_character_symbols() {
        assert!(matches!(
            parse_error("insert_freq ab 5"),
            Error::InvalidSymbol(token) if token == "ab"
        ));
    }

    #[test]
    fn rejects_non_numeric_and_negative_frequencies() {
        assert!(matches!(
            parse_error("insert_freq a lots"),
            Error::InvalidFrequency(token) if token == "lots"
        ));
        assert!(matches!(
            parse_error("insert_freq a -3"),
            Error::InvalidFrequency(token) if token == "-3"
        ));
    }

    #[test]
    fn rejects_bit_sequences_with_foreign_characters() {
        assert!(matches!(parse_error("decode 0102"), Error::InvalidBit('2')));
    }

    #[test]
    fn rejects_commands_with_the_wrong_argument_count() {
        assert!(matches!(
            parse_error("insert_freq a"),
            Error::UnrecognizedCommand(command) if command == "insert_freq"
        ));
        assert!(matches!(
            parse_error("print_heap now"),
            Error::UnrecognizedCommand(command) if command == "print_heap"
        ));
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(matches!(
            parse_error("encode 010"),
            Error::UnrecognizedCommand(command) if command == "encode"
        ));
    }

    #[test]
    fn session_builds_and_decodes_a_two_symbol_alphabet() {
        let script = "insert_freq a 1\ninsert_freq b 2\nbuild_tree\ndecode 01\n";
        assert_eq!(run(script), "ab\n");
    }

    #[test]
    fn session_reports_command_errors_and_continues() {
        let script = "decode 0\ninsert_freq a 1\ninsert_freq b 2\nbuild_tree\ndecode 1\n";
        assert_eq!(
            run(script),
            "Error: Cannot decode against an empty tree\nb\n"
        );
    }

    #[test]
    fn session_drains_the_heap_into_the_tree() {
        let script = "insert_freq a 1\ninsert_freq b 2\nprint_heap\nbuild_tree\nprint_heap\n";
        assert_eq!(run(script), "(a:1) (b:2)\nHeap is empty.\n");
    }
}
