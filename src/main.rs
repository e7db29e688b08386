use std::env::args_os;

use huffman_decoder::{run_decoder, CLIParser};

fn main() {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match run_decoder(&arguments) {
        Ok(_) => log::info!("Session finished"),
        Err(e) => eprintln!("Session failed because of: {}", e),
    }
}
