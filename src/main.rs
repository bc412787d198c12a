use std::env::args_os;
use std::process::ExitCode;

use huffman_coder::{print_huffman_codes, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match print_huffman_codes(&arguments) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Encoding failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
