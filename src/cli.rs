use crate::huffman::format::TreeFormat;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgAction, ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;
use std::{io, thread};

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_files_argument(command);
        let command = Self::register_threads_argument(command);
        let command = Self::register_tree_format_argument(command);
        Self::register_no_codes_argument(command)
    }

    fn register_input_files_argument(command: Command) -> Command {
        command.arg(Self::create_input_files_argument())
    }

    fn register_threads_argument(command: Command) -> Command {
        command.arg(Self::create_threads_argument())
    }

    fn register_tree_format_argument(command: Command) -> Command {
        command.arg(Self::create_tree_format_argument())
    }

    fn register_no_codes_argument(command: Command) -> Command {
        command.arg(Self::create_no_codes_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_files_argument() -> Arg {
        Arg::new("input_files")
            .help("Paths to UTF-8 text files, standard input is read if none are given")
            .value_parser(value_parser!(PathBuf))
            .action(ArgAction::Append)
            .num_args(0..)
    }

    fn create_threads_argument() -> Arg {
        arg!(-t --threads <THREADS> "Number of input files encoded in parallel")
            .default_value(get_number_of_threads().unwrap_or(1).to_string())
            .required(false)
            .value_parser(value_parser!(usize))
    }

    fn create_tree_format_argument() -> Arg {
        arg!(tree_format: -f --format <FORMAT> "Rendering of the Huffman tree")
            .default_value("canonical")
            .value_parser(value_parser!(TreeFormat))
    }

    fn create_no_codes_argument() -> Arg {
        arg!(no_codes: --no_codes "Do not print the code of each symbol")
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_files: Self::extract_input_files_argument(matches),
            number_of_threads: Self::extract_threads_argument(matches),
            tree_format: Self::extract_tree_format_argument(matches),
            print_codes: !Self::extract_no_codes_argument(matches),
        }
    }

    fn extract_input_files_argument(matches: &ArgMatches) -> Vec<PathBuf> {
        matches
            .get_many::<PathBuf>("input_files")
            .map(|paths| paths.cloned().collect())
            .unwrap_or_default()
    }

    fn extract_threads_argument(matches: &ArgMatches) -> usize {
        matches
            .get_one::<usize>("threads")
            .expect("Required argument threads not provided")
            .to_owned()
    }

    fn extract_tree_format_argument(matches: &ArgMatches) -> TreeFormat {
        matches
            .get_one::<TreeFormat>("tree_format")
            .expect("Tree format must be provided, but was unset.")
            .to_owned()
    }

    fn extract_no_codes_argument(matches: &ArgMatches) -> bool {
        matches.get_flag("no_codes")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

fn get_number_of_threads() -> io::Result<usize> {
    Ok(thread::available_parallelism()?.get())
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, TreeFormat};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_input_files_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches =
            command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "first.txt", "second.txt"]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        assert_eq!(input_files.len(), 2);
        assert_eq!(input_files[0].file_name().unwrap(), "first.txt");
        assert_eq!(input_files[1].file_name().unwrap(), "second.txt");
    }

    #[test]
    fn parse_missing_input_files_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_input_files_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT]);
        let input_files = CLIParser::extract_input_files_argument(&matches);
        assert!(input_files.is_empty());
    }

    #[test]
    fn parse_number_of_threads_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_threads_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--threads", "5"]);
        let actual = CLIParser::extract_threads_argument(&matches);
        let expected = 5;
        assert_eq!(actual, expected);
    }

    #[test]
    fn parse_tree_format_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tree_format_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--format", "diagram"]);
        let actual = CLIParser::extract_tree_format_argument(&matches);
        assert_eq!(actual, TreeFormat::Diagram);
    }

    #[test]
    fn parse_tree_format_illegal_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_tree_format_argument(command);
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-f", "ascii"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for tree format not detected");
        }
    }

    #[test]
    fn parse_no_codes_argument() {
        let command = Command::new("test");
        let command = CLIParser::register_no_codes_argument(command);
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--no_codes"]);
        assert!(CLIParser::extract_no_codes_argument(&matches));
    }

    #[test]
    fn parse_defaults() {
        let input_file_name = "input.txt";
        let input_file_path = format!("/input_directory/{}", input_file_name);
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![PROGRAM_NAME_ARGUMENT, &input_file_path, "-t", "8"]);
        assert_eq!(
            arguments.input_files[0].file_name().unwrap(),
            input_file_name,
            "input file does not match"
        );
        assert_eq!(
            arguments.tree_format,
            TreeFormat::Canonical,
            "tree_format does not match"
        );
        assert!(arguments.print_codes, "print_codes does not match");
        assert_eq!(
            arguments.number_of_threads, 8,
            "number_of_threads does not match"
        );
    }
}
