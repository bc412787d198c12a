use std::{
    fs::File,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    sync::mpsc,
};

use threadpool::ThreadPool;

pub use cli::CLIParser;
pub use error::Error;
pub use huffman::{
    code::{Code, CodeTable},
    encoder::HuffmanEncoder,
    format::{format_tree, TreeFormat},
    frequency::FrequencyTable,
    node::HuffmanNode,
    symbols::SymbolReader,
    tree::HuffmanTree,
    Symbol,
};

mod cli;
mod error;
pub mod huffman;
mod logger;

pub type Result<T> = std::result::Result<T, error::Error>;

const STANDARD_INPUT_NAME: &str = "<stdin>";

pub struct Arguments {
    input_files: Vec<PathBuf>,
    number_of_threads: usize,
    tree_format: TreeFormat,
    print_codes: bool,
}

#[derive(Clone, Copy)]
struct ReportOptions {
    tree_format: TreeFormat,
    print_codes: bool,
}

impl From<&Arguments> for ReportOptions {
    fn from(arguments: &Arguments) -> Self {
        Self {
            tree_format: arguments.tree_format,
            print_codes: arguments.print_codes,
        }
    }
}

fn open_input_file(file_path: &Path) -> Result<File> {
    File::open(file_path).map_err(|e| {
        Error::UnableToOpenInputFileForReading(file_path.to_string_lossy().into_owned(), e)
    })
}

fn describe_input<R: Read>(name: &str, reader: R, options: ReportOptions) -> Result<String> {
    let (frequencies, tree) = HuffmanEncoder::new().encode_reader_with_frequencies(reader)?;
    log::info!(
        "Encoded '{}': {} symbols, {} distinct",
        name,
        frequencies.total(),
        frequencies.len()
    );

    let mut report = format!("== {} ==\n", name);
    report.push_str(&options.tree_format.render(&tree));
    if options.print_codes {
        let codes = CodeTable::new(&tree);
        report.push_str(&codes.to_string());
        report.push_str(&format!(
            "{} bits for {} symbols\n",
            codes.weighted_length(&frequencies),
            frequencies.total()
        ));
    }
    Ok(report)
}

fn describe_file(file_path: &Path, options: ReportOptions) -> Result<String> {
    let input_file = open_input_file(file_path)?;
    describe_input(&file_path.display().to_string(), input_file, options)
}

fn describe_files(arguments: &Arguments) -> Result<Vec<String>> {
    let options = ReportOptions::from(arguments);
    let threadpool = ThreadPool::new(arguments.number_of_threads.max(1));
    let (sender, receiver) = mpsc::channel();
    for (index, file_path) in arguments.input_files.iter().cloned().enumerate() {
        let sender = sender.clone();
        threadpool.execute(move || {
            let report = describe_file(&file_path, options);
            if sender.send((index, report)).is_err() {
                log::warn!("Report for input {} was discarded", index);
            }
        });
    }
    drop(sender);

    let mut reports: Vec<Option<Result<String>>> =
        arguments.input_files.iter().map(|_| None).collect();
    for (index, report) in receiver {
        reports[index] = Some(report);
    }
    reports
        .into_iter()
        .zip(&arguments.input_files)
        .map(|(report, file_path)| {
            report.unwrap_or_else(|| {
                Err(Error::WorkerTerminated(file_path.display().to_string()))
            })
        })
        .collect()
}

/// Builds one report per input: the rendered tree followed by the code table.
///
/// Without input files the report is built from standard input.
pub fn build_reports(arguments: &Arguments) -> Result<Vec<String>> {
    if arguments.input_files.is_empty() {
        let report = describe_input(
            STANDARD_INPUT_NAME,
            io::stdin().lock(),
            ReportOptions::from(arguments),
        )?;
        return Ok(vec![report]);
    }
    describe_files(arguments)
}

pub fn print_huffman_codes(arguments: &Arguments) -> Result<()> {
    let reports = build_reports(arguments)?;
    let mut output = io::stdout().lock();
    for report in reports {
        output
            .write_all(report.as_bytes())
            .map_err(Error::FailedToWriteOutput)?;
    }
    output.flush().map_err(Error::FailedToWriteOutput)
}
