use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    InvalidAlphabet,
    InvalidFrequency(usize),
    FrequencyOverflow,
    UnableToOpenInputFileForReading(String, std::io::Error),
    FailedToReadInput(std::io::Error),
    FailedToWriteOutput(std::io::Error),
    WorkerTerminated(String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAlphabet => {
                write!(f, "Input does not contain a single symbol to encode")
            }
            Self::InvalidFrequency(frequency) => {
                write!(
                    f,
                    "Frequency {} is invalid, a symbol must occur at least once",
                    frequency
                )
            }
            Self::FrequencyOverflow => {
                write!(f, "Sum of frequencies exceeds {}", usize::MAX)
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::FailedToReadInput(error) => write!(f, "Failed to read input: {}", error),
            Self::FailedToWriteOutput(error) => write!(f, "Failed to write output: {}", error),
            Self::WorkerTerminated(input) => {
                write!(f, "Worker processing '{}' terminated unexpectedly", input)
            }
        }
    }
}

impl std::error::Error for Error {}
