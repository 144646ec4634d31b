use std::{error::Error, fmt, io};

use motion::ConfigError;

#[derive(Debug)]
pub enum ReplayError
{
    Usage,
    Io(io::Error),
    Csv(csv::Error),
    Config(ConfigError),
    MalformedRecord { line: u64, columns: usize },
}

impl Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "Expected CSV file to read samples from"),
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::Csv(err) => write!(f, "CSV error: {}", err),
            Self::Config(err) => write!(f, "Invalid engine configuration: {}", err),
            Self::MalformedRecord { line, columns } => write!(
                f,
                "Line {}: expected 7 columns (time,acc_x,acc_y,acc_z,gyro_x,gyro_y,gyro_z), got {}",
                line, columns
            ),
        }
    }
}

impl From<io::Error> for ReplayError
{
    fn from(err: io::Error) -> Self {
        ReplayError::Io(err)
    }
}

impl From<csv::Error> for ReplayError
{
    fn from(err: csv::Error) -> Self {
        ReplayError::Csv(err)
    }
}

impl From<ConfigError> for ReplayError
{
    fn from(err: ConfigError) -> Self {
        ReplayError::Config(err)
    }
}
