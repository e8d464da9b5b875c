use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{MiniRulesError, Result};

/// A struct that returns [`Sample`].
/// Using this struct, one can read a delimited text file to [`Sample`].
/// # Example
/// ```no_run
/// use minirules::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .read()
///     .unwrap();
/// ```
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    separator: u8,
}

impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self {
            file: None,
            has_header: true,
            separator: b',',
        }
    }
}

impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `true.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }

    /// Set the field separator. Default is `b','`.
    pub fn separator(mut self, separator: u8) -> Self {
        self.separator = separator;
        self
    }
}

impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }

    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or_else(|| MiniRulesError::Config(
            "The file name is not set. Use `SampleReader::file`.".into()
        ))?;
        Sample::from_delimited(file, self.has_header, self.separator)
    }
}
