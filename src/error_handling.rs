use std::path::PathBuf;
use std::fmt::Display;

pub trait ErrorType: Display + PartialEq {}

// Where a description came from. An empty path means an in-memory string,
// and line 0 means the whole source rather than a single line.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Location {
    pub fn in_file(file: PathBuf) -> Self {
        Location { file, line: 0 }
    }

    pub fn at_line(&self, line: usize) -> Self {
        Location { file: self.file.clone(), line }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.file.as_os_str().is_empty(), self.line) {
            (true, 0) => write!(f, "<description>"),
            (true, line) => write!(f, "line {}", line),
            (false, 0) => write!(f, "{}", self.file.display()),
            (false, line) => write!(f, "{}:{}", self.file.display(), line),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

#[cfg(test)]
mod tests {
    use std::iter::zip;

    use super::*;

    #[test]
    fn display_locations() {
        let locations = vec![
            Location::default(),
            Location::default().at_line(4),
            Location::in_file(PathBuf::from("example_data/arithmetic.grammar")),
            Location::in_file(PathBuf::from("example_data/arithmetic.grammar")).at_line(7),
        ];
        let answers = vec![
            "<description>",
            "line 4",
            "example_data/arithmetic.grammar",
            "example_data/arithmetic.grammar:7",
        ];

        for (location, answer) in zip(locations, answers) {
            assert_eq!(location.to_string(), answer);
        }
    }
}
