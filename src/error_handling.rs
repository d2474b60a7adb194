use std::fmt::Display;
use std::path::{Path, PathBuf};

pub trait ErrorType: Display + PartialEq {}

// Where in a grammar file something went wrong. Line 0 means the error
// belongs to the file as a whole (for example it ended too early)
#[derive(Debug, PartialEq, Clone)]
pub struct Location {
    pub file: PathBuf,
    pub line: usize
}

impl Location {
    pub fn at(file: &Path, line: usize) -> Self {
        Location {
            file: file.to_path_buf(),
            line
        }
    }

    pub fn whole_file(file: &Path) -> Self {
        Location::at(file, 0)
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.file.display())
        } else {
            write!(f, "{}:{}", self.file.display(), self.line)
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Error<T: ErrorType> {
    pub location: Location,
    pub error: T
}

impl<T: ErrorType> Error<T> {
    pub fn new(location: Location, error: T) -> Self {
        Error { location, error }
    }
}

impl<T: ErrorType> Display for Error<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\x1b[31;49;1m[{}]\x1b[39;49;1m  {}\x1b[0m", self.location, self.error)
    }
}

pub type Errors<T> = Vec<Error<T>>;

// Prints every error on its own line of stderr
pub fn report_errors<T: ErrorType>(errors: &Errors<T>) {
    for error in errors {
        eprintln!("{}", error);
    }
    log::info!("{} error(s) reported", errors.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Broken;

    impl ErrorType for Broken {}

    impl Display for Broken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "broken")
        }
    }

    #[test]
    fn display_locations() {
        let path = PathBuf::from("grammars/anbn.txt");

        assert_eq!(Location::at(&path, 4).to_string(), "grammars/anbn.txt:4");
        assert_eq!(Location::whole_file(&path).to_string(), "grammars/anbn.txt");
    }

    #[test]
    fn display_error_contains_location_and_message() {
        let error = Error::new(Location::at(&PathBuf::from("g.txt"), 2), Broken);
        let text = error.to_string();

        assert!(text.contains("[g.txt:2]"));
        assert!(text.contains("broken"));
    }
}
