use std::{error::Error, fmt};

// basic error type enum to pattern match on
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HelperErrType {
    IoError,
}

impl fmt::Display for HelperErrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            HelperErrType::IoError => String::from("IoError"),
        };

        write!(f, "{}", message)
    }
}

// a basic error for the fs layer, everything above it uses Box<dyn Error>
#[derive(Debug)]
pub struct HelperError {
    err_str: String,
    err_type: HelperErrType,
}

impl HelperError {
    pub fn new(err_type: HelperErrType, err_str: String) -> Self {
        Self { err_type, err_str }
    }

    pub fn from_io_err(io_err: Box<dyn Error>) -> HelperError {
        let err_string = format!("{:?}", io_err);

        let err_type = HelperErrType::IoError;

        HelperError::new(err_type, err_string)
    }

    // this is only used in test at the moment
    #[allow(dead_code)]
    pub fn kind(&self) -> HelperErrType {
        self.err_type
    }
}

impl fmt::Display for HelperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error -- type: {} message: {}",
            self.err_type, self.err_str
        )
    }
}

impl Error for HelperError {}
