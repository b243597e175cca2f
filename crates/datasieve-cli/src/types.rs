use clap::ValueEnum;
use datasieve_types::ResponseField;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// CLI-facing names for the selectable response fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum FieldArg {
    Alphabets,
    Numbers,
    HighestLowercaseAlphabet,
}

impl FieldArg {
    pub fn into_field(self) -> ResponseField {
        match self {
            FieldArg::Alphabets => ResponseField::Alphabets,
            FieldArg::Numbers => ResponseField::Numbers,
            FieldArg::HighestLowercaseAlphabet => ResponseField::HighestLowercaseAlphabet,
        }
    }
}

impl fmt::Display for FieldArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.into_field().key())
    }
}
