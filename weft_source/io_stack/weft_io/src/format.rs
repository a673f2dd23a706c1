use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Binary,
    Json,
    Xml,
    Text,
    Csv,
}

impl DataFormat {
    pub const ALL: [DataFormat; 5] = [
        DataFormat::Binary,
        DataFormat::Json,
        DataFormat::Xml,
        DataFormat::Text,
        DataFormat::Csv,
    ];

    pub fn extension(self) -> &'static str {
        match self {
            DataFormat::Binary => "bin",
            DataFormat::Json => "json",
            DataFormat::Xml => "xml",
            DataFormat::Text => "txt",
            DataFormat::Csv => "csv",
        }
    }

    /// Guess from a file extension, case-insensitively.
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bin" | "dat" => Some(DataFormat::Binary),
            "json" => Some(DataFormat::Json),
            "xml" => Some(DataFormat::Xml),
            "txt" => Some(DataFormat::Text),
            "csv" => Some(DataFormat::Csv),
            _ => None,
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataFormat::Binary => "binary",
            DataFormat::Json => "json",
            DataFormat::Xml => "xml",
            DataFormat::Text => "text",
            DataFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

impl FromStr for DataFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(DataFormat::Binary),
            "json" => Ok(DataFormat::Json),
            "xml" => Ok(DataFormat::Xml),
            "text" | "txt" => Ok(DataFormat::Text),
            "csv" => Ok(DataFormat::Csv),
            other => Err(format!("unknown data format '{other}'")),
        }
    }
}
