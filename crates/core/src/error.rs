use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The sub process exiting with non-success code.")]
    SubProcessExit,

    #[error("Error with sub process process: {}", _0)]
    SubProcess(#[from] std::io::Error),

    #[error("The command to launch is empty.")]
    EmptyCommand,

    #[error("Could not start the menu program `{}`: {}", .program, .original)]
    SelectorUnavailable {
        program: String,
        original: std::io::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Json {
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("The catalog file at `{}` is not valid UTF-8 text.", .path)]
    MalformedCatalog { path: String },

    #[error("Invalid entry name: name may not be empty")]
    EmptyEntryName,

    #[error("Invalid entry name `{}`: name may not contain a line break", .0)]
    EntryNameWithNewline(String),

    #[error("Found a non-unique entry name: `{}`", .0)]
    NonUniqueEntryName(String),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn json_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_json::Error,
    ) -> Self {
        Self::Json {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn selector_unavailable(program: String, original: std::io::Error) -> Self {
        Self::SelectorUnavailable { program, original }
    }
}
