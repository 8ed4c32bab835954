use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CarouselError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("options parse error: {0}")]
    OptionsParse(#[from] toml::de::Error),

    #[error("options serialize error: {0}")]
    OptionsSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, CarouselError>;
