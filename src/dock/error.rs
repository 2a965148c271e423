use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no binding site selected: the target residue set is empty")]
    NoBindingSite,

    #[error("engine invocation error: {details}")]
    EngineInvocation { details: String },

    #[error("unrecognized output format: score table divider not found in engine report")]
    UnrecognizedOutput,

    #[error("corrupt score row: '{line}'")]
    CorruptScoreRow { line: String },

    #[error("ambiguous pose filename '{name}': no pose index digits found")]
    AmbiguousPoseFilename { name: String },

    #[error("pose/score cardinality mismatch: {poses} poses but {scores} score rows")]
    PoseCountMismatch { poses: usize, scores: usize },

    #[error(transparent)]
    Prepare(#[from] crate::ops::Error),

    #[error(transparent)]
    Structure(#[from] crate::io::Error),

    #[error("I/O error during docking run: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn engine(details: impl Into<String>) -> Self {
        Self::EngineInvocation {
            details: details.into(),
        }
    }

    pub fn corrupt_row(line: impl Into<String>) -> Self {
        Self::CorruptScoreRow { line: line.into() }
    }

    pub fn ambiguous_pose(name: impl Into<String>) -> Self {
        Self::AmbiguousPoseFilename { name: name.into() }
    }
}
