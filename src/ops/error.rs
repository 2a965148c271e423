use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed structure: no standard-residue atoms found")]
    MalformedStructure,

    #[error("chain '{chain_id}' has no standard residues")]
    ChainNotFound { chain_id: String },

    #[error("empty binding site: no atoms matched the selected residue numbers")]
    EmptySite,

    #[error(transparent)]
    Io(#[from] crate::io::Error),
}

impl Error {
    pub fn chain_not_found(chain_id: impl Into<String>) -> Self {
        Self::ChainNotFound {
            chain_id: chain_id.into(),
        }
    }
}
