mod error;
mod pdb;

pub use error::Error;
pub use pdb::reader::{read as read_pdb, read_file as read_pdb_file};
pub use pdb::writer::{write as write_pdb, write_file as write_pdb_file};
