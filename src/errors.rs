use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreeError {
    /// Strict single-tree mode found more than one unattached top-level
    /// group after linkage.
    #[error("tree construction failed: {count} disconnected top-level groups ({keys:?})")]
    MultipleRoots { count: usize, keys: Vec<String> },
}

pub type TreeResult<T> = Result<T, TreeError>;
