/// Result alias used throughout the crate; errors are carried as `anyhow::Error`
/// so domain errors (`SbomError`) and I/O context compose with `?`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
