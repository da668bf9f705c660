use crate::shared::Result;
use std::path::Path;

/// ProjectConfigReader port for reading the project's bower configuration
pub trait ProjectConfigReader {
    /// Reads the install directory override from the project's `.bowerrc`
    ///
    /// # Returns
    /// `None` when there is no `.bowerrc` or it sets no `directory`
    ///
    /// # Errors
    /// Returns an error if `.bowerrc` exists but is not valid JSON
    fn read_directory_override(&self, project_path: &Path) -> Result<Option<String>>;
}
