/// ProgressReporter port for user feedback during a run
///
/// Implementations write to a side channel (stderr) so the SBOM document on
/// stdout stays clean.
pub trait ProgressReporter {
    /// Reports an informational line
    fn report(&self, message: &str);

    /// Reports progress through the discovered manifests
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a recoverable problem (malformed declaration, skipped manifest)
    fn report_warning(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
