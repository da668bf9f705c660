use crate::application::dto::{SbomRequest, SbomResponse};
use crate::ports::outbound::{
    LicenseTextReader, ManifestReader, ProgressReporter, ProjectConfigReader,
};
use crate::sbom_generation::domain::{BowerManifest, LicenseVocabulary};
use crate::sbom_generation::policies::{
    InstallLocations, ManifestErrorPolicy, MissingIdentifierPolicy,
};
use crate::sbom_generation::services::{ComponentBuilder, ComponentDeduplicator, SbomGenerator};
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// GenerateSbomUseCase - Core use case for SBOM generation
///
/// Orchestrates the pipeline: resolve install directories, discover
/// manifests, build one component per manifest, fold duplicates by purl and
/// attach document metadata. Infrastructure is injected through generics.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `PCR` - ProjectConfigReader implementation
/// * `LTR` - LicenseTextReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateSbomUseCase<MR, PCR, LTR, PR> {
    manifest_reader: MR,
    project_config_reader: PCR,
    license_text_reader: LTR,
    progress_reporter: PR,
    vocabulary: LicenseVocabulary,
}

impl<MR, PCR, LTR, PR> GenerateSbomUseCase<MR, PCR, LTR, PR>
where
    MR: ManifestReader,
    PCR: ProjectConfigReader,
    LTR: LicenseTextReader,
    PR: ProgressReporter,
{
    /// Creates a new GenerateSbomUseCase with injected dependencies
    pub fn new(
        manifest_reader: MR,
        project_config_reader: PCR,
        license_text_reader: LTR,
        progress_reporter: PR,
        vocabulary: LicenseVocabulary,
    ) -> Self {
        Self {
            manifest_reader,
            project_config_reader,
            license_text_reader,
            progress_reporter,
            vocabulary,
        }
    }

    /// Executes the SBOM generation use case
    ///
    /// # Errors
    /// Fails if `.bowerrc` is malformed, if an install directory cannot be
    /// searched, or if a manifest fails under `ManifestErrorPolicy::Abort`.
    pub fn execute(&self, request: SbomRequest) -> Result<SbomResponse> {
        // Step 1: Locate manifests in discovery order
        let manifests = self.discover_manifests(&request.project_path)?;

        // Step 2: Build and fold components
        let mut deduplicator = ComponentDeduplicator::new();
        let mut skipped_manifests = Vec::new();
        let mut excluded_packages = Vec::new();
        let builder = ComponentBuilder::new(&self.vocabulary, &self.license_text_reader);

        for (index, manifest_path) in manifests.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                manifests.len(),
                Some(&relative_label(manifest_path, &request.project_path)),
            );

            let Some(manifest) = self.read_manifest(manifest_path, &request)? else {
                skipped_manifests.push(manifest_path.clone());
                continue;
            };

            let package_root = manifest_path.parent().unwrap_or(&request.project_path);
            let outcome = builder.build(&manifest, package_root);
            for diagnostic in &outcome.diagnostics {
                self.progress_reporter.report_warning(diagnostic);
            }

            match outcome.component {
                Some(component) => {
                    self.progress_reporter.report(&component.purl_string());
                    deduplicator.insert(component);
                }
                None => {
                    self.report_excluded(manifest_path, &manifest, &request);
                    excluded_packages.push(manifest_path.clone());
                }
            }
        }

        // Step 3: Attach metadata
        let components = deduplicator.into_components();
        let metadata = SbomGenerator::generate_default_metadata(request.include_serial_number);

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} component(s) from {} manifest(s)",
            components.len(),
            manifests.len()
        ));

        Ok(SbomResponse {
            components,
            metadata,
            skipped_manifests,
            excluded_packages,
        })
    }

    /// Resolves the install directories and lists their manifests
    fn discover_manifests(&self, project_path: &Path) -> Result<Vec<PathBuf>> {
        let directory_override = self
            .project_config_reader
            .read_directory_override(project_path)?;
        let install_dirs = InstallLocations::resolve(directory_override.as_deref());

        self.progress_reporter.report(&format!(
            "📖 Scanning {} in: {}",
            install_dirs.join(", "),
            project_path.display()
        ));

        let mut manifests = Vec::new();
        for install_dir in &install_dirs {
            manifests.extend(
                self.manifest_reader
                    .discover_manifests(&project_path.join(install_dir))?,
            );
        }

        self.progress_reporter
            .report(&format!("✅ Detected {} manifest(s)", manifests.len()));
        Ok(manifests)
    }

    /// Reads one manifest, applying the manifest error policy
    ///
    /// Returns `Ok(None)` for a manifest skipped under `ManifestErrorPolicy::Skip`.
    fn read_manifest(
        &self,
        manifest_path: &Path,
        request: &SbomRequest,
    ) -> Result<Option<BowerManifest>> {
        match self.manifest_reader.read_manifest(manifest_path) {
            Ok(manifest) => Ok(Some(manifest)),
            Err(err) => match request.manifest_errors {
                ManifestErrorPolicy::Abort => Err(err),
                ManifestErrorPolicy::Skip => {
                    self.progress_reporter.report_warning(&format!(
                        "Skipping manifest {}: {}",
                        manifest_path.display(),
                        failure_details(&err)
                    ));
                    Ok(None)
                }
            },
        }
    }

    fn report_excluded(
        &self,
        manifest_path: &Path,
        manifest: &BowerManifest,
        request: &SbomRequest,
    ) {
        if request.missing_identifier == MissingIdentifierPolicy::Warn {
            self.progress_reporter.report_warning(&format!(
                "No package identifier for {} ({}). Excluding it",
                manifest.display_label(),
                manifest_path.display()
            ));
        }
    }
}

fn relative_label(manifest_path: &Path, project_path: &Path) -> String {
    manifest_path
        .strip_prefix(project_path)
        .unwrap_or(manifest_path)
        .display()
        .to_string()
}

/// One-line cause of a manifest failure, without the hint text
fn failure_details(err: &anyhow::Error) -> String {
    match err.downcast_ref::<SbomError>() {
        Some(SbomError::ManifestParseError { details, .. })
        | Some(SbomError::FileReadError { details, .. }) => details.clone(),
        _ => err.to_string(),
    }
}
