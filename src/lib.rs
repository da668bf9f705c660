//! bower-sbom - SBOM generation tool for Bower projects
//!
//! This library scans the components Bower installed into a project and
//! produces a CycloneDX Software Bill of Materials, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`sbom_generation`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bower_sbom::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create use case with the file system adapters
//! let use_case = GenerateSbomUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//!     LicenseVocabulary::bundled()?,
//! );
//!
//! // Execute
//! let request = SbomRequest::builder().project_path(".").build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = CycloneDxXmlFormatter::new();
//! let output = formatter.format(&response.components, &response.metadata)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        CycloneDxJsonFormatter, CycloneDxXmlFormatter,
    };
    pub use crate::application::dto::{OutputFormat, SbomRequest, SbomResponse};
    pub use crate::application::use_cases::GenerateSbomUseCase;
    pub use crate::ports::outbound::{
        LicenseTextReader, ManifestReader, OutputPresenter, ProgressReporter,
        ProjectConfigReader, SbomFormatter,
    };
    pub use crate::sbom_generation::domain::{
        BowerManifest, Component, ComponentType, ExternalReference, LicenseDeclaration,
        LicenseRecord, LicenseText, LicenseVocabulary, PackageIdentity, PackageUrl,
        ReferenceType, SbomMetadata,
    };
    pub use crate::sbom_generation::policies::{ManifestErrorPolicy, MissingIdentifierPolicy};
    pub use crate::sbom_generation::services::{
        ComponentBuilder, ComponentDeduplicator, IdentifierResolver, LicenseResolver,
        LicenseTextLocator, SbomGenerator,
    };
    pub use crate::shared::Result;
}
