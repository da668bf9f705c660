/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound (driven) ports are the infrastructure interfaces the
/// application core relies on: manifest discovery, project configuration,
/// license text, formatting, presentation and progress reporting.
pub mod outbound;
