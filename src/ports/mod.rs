/// Ports module defining interfaces for hexagonal architecture
///
/// The export use case only drives infrastructure, so every port here is
/// an outbound (driven) port.
pub mod outbound;
