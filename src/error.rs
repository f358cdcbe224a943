/// Errors produced by this crate.
///
/// The rolling and asset paths are deliberately total and never fail; the
/// only fallible edge is naming a die by an arbitrary side count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The side count does not name one of the supported dice.
    #[error("Unsupported die size: d{0}")]
    UnsupportedSides(u16),
}
