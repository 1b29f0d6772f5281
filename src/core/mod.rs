/// Core functionality modules
///
/// Path matching and jump target selection.

pub mod jumper;
pub mod matcher;

pub use jumper::Jumper;
