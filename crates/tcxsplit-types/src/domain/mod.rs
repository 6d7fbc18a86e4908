// Record tree: Session -> Lap -> Track -> Trackpoint.
//
// Every node keeps the raw lines it does not interpret (terminators
// included) so a session can be written back byte for byte. Children are
// owned exclusively; a split moves a tail of children into a new sibling.

mod lap;
mod session;
mod track;
mod trackpoint;

pub use lap::Lap;
pub use session::Session;
pub use track::Track;
pub use trackpoint::Trackpoint;

/// Raw input lines, each with its original line terminator.
pub type TextSpan = Vec<String>;
