// Recursive-descent parser over a line store.
//
// Each level consumes lines until its own closing marker and hands over to
// the child routine when it meets the child's opening marker. The cursor is
// an explicit index: every routine takes the index of its opening line and
// returns the node together with the index of the first unconsumed line.

mod lines;
mod parser;

pub use lines::LineStore;
pub use parser::Parser;

use tcxsplit_types::{Result, Session, TimePattern};

/// Parse a whole export into a single session.
pub fn parse(text: &str, pattern: &TimePattern) -> Result<Session> {
    let store = LineStore::new(text);
    Parser::new(&store, pattern).parse_session()
}
