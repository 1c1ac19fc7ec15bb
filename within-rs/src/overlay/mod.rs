mod get_turns;
mod turn;

#[doc(inline)]
pub use get_turns::get_turns;
#[doc(inline)]
pub use turn::{Method, Operation, SegmentId, Turn, TurnOperation};
