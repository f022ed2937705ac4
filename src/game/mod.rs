//! The spelling game, independent of any particular front-end

mod round;
mod session;

pub use round::{Outcome, Round, RoundState};
pub use session::{Hint, Session};
