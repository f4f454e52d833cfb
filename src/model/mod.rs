pub mod golfer;
pub mod hole;
pub mod round;
pub mod score;
pub mod sequence;

pub use golfer::*;
pub use hole::*;
pub use round::*;
pub use score::*;
pub use sequence::*;
