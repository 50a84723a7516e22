mod answers;
mod insights;
mod measurements;
mod selection;
mod session;
mod step;
mod targets;

pub use answers::*;
pub use insights::*;
pub use measurements::*;
pub use selection::*;
pub use session::*;
pub use step::*;
pub use targets::*;
