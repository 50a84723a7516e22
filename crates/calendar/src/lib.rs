mod completion;
mod month;
mod picker;
mod range;
mod week;

pub use completion::*;
pub use month::*;
pub use picker::*;
pub use range::*;
pub use week::*;
