mod identity;
mod manager;
mod route;
mod store;

pub use identity::*;
pub use manager::*;
pub use route::*;
pub use store::*;
