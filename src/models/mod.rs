pub mod chat;
pub mod evaluation;
pub mod proxy;

pub use chat::*;
pub use evaluation::*;
pub use proxy::*;
