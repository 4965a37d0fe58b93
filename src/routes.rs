mod index;
mod ping;

pub use index::*;
pub use ping::*;
