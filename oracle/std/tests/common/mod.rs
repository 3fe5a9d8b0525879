mod reference;

pub use reference::*;
