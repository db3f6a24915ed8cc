// src/draft/mod.rs

pub mod assistant;
pub mod barcode;
pub mod countdown;
pub mod document;
pub mod preview;
pub mod session;
pub mod suggestion;
pub mod types;
pub mod visibility;

pub use assistant::*;
pub use barcode::*;
pub use countdown::*;
pub use preview::*;
pub use session::*;
pub use suggestion::*;
pub use types::*;
pub use visibility::*;
