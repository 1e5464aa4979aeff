mod enums;
mod order;
mod primitives;
mod wire;

// Re-export all types
pub use enums::*;
pub use order::*;
pub use primitives::*;
pub use wire::*;
