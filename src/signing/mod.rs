//! Inputs for an external typed-data signer.
//!
//! Hashing and ECDSA signing happen outside this crate; this module only
//! flattens signable structs into field maps and packs the resulting
//! signature into its wire shape.

mod payload;

pub use payload::{struct_to_map, to_typed_sig, Signable};
