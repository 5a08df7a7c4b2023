//! Card identity, placement state, and the asset seam.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`: The 4 × 13 card faces
//! - `CardKey`: Copyable identity
//! - `Card`: Identity plus the `placed` flag and an optional asset
//! - `AssetLookup`: Injected face → resource resolver

pub mod asset;
pub mod card;

pub use asset::{sprite_path, AssetHandle, AssetLookup, NoAssets, SpritePaths};
pub use card::{Card, CardKey, Rank, Suit, UnknownRank};
