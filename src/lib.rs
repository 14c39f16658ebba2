//! Coin Tap: idle gold economy core.
//!
//! The host loop owns an [`economy::Economy`], forwards taps and purchases
//! to it, and feeds it frame deltas so passive income ticks once a second.

pub mod economy;
pub mod time;
