//! Progress event distribution
//!
//! See [`bus`] for the multicast publish/subscribe channel.

pub mod bus;

pub use bus::{ProgressBus, Subscription};
