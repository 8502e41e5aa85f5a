//! Grouped feed storage for a social posting bot.
//!
//! The bot treats several related community feeds as one logical unit (a
//! *group*): there is no reason to treat a sketching feed and a doodling feed
//! differently when both carry the same kind of submissions. Each group
//! persists two string sets (its member feed names and a pool of candidate
//! comment texts) inside a shared key-value document store. The architecture
//! keeps a strict separation:
//!
//! - **[`normalize`]**: Pure coercion of loosely-shaped input into flat string
//!   sets. No I/O, fully testable in isolation.
//! - **[`store`]**: The path-addressed [`store::Store`] contract plus the
//!   JSON-file implementation backing the bot's durable state.
//! - **[`group`]**: [`group::GroupStore`], the per-group view that repairs
//!   document shape on bind and round-trips every field access to the store.

pub mod config;
pub mod group;
pub mod logging;
pub mod normalize;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
