//! Ordered map using [left-leaning-red-black][llrb] tree, augmented
//! with sub-tree sizes for order-statistics.
//!
//! Apart from the usual `put`, `get` and `delete`, an [`Llrb`] instance
//! can answer following queries in logarithmic time:
//!
//! * [`min_key`](Llrb::min_key) and [`max_key`](Llrb::max_key).
//! * [`predecessor`](Llrb::predecessor) and [`successor`](Llrb::successor)
//!   of a key.
//! * [`rank`](Llrb::rank), position of a key in sort order.
//! * [`select`](Llrb::select), key at a given position in sort order.
//!
//! ```
//! use llrb_rank::{Error, Llrb};
//!
//! let mut words: Llrb<String, u64> = Llrb::new("words");
//! for word in "to be or not to be".split_whitespace() {
//!     match words.get_mut(word) {
//!         Ok(count) => *count += 1,
//!         Err(_) => {
//!             words.put(word.to_string(), 1);
//!         }
//!     }
//! }
//! assert_eq!(words.len(), 4);
//! assert_eq!(words.get("be"), Ok(&2));
//! assert_eq!(words.select(0).map(|w| w.as_str()), Ok("be"));
//! assert_eq!(words.get("question"), Err(Error::NotFound));
//! ```
//!
//! [llrb]: https://en.wikipedia.org/wiki/Left-leaning_red-black_tree

mod config;
mod depth;
mod error;
mod llrb;

pub use crate::config::{Config, Replace};
pub use crate::depth::Depth;
pub use crate::error::Error;
pub use crate::llrb::{Iter, Llrb, Node, Stats};
