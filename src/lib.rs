#![no_std]

//! `GrowVec`: a growable, contiguous vector that owns its storage.
//!
//! `GrowVec<T>` keeps its elements in a single heap block and tracks the
//! number of live elements (`len`) separately from the number of allocated
//! slots (`capacity`). `len <= capacity` holds at every observable point.
//!
//! # Growth Policy
//!
//! An empty vector owns no storage. The first append allocates one slot, and
//! every append that finds the block full moves the elements into a new block
//! of twice the size. Capacity never shrinks implicitly; `shrink_to_fit()`
//! reallocates to exactly `len`.
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::new();
//! for i in 1..=6 {
//!     vec.push_back(i);
//! }
//! assert_eq!((vec.len(), vec.capacity()), (6, 8));
//!
//! vec.pop_back();
//! vec.pop_back();
//! vec.pop_back();
//! assert_eq!((vec.len(), vec.capacity()), (3, 8));
//!
//! vec.shrink_to_fit();
//! assert_eq!(vec.capacity(), 3);
//! ```
//!
//! `resize()` only shrinks. Asking for a larger size is silently ignored:
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::from([1, 2, 3, 4]);
//! vec.resize(10);
//! assert_eq!(vec.len(), 4);
//! vec.resize(2);
//! assert_eq!(vec.as_slice(), &[1, 2]);
//! ```
//!
//! # Element Capabilities
//!
//! The container itself places no bounds on `T`. Individual operations ask
//! for what they need:
//!
//! - `find()`, `find_in()`: `PartialEq`
//! - `sort()`: `PartialOrd`; `sort_by()`: a predicate
//! - `serialize_to()`: `Display`; `deserialize_from()`: `FromStr`
//! - `clone()`: `Clone`
//!
//! # Search and Sort
//!
//! Searches return the lowest matching index, `None` when nothing matches.
//! Both sorts are bubble sorts with a fixed swap rule: `sort()` swaps a pair
//! when the earlier element is less than the later one (descending result),
//! `sort_by(pred)` swaps when `pred` is false for the pair.
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::from([3, 1, 4, 1, 5]);
//! assert_eq!(vec.find(&1), Some(1));
//! assert_eq!(vec.find_in(2, 5, &1), Some(3));
//! vec.sort();
//! assert_eq!(vec.as_slice(), &[5, 4, 3, 1, 1]);
//! ```
//!
//! # Iteration
//!
//! Besides the standard iterators (all double-ended), `GrowVec` hands out
//! index-based `Cursor`s. A cursor is resolved against the vector on every
//! access, so growing the vector never leaves it dangling.
//!
//! ```
//! # use growvec::GrowVec;
//! let mut vec = GrowVec::from([10, 20, 30]);
//! let mut cursor = vec.end();
//! cursor.backward();
//! vec.push_back(40);
//! assert_eq!(vec.resolve(cursor), Some(&30));
//!
//! let backwards: Vec<_> = vec.iter_rev().copied().collect();
//! assert_eq!(backwards, [40, 30, 20, 10]);
//! ```
//!
//! # Serialization
//!
//! Elements are stored through their textual form: a `u64` little-endian
//! count, then for each element a `u64` little-endian byte length followed by
//! the UTF-8 text produced by `Display`. Decoding parses each text with
//! `FromStr`, so the two must be exact inverses.
//!
//! ```
//! # use growvec::GrowVec;
//! let vec = GrowVec::from([1.5, -2.0, 3.25]);
//! let mut bytes: Vec<u8> = Vec::new();
//! vec.serialize_to(&mut bytes).unwrap();
//!
//! let restored = GrowVec::<f64>::decode_from(&mut bytes.as_slice()).unwrap();
//! assert_eq!(restored, vec);
//! ```
//!
//! The codec works over any `embedded_io::Read`/`Write`. With the `std`
//! feature (on by default), `serialize(path)` and `deserialize(path)` work on
//! files and report a file that cannot be opened as `CodecError::Open`.
//!
//! ## `no_std` Compatibility
//!
//! Without the `std` feature the crate needs only `core` and `alloc`:
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", default-features = false }
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod codec;
mod core;
mod error;
mod iter;
mod raw;
mod search;

// Re-export public types and traits
pub use crate::core::GrowVec;
pub use error::CodecError;
pub use iter::{Cursor, IntoIter, Iter, IterMut};
