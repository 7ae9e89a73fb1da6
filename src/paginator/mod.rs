//! Keyset pagination
//!
//! A [`Paginator`] owns one cursor for one sort configuration and page size.
//!
//! # Navigation
//!
//! - `get_page(n)`: absolute, offset window `[n * size, n * size + size)`
//! - `next_page()`: rows strictly after the last row of the current page
//! - `previous_page()`: rows strictly before the first row of the current
//!   page, fetched in reversed order and flipped back
//! - `num_pages()`: `ceil(count / size)` over the logical, filtered set
//!
//! Relative navigation from a fresh cursor falls back to `get_page(0)`.
//! Fetching past either end yields an empty page and leaves the cursor as
//! it was.

mod config;
mod cursor;
mod errors;
mod paginator;

pub use config::{ConfigError, PaginatorConfig};
pub use cursor::Cursor;
pub use errors::{PageError, PageResult};
pub use paginator::Paginator;
