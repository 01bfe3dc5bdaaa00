//! Port traits - the seams infrastructure implements.

mod board;

pub use board::{BoardService, DEFAULT_PAGE_SIZE, PageRequest};
