pub mod filter;
pub mod paging;
pub mod validation;
