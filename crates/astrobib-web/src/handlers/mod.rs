pub mod import;
pub mod insight;
pub mod search;
pub mod stats;
