pub mod args;
pub mod cluster;
pub mod documents;
pub mod registry;
pub mod search;
