pub mod a001_metadata;
pub mod a002_property;
