//! Project statistics dashboard

pub mod dto;

pub use dto::{sorted_by_count, statistics_transform, Statistic, StatisticEntry};
