pub mod online_search;
pub mod youtube;
