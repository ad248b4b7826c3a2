pub mod loader;
pub mod map_view;
pub mod pagination;
pub mod story_list;
