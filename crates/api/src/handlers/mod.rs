pub mod assets;
pub mod favourites;
pub mod integrity;
