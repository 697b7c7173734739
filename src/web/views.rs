mod index;
mod predict;

pub use self::index::get_index;
pub use self::predict::post_predict;
