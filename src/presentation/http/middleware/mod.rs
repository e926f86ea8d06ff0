mod is_authenticated;

pub use is_authenticated::is_authenticated;
