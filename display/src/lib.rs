pub mod markup;
pub mod pages;
pub mod state;
pub mod view;

pub use markup::*;
pub use state::*;
pub use view::*;
