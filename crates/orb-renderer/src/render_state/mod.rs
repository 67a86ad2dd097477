mod helpers;
mod state;

pub use helpers::clear_color;
pub use state::RenderState;
