mod rotate;
mod translate;

pub use rotate::{rotate_list, rotate_quads, rotate_quads_xyz};
pub use translate::{snap_quads, snap_translate, translate_quads};
