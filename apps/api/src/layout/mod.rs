// Guide layout: text wrapping, the page canvas model and the page compositor.
// Everything here is pure and CPU-bound; PDF serialization lives in `render`.

pub mod canvas;
pub mod compositor;
pub mod wrap;

pub use compositor::compose;
