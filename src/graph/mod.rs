pub(crate) mod assemble;
pub(crate) mod grid;
pub(crate) mod inequality;
pub(crate) mod render_data;
pub(crate) mod sampler;
pub(crate) mod segment;
pub(crate) mod shading;
