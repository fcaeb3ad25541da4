pub(crate) mod document;
pub(crate) mod line;
pub(crate) mod shading;
