pub(crate) mod batch;
pub(crate) mod bbox;
pub(crate) mod svg;
