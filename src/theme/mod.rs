pub(crate) mod mapping;
pub(crate) mod palette;
pub(crate) mod resolver;
