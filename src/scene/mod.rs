pub(crate) mod composition;
pub(crate) mod model;
