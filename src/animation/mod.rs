pub(crate) mod descriptor;
pub(crate) mod interpret;
pub(crate) mod keyframes;
