pub(crate) mod delete;
pub(crate) mod fallback;
pub(crate) mod get;
pub(crate) mod list;
pub(crate) mod put;
