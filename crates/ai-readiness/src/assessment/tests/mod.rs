pub(crate) mod common;

mod brief;
