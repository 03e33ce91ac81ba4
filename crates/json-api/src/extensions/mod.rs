//! Extension traits

mod body;
mod depot;
mod result;

pub(crate) use body::RequestBodyExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
