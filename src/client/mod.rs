pub mod user;
pub mod group;
pub mod group_member;
pub mod post;
pub mod deadline;

pub mod caches;
pub mod view;
pub mod confirm;
pub mod client;

pub(crate) mod api_client;
