pub mod core;
pub mod client;

pub use crate::core::{
    error::{self, Error, Result},
    config::{self, Config},
};

pub use crate::client::{
    user::User,
    group::Group,
    group_member::{GroupMember, MemberRoster},
    post::{Post, PostStatus},
    caches::{Caches, CacheName, MemberCounts},
    view::{ActiveTab, SortOrder, ViewState, GroupRow, GroupProjection},
    confirm::ConfirmAction,
    client::{Builder, Client},
};
