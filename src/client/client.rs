use futures::future;
use unicode_normalization::UnicodeNormalization;
use log::{info, warn};

use crate::{
    Error,
    error::Result,
    core::config::Config,
    core::logger,
};

use super::{
    api_client::APIClient,
    caches::{Caches, CacheName, CachePayload},
    confirm::ConfirmAction,
    group_member::MemberRoster,
    post::{Post, PostStatus},
    user::User,
    view::{self, GroupProjection, ViewState},
    deadline,
};

pub struct Builder {
    config  : Option<Config>,
    base_url: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self {
            config  : None,
            base_url: None,
        }
    }

    pub fn with_config(&mut self, config: Config) -> &mut Self {
        self.config = Some(config);
        self
    }

    pub fn with_base_url(&mut self, base_url: &str) -> &mut Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    pub fn build(&self) -> Result<Client> {
        let config = match (&self.base_url, &self.config) {
            (Some(base), _) => Config::with_base_url(base)?,
            (None, Some(cfg)) => cfg.clone(),
            (None, None) => Config::from_env()?,
        };

        logger::setup(config.log_level());

        let api = APIClient::new(config.base_url())?;
        Ok(Client {
            api,
            user    : None,
            caches  : Caches::new(),
            view    : ViewState::new(),
            pending : None,
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// The synchronization layer: keeps the local collections consistent
/// with the service under user-triggered mutations, and derives the
/// rows the interface should show.
pub struct Client {
    api     : APIClient,
    user    : Option<User>,
    caches  : Caches,
    view    : ViewState,
    pending : Option<ConfirmAction>,
}

impl Client {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn caches(&self) -> &Caches {
        &self.caches
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn set_view_state(&mut self, view: ViewState) {
        self.view = view;
    }

    pub fn is_member(&self, group_name: &str) -> bool {
        self.caches.is_member(group_name)
    }

    // --- session ---

    pub async fn sign_up(&self, username: &str, password: &str) -> Result<String> {
        let username = username.nfc().collect::<String>();
        if username.is_empty() || password.is_empty() {
            return Err(Error::Argument("Missing username or password".into()));
        }
        self.api.sign_up(&username, password).await
    }

    /// Establishes the session cookie; call `bootstrap` afterwards.
    pub async fn log_in(&self, username: &str, password: &str) -> Result<String> {
        let username = username.nfc().collect::<String>();
        self.api.log_in(&username, password).await
    }

    /// Resolves the current identity, then runs the coordinated initial
    /// load of all four caches. An unauthenticated session propagates
    /// without any cache load being attempted.
    pub async fn bootstrap(&mut self) -> Result<()> {
        let user = self.api.me().await?;
        info!("Session resolved for {}", user.name());

        self.user = Some(user);
        self.refresh(&CacheName::ALL).await
    }

    /// Best-effort sign-out: local state is cleared regardless of the
    /// call's outcome.
    pub async fn logout(&mut self) {
        if let Err(e) = self.api.logout().await {
            warn!("Logout request failed: {}", e);
        }
        self.user = None;
        self.pending = None;
        self.caches.reset_all();
    }

    // --- cache refresh ---

    async fn fetch_cache(&self, which: CacheName) -> Result<CachePayload> {
        match which {
            CacheName::MyGroups =>
                Ok(CachePayload::MyGroups(self.api.my_groups().await?)),
            CacheName::AllGroups =>
                Ok(CachePayload::AllGroups(self.api.groups().await?)),
            CacheName::CreatedGroups =>
                Ok(CachePayload::CreatedGroups(self.api.created_groups().await?)),
            CacheName::Posts =>
                Ok(CachePayload::Posts(self.api.posts().await?)),
        }
    }

    /// Reloads the named caches. The underlying fetches run
    /// concurrently and the combined state counts as settled only once
    /// all of them have returned; completions from before a reset are
    /// dropped by the epoch token. Successful fetches are applied even
    /// when a sibling fails; the first failure is reported.
    pub async fn refresh(&mut self, which: &[CacheName]) -> Result<()> {
        let epoch = self.caches.epoch();
        let results = future::join_all(
            which.iter().map(|w| self.fetch_cache(*w))
        ).await;

        let mut first_err = None;
        for result in results {
            match result {
                Ok(payload) => {
                    self.caches.store(epoch, payload);
                },
                Err(e) => {
                    warn!("Cache refresh failed: {}", e);
                    if first_err.is_none() {
                        first_err = Some(e);
                    }
                },
            }
        }

        match first_err {
            None => Ok(()),
            Some(e) => Err(e)
        }
    }

    pub async fn refresh_all(&mut self) -> Result<()> {
        self.refresh(&CacheName::ALL).await
    }

    // --- group mutations ---

    pub async fn create_group(&mut self, name: &str, description: &str) -> Result<String> {
        let name = name.nfc().collect::<String>();
        let description = description.nfc().collect::<String>();
        if name.is_empty() {
            return Err(Error::Argument("Missing group name".into()));
        }

        let message = self.api.create_group(&name, &description).await?;
        info!("Created group {}", name);

        self.refresh(&[
            CacheName::AllGroups,
            CacheName::MyGroups,
            CacheName::CreatedGroups
        ]).await?;
        Ok(message)
    }

    pub async fn join_group(&mut self, name: &str) -> Result<String> {
        let message = self.api.join_group(name).await?;
        info!("Joined group {}", name);

        // the cached count no longer reflects the roster
        self.caches.member_counts_mut().invalidate(name);
        self.refresh(&[CacheName::MyGroups, CacheName::AllGroups]).await?;
        Ok(message)
    }

    // --- post mutations ---

    pub async fn create_post(&mut self,
        group_name: &str,
        description: &str,
        deadline_local: &str
    ) -> Result<String> {
        if group_name.is_empty() {
            return Err(Error::Argument("Select a group".into()));
        }
        let description = description.nfc().collect::<String>();
        let deadline = deadline::normalize(deadline_local)?;

        let message = self.api
            .create_post(group_name, &description, &deadline)
            .await?;
        self.refresh(&[CacheName::Posts]).await?;
        Ok(message)
    }

    pub async fn update_post(&mut self,
        id: u64,
        description: &str,
        deadline_local: &str,
        status: PostStatus
    ) -> Result<String> {
        let description = description.nfc().collect::<String>();
        let deadline = deadline::normalize(deadline_local)?;

        let message = self.api
            .update_post(id, &description, &deadline, status)
            .await?;
        self.refresh(&[CacheName::Posts]).await?;
        Ok(message)
    }

    // --- destructive mutations, two-phase ---

    /// Parks a destructive action until the user answers the prompt.
    /// A second request replaces an unanswered one.
    pub fn request_confirmation(&mut self, action: ConfirmAction) {
        self.pending = Some(action);
    }

    pub fn pending_confirmation(&self) -> Option<&ConfirmAction> {
        self.pending.as_ref()
    }

    /// Declining is a no-op: no request, no state change.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub async fn confirm(&mut self) -> Result<String> {
        let Some(action) = self.pending.take() else {
            return Err(Error::State("No action awaiting confirmation".into()));
        };

        match action {
            ConfirmAction::LeaveGroup(name) => self.leave_group(&name).await,
            ConfirmAction::DeleteGroup(name) => self.delete_group(&name).await,
            ConfirmAction::DeletePost(id) => self.delete_post(id).await,
        }
    }

    async fn leave_group(&mut self, name: &str) -> Result<String> {
        let message = self.api.leave_group(name).await?;
        info!("Left group {}", name);

        self.caches.member_counts_mut().invalidate(name);
        self.refresh(&[CacheName::MyGroups, CacheName::AllGroups]).await?;
        Ok(message)
    }

    async fn delete_group(&mut self, name: &str) -> Result<String> {
        let message = self.api.delete_group(name).await?;
        info!("Deleted group {}", name);

        // deletion patches the three group caches locally, no refetch
        self.caches.remove_group(name);
        Ok(message)
    }

    async fn delete_post(&mut self, id: u64) -> Result<String> {
        let message = self.api.delete_post(id).await?;
        info!("Deleted post {}", id);

        self.refresh(&[CacheName::Posts]).await?;
        Ok(message)
    }

    // --- projections and lazy data ---

    pub fn groups_view(&self) -> GroupProjection<'_> {
        view::project_groups(&self.caches, &self.view)
    }

    pub fn posts_view(&self) -> Vec<&Post> {
        view::project_posts(&self.caches, &self.view)
    }

    /// Fetches the member counts a projection reported missing. Each
    /// name is claimed in the pending set before its request goes out,
    /// so overlapping projections cannot double-fetch a key; a failed
    /// fetch releases the claim and is retried by a later projection.
    pub async fn load_member_counts(&mut self, names: &[String]) -> Result<()> {
        let epoch = self.caches.epoch();
        let claimed = names.iter()
            .filter(|n| self.caches.member_counts_mut().begin(n))
            .cloned()
            .collect::<Vec<_>>();

        let api = &self.api;
        let results = future::join_all(claimed.iter().map(|name| async move {
            (name, api.members(name).await)
        })).await;

        for (name, result) in results {
            if epoch != self.caches.epoch() {
                // reset while in flight; markers are already cleared
                return Ok(());
            }
            match result {
                Ok(members) => {
                    self.caches.member_counts_mut()
                        .complete(name, members.len());
                },
                Err(e) => {
                    warn!("Member count fetch for {} failed: {}", name, e);
                    self.caches.member_counts_mut().abort(name);
                },
            }
        }
        Ok(())
    }

    /// Loads the one-group membership roster, replacing any previous
    /// group's snapshot, and settles that group's member count.
    pub async fn view_members(&mut self, group_name: &str) -> Result<()> {
        let epoch = self.caches.epoch();
        let members = self.api.members(group_name).await?;

        let roster = MemberRoster::new(group_name.to_string(), members);
        self.caches.store_roster(epoch, roster);
        Ok(())
    }

    /// Transient group-scoped post query; not cached.
    pub async fn group_posts(&self, group_name: &str) -> Result<Vec<Post>> {
        self.api.group_posts(group_name).await
    }
}
