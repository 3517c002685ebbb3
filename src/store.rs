use crate::models::UserProfile;
use tokio::sync::watch;
use tracing::info;

/// Holds at most one profile for the running session.
///
/// Observers get the latest value through [`UserStore::subscribe`]; changes
/// are not queued.
#[derive(Debug)]
pub struct UserStore {
    current: watch::Sender<Option<UserProfile>>,
}

impl UserStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        Self { current }
    }

    /// Replaces whatever profile was held before.
    pub fn set_user(&self, profile: UserProfile) {
        info!(user = %profile.id(), name = profile.name(), "profile set");
        self.current.send_replace(Some(profile));
    }

    pub fn clear_user(&self) {
        if self.current.send_replace(None).is_some() {
            info!("profile cleared");
        }
    }

    pub fn current(&self) -> Option<UserProfile> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.current.subscribe()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
