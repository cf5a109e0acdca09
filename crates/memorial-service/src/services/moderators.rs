//! Moderator directory backed by configuration

use std::collections::HashSet;

use async_trait::async_trait;
use memorial_core::traits::{ModeratorDirectory, RepoResult};
use memorial_core::UserId;

/// Moderators listed in `MODERATOR_USER_IDS`
#[derive(Debug, Clone, Default)]
pub struct StaticModeratorDirectory {
    ids: HashSet<UserId>,
}

impl StaticModeratorDirectory {
    pub fn new(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[async_trait]
impl ModeratorDirectory for StaticModeratorDirectory {
    async fn has_moderator_role(&self, actor: UserId) -> RepoResult<bool> {
        Ok(self.ids.contains(&actor))
    }
}
