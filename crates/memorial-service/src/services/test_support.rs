//! In-memory repositories for service tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use memorial_core::traits::{
    MemorialRepository, MemorialSort, PageQuery, PhotoRepository, RepoResult, TributeRepository,
    TributeStats,
};
use memorial_core::{
    Counter, DomainError, Memorial, MemorialId, Photo, Tribute, TributeId, TributeWithMemorial,
    UserId,
};

use super::context::ServiceContext;
use super::moderators::StaticModeratorDirectory;

#[derive(Default)]
struct Tables {
    memorials: HashMap<MemorialId, Memorial>,
    tributes: Vec<Tribute>,
    photos: Vec<Photo>,
}

/// One lock over every table, so each repository call is atomic
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every following call fail with `StorageUnavailable`
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn lock(&self) -> RepoResult<MutexGuard<'_, Tables>> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::StorageUnavailable(
                "connection refused".to_string(),
            ));
        }
        self.tables
            .lock()
            .map_err(|e| DomainError::InternalError(e.to_string()))
    }

    pub fn insert_memorial(&self, memorial: Memorial) {
        self.tables
            .lock()
            .unwrap()
            .memorials
            .insert(memorial.id, memorial);
    }

    pub fn memorial(&self, id: MemorialId) -> Option<Memorial> {
        self.tables.lock().unwrap().memorials.get(&id).cloned()
    }

    pub fn tributes(&self) -> Vec<Tribute> {
        self.tables.lock().unwrap().tributes.clone()
    }

    pub fn tribute(&self, id: TributeId) -> Option<Tribute> {
        self.tables
            .lock()
            .unwrap()
            .tributes
            .iter()
            .find(|t| t.id == id)
            .cloned()
    }

    fn with_memorial(tables: &Tables, tribute: &Tribute) -> TributeWithMemorial {
        let memorial = tables.memorials.get(&tribute.memorial_id);
        TributeWithMemorial {
            tribute: tribute.clone(),
            pet_name: memorial.map(|m| m.pet_name.clone()),
            slug: memorial.map(|m| m.slug.clone()),
        }
    }
}

#[async_trait]
impl MemorialRepository for MemoryStore {
    async fn find_by_id(&self, id: MemorialId) -> RepoResult<Option<Memorial>> {
        Ok(self.lock()?.memorials.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Memorial>> {
        Ok(self
            .lock()?
            .memorials
            .values()
            .find(|m| m.slug == slug)
            .cloned())
    }

    async fn find_by_owner(&self, owner_id: UserId) -> RepoResult<Vec<Memorial>> {
        let mut memorials: Vec<_> = self
            .lock()?
            .memorials
            .values()
            .filter(|m| m.owner_id == owner_id)
            .cloned()
            .collect();
        memorials.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(memorials)
    }

    async fn find_public(&self, sort: MemorialSort, limit: i64) -> RepoResult<Vec<Memorial>> {
        let mut memorials: Vec<_> = self
            .lock()?
            .memorials
            .values()
            .filter(|m| m.is_listed())
            .cloned()
            .collect();
        match sort {
            MemorialSort::Latest => memorials.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            MemorialSort::Popular => {
                memorials.sort_by(|a, b| b.popularity_score().cmp(&a.popularity_score()));
            }
        }
        memorials.truncate(limit as usize);
        Ok(memorials)
    }

    async fn create(&self, memorial: &Memorial) -> RepoResult<()> {
        let mut tables = self.lock()?;
        if tables.memorials.values().any(|m| m.slug == memorial.slug) {
            return Err(DomainError::SlugAlreadyExists);
        }
        tables.memorials.insert(memorial.id, memorial.clone());
        Ok(())
    }

    async fn increment_view(&self, id: MemorialId) -> RepoResult<bool> {
        let mut tables = self.lock()?;
        Ok(match tables.memorials.get_mut(&id) {
            Some(memorial) => {
                memorial.view_count += 1;
                true
            }
            None => false,
        })
    }
}

#[async_trait]
impl TributeRepository for MemoryStore {
    async fn find_by_id(&self, id: TributeId) -> RepoResult<Option<Tribute>> {
        Ok(self.lock()?.tributes.iter().find(|t| t.id == id).cloned())
    }

    async fn find_approved_by_memorial(
        &self,
        memorial_id: MemorialId,
        page: PageQuery,
    ) -> RepoResult<Vec<Tribute>> {
        let tables = self.lock()?;
        // Insertion order is creation order
        Ok(tables
            .tributes
            .iter()
            .rev()
            .filter(|t| t.memorial_id == memorial_id && t.approved)
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn find_pending(&self) -> RepoResult<Vec<TributeWithMemorial>> {
        let tables = self.lock()?;
        Ok(tables
            .tributes
            .iter()
            .rev()
            .filter(|t| t.is_pending())
            .map(|t| Self::with_memorial(&tables, t))
            .collect())
    }

    async fn find_recent_approved(&self, limit: i64) -> RepoResult<Vec<TributeWithMemorial>> {
        let tables = self.lock()?;
        Ok(tables
            .tributes
            .iter()
            .rev()
            .filter(|t| t.approved)
            .take(limit as usize)
            .map(|t| Self::with_memorial(&tables, t))
            .collect())
    }

    async fn stats(&self) -> RepoResult<TributeStats> {
        let tables = self.lock()?;
        let approved = tables.tributes.iter().filter(|t| t.approved).count() as i64;
        Ok(TributeStats {
            pending: tables.tributes.len() as i64 - approved,
            approved,
        })
    }

    async fn create(&self, tribute: &Tribute) -> RepoResult<()> {
        let mut tables = self.lock()?;
        if !tables.memorials.contains_key(&tribute.memorial_id) {
            return Err(DomainError::MemorialNotFound(tribute.memorial_id.to_string()));
        }
        tables.tributes.push(tribute.clone());
        Ok(())
    }

    async fn create_with_counter(&self, tribute: &Tribute) -> RepoResult<i64> {
        let counter = tribute
            .counter()
            .ok_or_else(|| DomainError::InvalidTributeKind(tribute.kind.to_string()))?;
        let mut tables = self.lock()?;
        let memorial = tables
            .memorials
            .get_mut(&tribute.memorial_id)
            .ok_or_else(|| DomainError::MemorialNotFound(tribute.memorial_id.to_string()))?;
        let value = match counter {
            Counter::Candle => &mut memorial.candle_count,
            Counter::Flower => &mut memorial.flower_count,
        };
        *value += 1;
        let value = *value;
        tables.tributes.push(tribute.clone());
        Ok(value)
    }

    async fn approve(&self, id: TributeId) -> RepoResult<bool> {
        let mut tables = self.lock()?;
        Ok(match tables.tributes.iter_mut().find(|t| t.id == id) {
            Some(tribute) => {
                tribute.approve();
                true
            }
            None => false,
        })
    }

    async fn delete(&self, id: TributeId) -> RepoResult<bool> {
        let mut tables = self.lock()?;
        let before = tables.tributes.len();
        tables.tributes.retain(|t| t.id != id);
        Ok(tables.tributes.len() < before)
    }
}

#[async_trait]
impl PhotoRepository for MemoryStore {
    async fn create(&self, photo: &Photo) -> RepoResult<()> {
        let mut tables = self.lock()?;
        if !tables.memorials.contains_key(&photo.memorial_id) {
            return Err(DomainError::MemorialNotFound(photo.memorial_id.to_string()));
        }
        tables.photos.push(photo.clone());
        Ok(())
    }

    async fn find_by_memorial(&self, memorial_id: MemorialId) -> RepoResult<Vec<Photo>> {
        let mut photos: Vec<_> = self
            .lock()?
            .photos
            .iter()
            .filter(|p| p.memorial_id == memorial_id)
            .cloned()
            .collect();
        photos.sort_by_key(|p| (p.display_order, p.uploaded_at));
        Ok(photos)
    }
}

/// Context over a fresh store, with `moderator` holding the moderator role
pub fn context_with_moderator(moderator: UserId) -> (ServiceContext, Arc<MemoryStore>) {
    let store = MemoryStore::new();
    let ctx = ServiceContext::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(StaticModeratorDirectory::new([moderator])),
    );
    (ctx, store)
}

/// Context over a fresh store with no moderators
pub fn context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = MemoryStore::new();
    let ctx = ServiceContext::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(StaticModeratorDirectory::default()),
    );
    (ctx, store)
}

/// A public memorial with zeroed counters, already stored
pub fn seed_memorial(store: &MemoryStore, owner_id: UserId, slug: &str) -> Memorial {
    let memorial = Memorial::new(
        MemorialId::generate(),
        owner_id,
        slug.to_string(),
        "Buddy".to_string(),
        "dog".to_string(),
    );
    store.insert_memorial(memorial.clone());
    memorial
}
