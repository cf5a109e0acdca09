//! Repository traits (ports)

mod repositories;

pub use repositories::{
    MemorialRepository, MemorialSort, ModeratorDirectory, PageQuery, PhotoRepository, RepoResult,
    TributeRepository, TributeStats,
};
