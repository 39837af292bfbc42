//! The post store: every post lives in one JSON array file, and every operation
//! reads the whole file, optionally changes it, and writes the whole file back.
//! Nothing is cached between calls, so the file is the only source of truth.
//!
//! A malformed file is never an error. Invalid JSON, or JSON whose top level
//! isn't an array, loads as an empty store. The next save then replaces it.
//! A single element of the array that can't be read as a post is different:
//! saving without it would lose it, so that load fails and nothing is written.

use crate::blog::{Post, PostFields, PostID};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("record {index} in {path:?} is not a post: {source}")]
    UnreadableRecord {
        path: PathBuf,
        index: usize,
        source: serde_json::Error,
    },
    #[error("no post id is left after {0}")]
    IdsExhausted(PostID),
    #[error("could not serialize posts: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug)]
pub struct PostStore {
    path: PathBuf,
    // held for the whole load-mutate-save cycle of the operations below, so
    // requests in this process can't overwrite each other's changes. Other
    // processes writing the same file are not covered.
    write_lock: Mutex<()>,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> PostStore {
        PostStore {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every post in stored order. A missing file is created as `[]`.
    ///
    /// Only real I/O failures (e.g. permissions) and array elements that aren't
    /// posts return `Err`. Callers other than the operations below don't hold
    /// the store lock, so prefer [`PostStore::get`] for reads.
    pub async fn load(&self) -> Result<Vec<Post>, StoreError> {
        let file = match tokio::fs::read(&self.path).await {
            Ok(it) => it,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = ?self.path, "post store missing, creating an empty one");
                self.save(&[]).await?;
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        parse_posts(&file, &self.path)
    }

    /// Overwrite the store file with `posts`, creating its directory if needed.
    pub async fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|source| StoreError::Io {
                        path: parent.to_path_buf(),
                        source,
                    })?;
            }
        }

        let file = serde_json::to_vec_pretty(posts)?;
        tokio::fs::write(&self.path, file)
            .await
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// All posts, highest id first. The sorted list is written back so that
    /// back-filled `likes` end up on disk.
    pub async fn list(&self) -> Result<Vec<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load().await?;
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        self.save(&posts).await?;

        Ok(posts)
    }

    pub async fn get(&self, id: PostID) -> Result<Option<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let posts = self.load().await?;
        Ok(fetch_by_id(id, &posts).cloned())
    }

    pub async fn create(&self, fields: PostFields) -> Result<Post, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load().await?;
        let new_post = Post::new(generate_new_id(&posts)?, fields);
        posts.push(new_post.clone());
        self.save(&posts).await?;

        tracing::debug!(id = new_post.id, "created post");
        Ok(new_post)
    }

    /// `Ok(None)` if no post has `id`; the file is left untouched then.
    pub async fn update(&self, id: PostID, fields: PostFields) -> Result<Option<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load().await?;
        let Some(post) = fetch_by_id_mut(id, &mut posts) else {
            return Ok(None);
        };
        post.set_fields(fields);
        let updated = post.clone();
        self.save(&posts).await?;

        Ok(Some(updated))
    }

    /// Returns whether a post was removed. The store is written back either way.
    pub async fn delete(&self, id: PostID) -> Result<bool, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load().await?;
        let before = posts.len();
        posts.retain(|post| post.id != id);
        self.save(&posts).await?;

        Ok(posts.len() != before)
    }

    /// `Ok(None)` if no post has `id`; the file is left untouched then.
    pub async fn like(&self, id: PostID) -> Result<Option<Post>, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load().await?;
        let Some(post) = fetch_by_id_mut(id, &mut posts) else {
            return Ok(None);
        };
        post.likes = post.likes.saturating_add(1);
        let liked = post.clone();
        self.save(&posts).await?;

        Ok(Some(liked))
    }
}

fn parse_posts(file: &[u8], path: &Path) -> Result<Vec<Post>, StoreError> {
    let value = match serde_json::from_slice::<serde_json::Value>(file) {
        Ok(it) => it,
        Err(err) => {
            tracing::warn!(?path, "post store is not valid JSON, treating it as empty: {err}");
            return Ok(Vec::new());
        }
    };

    let serde_json::Value::Array(records) = value else {
        tracing::warn!(?path, "post store is not a JSON array, treating it as empty");
        return Ok(Vec::new());
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            serde_json::from_value::<Post>(record).map_err(|source| StoreError::UnreadableRecord {
                path: path.to_path_buf(),
                index,
                source,
            })
        })
        .collect()
}

/// One past the highest id in `posts`, or 1 for an empty store.
pub fn generate_new_id(posts: &[Post]) -> Result<PostID, StoreError> {
    match posts.iter().map(|post| post.id).max() {
        None => Ok(1),
        Some(max) => max.checked_add(1).ok_or(StoreError::IdsExhausted(max)),
    }
}

pub fn fetch_by_id(id: PostID, posts: &[Post]) -> Option<&Post> {
    posts.iter().find(|post| post.id == id)
}

pub fn fetch_by_id_mut(id: PostID, posts: &mut [Post]) -> Option<&mut Post> {
    posts.iter_mut().find(|post| post.id == id)
}
