//! The lake's social feed.

use crate::stages::Stage;
use serde::{Deserialize, Serialize};

/// One feed entry. Persisted with the snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub stage: Stage,
    pub content: String,
    pub likes: u32,
    pub timestamp_ms: i64,
}

/// Allocates the next post id: one past the highest id in the feed, so
/// ids stay unique across save/load.
pub fn next_post_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            stage: Stage::Cub,
            content: String::new(),
            likes: 0,
            timestamp_ms: 0,
        }
    }

    #[test]
    fn test_first_id_is_one() {
        assert_eq!(next_post_id(&[]), 1);
    }

    #[test]
    fn test_ids_advance_past_the_highest() {
        let posts = vec![post(3), post(1), post(7)];
        assert_eq!(next_post_id(&posts), 8);
    }
}
