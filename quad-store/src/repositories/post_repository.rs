use chrono::Utc;
use uuid::Uuid;

use quad_types::{Comment, Post, PostDraft, PostStatus, PostType};

use crate::store::Store;

pub struct PostRepository {
    store: Store,
}

impl PostRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Tenant feed for one post type, newest first. `only_verified` is the
    /// public view; moderators pass `false` to see everything.
    pub fn get_posts(&self, institution_id: Uuid, post_type: PostType, only_verified: bool) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .posts
            .iter()
            .filter(|p| {
                p.institution_id == institution_id
                    && p.post_type == post_type
                    && (!only_verified || p.status == PostStatus::Verified)
            })
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Moderation queue: everything still awaiting verification, any type.
    pub fn pending_posts(&self, institution_id: Uuid) -> Vec<Post> {
        self.store
            .read()
            .posts
            .iter()
            .filter(|p| p.institution_id == institution_id && p.status == PostStatus::Pending)
            .cloned()
            .collect()
    }

    /// Everything one author ever posted, newest first, regardless of
    /// institution or status.
    pub fn user_posts(&self, author_id: Uuid) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .store
            .read()
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        posts
    }

    /// Every post enters the moderation gate as Pending with zero likes and
    /// no comments.
    pub fn create_post(&self, draft: PostDraft) -> Post {
        let post = Post {
            id: Uuid::new_v4(),
            institution_id: draft.institution_id,
            author_id: draft.author_id,
            author_name: draft.author_name,
            author_role: draft.author_role,
            title: draft.title,
            content: draft.content,
            created_at: Utc::now(),
            likes: 0,
            comments: vec![],
            status: PostStatus::Pending,
            post_type: draft.post_type,
        };
        // Newest at the head, so same-instant posts still list newest first.
        self.store.write().posts.insert(0, post.clone());
        tracing::debug!(post = %post.id, institution = %post.institution_id, "post created");
        post
    }

    /// Advance Pending -> Verified. Unknown ids are ignored; a verified
    /// post never goes back.
    pub fn verify_post(&self, post_id: Uuid) {
        let mut data = self.store.write();
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == post_id) {
            post.status = PostStatus::Verified;
            tracing::debug!(post = %post_id, "post verified");
        }
    }

    /// Content replacement only; title, type, and status are untouched.
    pub fn update_post(&self, post_id: Uuid, new_content: &str) {
        let mut data = self.store.write();
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == post_id) {
            post.content = new_content.to_string();
        }
    }

    pub fn delete_post(&self, post_id: Uuid) {
        self.store.write().posts.retain(|p| p.id != post_id);
    }

    /// Unconditional increment. There is no per-user like tracking and no
    /// unlike, so repeat calls keep counting.
    pub fn toggle_like(&self, post_id: Uuid) {
        let mut data = self.store.write();
        if let Some(post) = data.posts.iter_mut().find(|p| p.id == post_id) {
            post.likes += 1;
        }
    }

    /// Append a comment to the post's sequence. Returns `None` when the
    /// post does not exist; no comment is created for a missing post.
    pub fn add_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        user_name: &str,
        text: &str,
    ) -> Option<Comment> {
        let mut data = self.store.write();
        let post = data.posts.iter_mut().find(|p| p.id == post_id)?;
        let comment = Comment {
            id: Uuid::new_v4(),
            user_id,
            user_name: user_name.to_string(),
            text: text.to_string(),
            created_at: Utc::now(),
        };
        post.comments.push(comment.clone());
        Some(comment)
    }

    pub fn get_by_id(&self, post_id: Uuid) -> Option<Post> {
        self.store.read().posts.iter().find(|p| p.id == post_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quad_types::UserRole;

    fn draft(institution_id: Uuid, content: &str, post_type: PostType) -> PostDraft {
        PostDraft {
            institution_id,
            author_id: Uuid::new_v4(),
            author_name: "Ana".to_string(),
            author_role: UserRole::Student,
            title: None,
            content: content.to_string(),
            post_type,
        }
    }

    #[test]
    fn new_posts_start_pending_and_are_hidden_from_the_public_feed() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();

        let post = repo.create_post(draft(inst, "hello", PostType::Newsletter));
        assert_eq!(post.status, PostStatus::Pending);
        assert_eq!(post.likes, 0);
        assert!(post.comments.is_empty());

        assert!(repo.get_posts(inst, PostType::Newsletter, true).is_empty());
        let queue = repo.pending_posts(inst);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].id, post.id);
    }

    #[test]
    fn verification_moves_a_post_from_the_queue_to_the_feed() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();
        let post = repo.create_post(draft(inst, "hello", PostType::Newsletter));

        repo.verify_post(post.id);

        let feed = repo.get_posts(inst, PostType::Newsletter, true);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, post.id);
        assert!(repo.pending_posts(inst).is_empty());
    }

    #[test]
    fn feed_is_scoped_by_institution_and_type() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();
        let other_inst = Uuid::new_v4();

        let ours = repo.create_post(draft(inst, "jobs post", PostType::Job));
        let wrong_type = repo.create_post(draft(inst, "event post", PostType::Events));
        let wrong_tenant = repo.create_post(draft(other_inst, "their jobs", PostType::Job));
        for p in [&ours, &wrong_type, &wrong_tenant] {
            repo.verify_post(p.id);
        }

        let feed = repo.get_posts(inst, PostType::Job, true);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, ours.id);
    }

    #[test]
    fn feed_orders_newest_first() {
        let store = Store::new();
        let repo = PostRepository::new(store.clone());
        let inst = Uuid::new_v4();

        let first = repo.create_post(draft(inst, "first", PostType::Newsletter));
        let second = repo.create_post(draft(inst, "second", PostType::Newsletter));
        repo.verify_post(first.id);
        repo.verify_post(second.id);
        // Push the older post clearly into the past.
        {
            let mut data = store.write();
            let p = data.posts.iter_mut().find(|p| p.id == first.id).unwrap();
            p.created_at = Utc::now() - chrono::Duration::minutes(5);
        }

        let feed = repo.get_posts(inst, PostType::Newsletter, true);
        let ids: Vec<_> = feed.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second.id, first.id]);
        assert!(feed[0].created_at >= feed[1].created_at);
    }

    #[test]
    fn user_posts_span_institutions_and_statuses() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let author = Uuid::new_v4();

        let mut d1 = draft(Uuid::new_v4(), "one", PostType::Newsletter);
        d1.author_id = author;
        let mut d2 = draft(Uuid::new_v4(), "two", PostType::Job);
        d2.author_id = author;
        let p1 = repo.create_post(d1);
        repo.create_post(draft(Uuid::new_v4(), "someone else", PostType::Job));
        let p2 = repo.create_post(d2);
        repo.verify_post(p1.id);

        let posts = repo.user_posts(author);
        let ids: Vec<_> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&p1.id) && ids.contains(&p2.id));
    }

    #[test]
    fn update_post_replaces_content_only() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();
        let post = repo.create_post(draft(inst, "before", PostType::Newsletter));

        repo.update_post(post.id, "after");

        let stored = repo.get_by_id(post.id).unwrap();
        assert_eq!(stored.content, "after");
        assert_eq!(stored.status, PostStatus::Pending);
        assert_eq!(stored.post_type, PostType::Newsletter);
    }

    #[test]
    fn delete_post_removes_exactly_one() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();
        let doomed = repo.create_post(draft(inst, "doomed", PostType::Newsletter));
        let kept = repo.create_post(draft(inst, "kept", PostType::Newsletter));

        repo.delete_post(doomed.id);

        assert!(repo.get_by_id(doomed.id).is_none());
        assert!(repo.get_by_id(kept.id).is_some());
    }

    #[test]
    fn comments_append_in_order_and_require_an_existing_post() {
        let store = Store::new();
        let repo = PostRepository::new(store);
        let inst = Uuid::new_v4();
        let post = repo.create_post(draft(inst, "discuss", PostType::Events));
        let user = Uuid::new_v4();

        let first = repo.add_comment(post.id, user, "Ana", "first!").unwrap();
        let second = repo.add_comment(post.id, user, "Ana", "second").unwrap();

        let stored = repo.get_by_id(post.id).unwrap();
        let ids: Vec<_> = stored.comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);

        assert!(repo
            .add_comment(Uuid::new_v4(), user, "Ana", "into the void")
            .is_none());
    }

    proptest! {
        #[test]
        fn n_likes_increment_by_exactly_n(n in 0usize..64) {
            let store = Store::new();
            let repo = PostRepository::new(store);
            let post = repo.create_post(draft(Uuid::new_v4(), "likeable", PostType::Newsletter));

            for _ in 0..n {
                repo.toggle_like(post.id);
            }

            prop_assert_eq!(repo.get_by_id(post.id).unwrap().likes, n as u32);
        }

        #[test]
        fn likes_on_unknown_posts_change_nothing(n in 1usize..8) {
            let store = Store::new();
            let repo = PostRepository::new(store);
            let post = repo.create_post(draft(Uuid::new_v4(), "likeable", PostType::Newsletter));

            for _ in 0..n {
                repo.toggle_like(Uuid::new_v4());
            }

            prop_assert_eq!(repo.get_by_id(post.id).unwrap().likes, 0);
        }
    }
}
