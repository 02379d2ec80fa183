//! Per-session article reaction: like/dislike are mutually exclusive, share is one-shot.
//!
//! Never synced to the profile's `liked_articles`.

/// Reaction flags for one article view. `liked && disliked` never holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReactionState {
    liked: bool,
    disliked: bool,
    shared: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    Neutral,
    Liked,
    Disliked,
}

impl ReactionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn disliked(&self) -> bool {
        self.disliked
    }

    pub fn shared(&self) -> bool {
        self.shared
    }

    pub fn reaction(&self) -> Reaction {
        match (self.liked, self.disliked) {
            (true, _) => Reaction::Liked,
            (_, true) => Reaction::Disliked,
            _ => Reaction::Neutral,
        }
    }

    pub fn toggle_like(&mut self) {
        if self.liked {
            self.liked = false;
        } else {
            self.liked = true;
            self.disliked = false;
        }
    }

    pub fn toggle_dislike(&mut self) {
        if self.disliked {
            self.disliked = false;
        } else {
            self.disliked = true;
            self.liked = false;
        }
    }

    /// Once set, nothing clears it for the lifetime of the view.
    pub fn mark_shared(&mut self) {
        self.shared = true;
    }
}
