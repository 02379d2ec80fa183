//! Article detail view: reactions, share with clipboard fallback, summary expansion.
//!
//! - Like/dislike delegate to `ReactionState` (mutually exclusive)
//! - Share marks the article shared before anything else, then tries the native sheet
//! - Aborted/failed native share is swallowed; only a missing capability falls back

use crate::domain::{Article, DomainError, ReactionState, ShareError};
use crate::ports::{ClipboardPort, NotifierPort, SharePort, ShareRequest};
use std::sync::Arc;
use tracing::{debug, info};

pub const LINK_COPIED: &str = "Link copied to clipboard!";

/// What happened when the user pressed share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Native share sheet completed.
    Native,
    /// Native share existed but was aborted or failed; nothing else done.
    Dismissed,
    /// No native share; url copied to the clipboard.
    Copied,
}

/// State and actions for one open article.
pub struct ArticleService {
    article: Article,
    reaction: ReactionState,
    show_full_summary: bool,
    share: Arc<dyn SharePort>,
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl ArticleService {
    pub fn new(
        article: Article,
        share: Arc<dyn SharePort>,
        clipboard: Arc<dyn ClipboardPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            article,
            reaction: ReactionState::new(),
            show_full_summary: false,
            share,
            clipboard,
            notifier,
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn reaction(&self) -> ReactionState {
        self.reaction
    }

    pub fn toggle_like(&mut self) {
        self.reaction.toggle_like();
        debug!(reaction = ?self.reaction.reaction(), "toggled like");
    }

    pub fn toggle_dislike(&mut self) {
        self.reaction.toggle_dislike();
        debug!(reaction = ?self.reaction.reaction(), "toggled dislike");
    }

    pub fn show_full_summary(&self) -> bool {
        self.show_full_summary
    }

    /// Flip "show more"/"show less". Only meaningful when the summary is long.
    pub fn toggle_summary(&mut self) {
        self.show_full_summary = !self.show_full_summary;
    }

    pub fn read_original_url(&self) -> &str {
        &self.article.url
    }

    /// Share the article. `shared` is set regardless of which path runs.
    ///
    /// # Errors
    /// Only the clipboard fallback can fail (`DomainError::Clipboard`).
    pub async fn share(&mut self) -> Result<ShareOutcome, DomainError> {
        self.reaction.mark_shared();

        let request = ShareRequest {
            title: self.article.title.clone(),
            text: self.article.share_text().to_string(),
            url: self.article.url.clone(),
        };

        match self.share.share(&request).await {
            Ok(()) => {
                info!(url = %request.url, "shared via native sheet");
                Ok(ShareOutcome::Native)
            }
            Err(ShareError::Unsupported) => {
                self.clipboard.write_text(&request.url)?;
                self.notifier.notify(LINK_COPIED);
                info!(url = %request.url, "native share unavailable; copied link");
                Ok(ShareOutcome::Copied)
            }
            Err(e) => {
                debug!(error = %e, "native share dismissed");
                Ok(ShareOutcome::Dismissed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{RecordingClipboard, RecordingNotifier, StubShare};

    fn article() -> Article {
        Article {
            title: "Rust 2024".into(),
            description: Some("Edition released".into()),
            url: "https://news.example/rust".into(),
            ..Default::default()
        }
    }

    struct Harness {
        service: ArticleService,
        share: Arc<StubShare>,
        clipboard: Arc<RecordingClipboard>,
        notifier: Arc<RecordingNotifier>,
    }

    fn harness(share_result: Result<(), ShareError>) -> Harness {
        let share = Arc::new(StubShare::new(share_result));
        let clipboard = Arc::new(RecordingClipboard::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let service = ArticleService::new(
            article(),
            share.clone(),
            clipboard.clone(),
            notifier.clone(),
        );
        Harness {
            service,
            share,
            clipboard,
            notifier,
        }
    }

    #[tokio::test]
    async fn test_native_share_passes_article_fields() {
        let mut h = harness(Ok(()));
        let outcome = h.service.share().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Native);
        assert!(h.service.reaction().shared());
        assert_eq!(
            h.share.requests(),
            vec![ShareRequest {
                title: "Rust 2024".into(),
                text: "Edition released".into(),
                url: "https://news.example/rust".into(),
            }]
        );
        assert!(h.clipboard.writes().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_share_copies_link_and_notifies() {
        let mut h = harness(Err(ShareError::Unsupported));
        let outcome = h.service.share().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Copied);
        assert_eq!(h.clipboard.writes(), vec!["https://news.example/rust"]);
        assert_eq!(h.notifier.messages(), vec![LINK_COPIED]);
    }

    #[tokio::test]
    async fn test_aborted_share_is_swallowed() {
        let mut h = harness(Err(ShareError::Aborted));
        let outcome = h.service.share().await.unwrap();

        assert_eq!(outcome, ShareOutcome::Dismissed);
        assert!(h.service.reaction().shared());
        assert!(h.clipboard.writes().is_empty());
        assert!(h.notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_clipboard_failure_propagates_but_shared_stays_set() {
        let share = Arc::new(StubShare::new(Err(ShareError::Unsupported)));
        let clipboard = Arc::new(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        let notifier = Arc::new(RecordingNotifier::default());
        let mut service = ArticleService::new(article(), share, clipboard, notifier.clone());

        let err = service.share().await.unwrap_err();
        assert!(matches!(err, DomainError::Clipboard(_)));
        assert!(service.reaction().shared());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_share_twice_keeps_shared() {
        let mut h = harness(Ok(()));
        h.service.share().await.unwrap();
        h.service.share().await.unwrap();
        assert!(h.service.reaction().shared());
        assert_eq!(h.share.requests().len(), 2);
    }

    #[test]
    fn test_like_dislike_and_summary_toggle() {
        let mut h = harness(Ok(()));
        h.service.toggle_like();
        h.service.toggle_dislike();
        assert!(!h.service.reaction().liked());
        assert!(h.service.reaction().disliked());

        assert!(!h.service.show_full_summary());
        h.service.toggle_summary();
        assert!(h.service.show_full_summary());
        assert_eq!(h.service.read_original_url(), "https://news.example/rust");
    }
}
