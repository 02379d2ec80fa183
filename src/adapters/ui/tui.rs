//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Each screen owns one use-case instance for as long as it is open, the way a
//! view owns its state. Esc on any prompt goes back one screen.

use crate::domain::entities::SUMMARY_CLAMP_CHARS;
use crate::domain::{
    Article, DomainError, FormField, Location, PreferenceCategory, ProfileStats, Route,
};
use crate::ports::{
    ClipboardPort, InputPort, LocationPort, NotifierPort, SessionPort, SharePort, UserApiPort,
};
use crate::usecases::{
    ArticleService, ProfileService, ProfileTab, RegistrationService, ShareOutcome, SubmitOutcome,
};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Confirm, MultiSelect, Password, PasswordDisplayMode, Select, Text};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Applies the teal prompt theme to every subsequent inquire prompt.
pub fn apply_theme() {
    let config = RenderConfig::default()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightCyan))
        .with_selected_checkbox(Styled::new("[x]").with_fg(Color::LightGreen));
    inquire::set_global_render_config(config);
}

/// `Ok(None)` when the user pressed Esc; Ctrl-C and IO failures are errors.
fn answered<T>(result: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Multi-select option: shows the label, carries the stored value.
#[derive(Clone)]
struct Choice {
    value: String,
    label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Clone, Copy)]
enum HomeAction {
    Article,
    Profile,
    Register,
    Quit,
}

impl fmt::Display for HomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Article => "Read an article",
            Self::Profile => "Profile",
            Self::Register => "Create an account",
            Self::Quit => "Quit",
        })
    }
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            title: "Global markets steady as central banks hold rates".into(),
            description: Some(
                "Stocks were little changed after several central banks kept interest rates \
                 on hold, citing easing inflation but persistent uncertainty over growth, \
                 energy prices and the pace of hiring across major economies this quarter."
                    .into(),
            ),
            url: "https://www.reuters.com/markets/".into(),
            url_to_image: Some("https://www.reuters.com/markets/cover.jpg".into()),
            source: Some("Reuters".into()),
            ..Default::default()
        },
        Article {
            title: "New telescope images reveal early galaxy formation".into(),
            summary: Some("Astronomers publish the deepest infrared survey to date.".into()),
            url: "https://www.theguardian.com/science".into(),
            source: Some("The Guardian".into()),
            ..Default::default()
        },
    ]
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    api: Arc<dyn UserApiPort>,
    location: Arc<dyn LocationPort>,
    session: Arc<dyn SessionPort>,
    share: Arc<dyn SharePort>,
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl TuiInputPort {
    pub fn new(
        api: Arc<dyn UserApiPort>,
        location: Arc<dyn LocationPort>,
        session: Arc<dyn SessionPort>,
        share: Arc<dyn SharePort>,
        clipboard: Arc<dyn ClipboardPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            api,
            location,
            session,
            share,
            clipboard,
            notifier,
        }
    }

    async fn pick_article(&self) -> Result<Option<Article>, DomainError> {
        const MANUAL: &str = "Enter a link…";
        let articles = sample_articles();
        let mut options: Vec<String> = articles.iter().map(|a| a.title.clone()).collect();
        options.push(MANUAL.to_string());

        let Some(picked) = answered(Select::new("Article", options).raw_prompt())? else {
            return Ok(None);
        };
        if picked.index < articles.len() {
            return Ok(articles.into_iter().nth(picked.index));
        }

        let Some(url) = answered(Text::new("URL:").prompt())? else {
            return Ok(None);
        };
        let title = answered(Text::new("Title:").prompt())?.unwrap_or_default();
        let description = answered(Text::new("Description:").prompt())?.filter(|d| !d.is_empty());
        Ok(Some(Article {
            title,
            description,
            url,
            ..Default::default()
        }))
    }

    async fn article_screen(&self, article: Article) -> Result<(), DomainError> {
        let mut view = ArticleService::new(
            article,
            Arc::clone(&self.share),
            Arc::clone(&self.clipboard),
            Arc::clone(&self.notifier),
        );

        loop {
            let article = view.article();
            println!("\n{}", article.title);
            if let Some(source) = &article.source {
                println!("  {}", source);
            }
            if let Some(image) = article.image_url() {
                println!("  [image] {}", image);
            }
            let summary = article.display_summary();
            if article.has_long_summary() && !view.show_full_summary() {
                let clamped: String = summary
                    .chars()
                    .take(SUMMARY_CLAMP_CHARS)
                    .collect();
                println!("\n  {}…", clamped);
            } else {
                println!("\n  {}", summary);
            }
            let reaction = view.reaction();

            let mut options = vec![
                if reaction.liked() { "Unlike" } else { "Like" },
                if reaction.disliked() {
                    "Remove dislike"
                } else {
                    "Dislike"
                },
                if reaction.shared() { "Shared ✓" } else { "Share" },
            ];
            if article.has_long_summary() {
                options.push(if view.show_full_summary() {
                    "Show less"
                } else {
                    "Show more"
                });
            }
            options.push("Read original");
            options.push("Back");

            let Some(choice) = answered(Select::new("Action", options).prompt())? else {
                return Ok(());
            };
            match choice {
                "Like" | "Unlike" => view.toggle_like(),
                "Dislike" | "Remove dislike" => view.toggle_dislike(),
                "Share" | "Shared ✓" => match view.share().await {
                    Ok(ShareOutcome::Native) => println!("Shared."),
                    Ok(ShareOutcome::Copied) | Ok(ShareOutcome::Dismissed) => {}
                    Err(e) => self.notifier.notify(&e.to_string()),
                },
                "Show more" | "Show less" => view.toggle_summary(),
                "Read original" => println!("Open: {}", view.read_original_url()),
                _ => return Ok(()),
            }
        }
    }

    async fn profile_screen(&self) -> Result<(), DomainError> {
        let mut view = ProfileService::new(
            Arc::clone(&self.api),
            Arc::clone(&self.location),
            Arc::clone(&self.session),
            Arc::clone(&self.notifier),
        );
        println!("Loading profile...");
        view.open().await;

        if let Some(err) = view.error() {
            println!("Error: {}", err);
            return Ok(());
        }
        let Some(user) = view.user().await else {
            println!("Please login to view your profile.");
            return Ok(());
        };

        let ProfileStats {
            bookmarks,
            liked,
            read,
        } = view.stats().await;
        println!("\n{}  ·  News Aggregator User", user.display_name());
        println!(
            "  {} Bookmarks  {} Liked  {} Read",
            bookmarks, liked, read
        );

        loop {
            let Some(tab) = answered(
                Select::new("Tab", ProfileTab::ALL.to_vec())
                    .with_starting_cursor(view.active_tab() as usize)
                    .prompt(),
            )?
            else {
                return Ok(());
            };
            view.select_tab(tab);

            match tab {
                ProfileTab::Profile => {
                    let Some(user) = view.user().await else {
                        return Ok(());
                    };
                    println!("  Username: {}", user.username.as_deref().unwrap_or("-"));
                    println!("  Email:    {}", user.email);
                    println!("  Location: {}", location_line(view.detected_location()));
                    let stats = view.stats().await;
                    println!(
                        "  Bookmarks: {}  Liked: {}  Read: {}",
                        stats.bookmarks, stats.liked, stats.read
                    );
                    let logout = answered(
                        Confirm::new("Logout?")
                            .with_default(false)
                            .with_help_message("Are you sure you want to logout?")
                            .prompt(),
                    )?;
                    if logout == Some(true) {
                        view.logout().await;
                        return Ok(());
                    }
                }
                ProfileTab::Preferences => self.edit_preferences(&mut view).await?,
                ProfileTab::History => {
                    print_links(view.recently_viewed(), "No reading history yet.")
                }
                ProfileTab::Bookmarks => {
                    let user = view.user().await.unwrap_or_default();
                    print_links(&user.bookmarks, "No bookmarks yet.");
                }
                ProfileTab::Liked => {
                    let user = view.user().await.unwrap_or_default();
                    print_links(&user.liked_articles, "No liked articles yet.");
                }
            }
        }
    }

    async fn edit_preferences(&self, view: &mut ProfileService) -> Result<(), DomainError> {
        for category in PreferenceCategory::ALL {
            let choices: Vec<Choice> = category
                .vocabulary()
                .into_iter()
                .map(|(value, label)| Choice { value, label })
                .collect();
            let selected: Vec<usize> = choices
                .iter()
                .enumerate()
                .filter(|(_, c)| view.preferences().contains(category, &c.value))
                .map(|(i, _)| i)
                .collect();

            let picked = answered(
                MultiSelect::new(category.title(), choices)
                    .with_default(&selected)
                    .prompt(),
            )?;
            let Some(picked) = picked else {
                return Ok(());
            };
            let picked: HashSet<String> = picked.into_iter().map(|c| c.value).collect();
            for (value, _) in category.vocabulary() {
                let included = picked.contains(&value);
                view.toggle_member(category, &value, included);
            }
        }

        if answered(Confirm::new("Save Preferences?").with_default(true).prompt())?
            == Some(true)
        {
            view.save_preferences().await;
        }
        Ok(())
    }

    async fn register_screen(&self) -> Result<Option<Route>, DomainError> {
        let mut view = RegistrationService::new(Arc::clone(&self.session));
        let mut pending: Vec<FormField> = FormField::ALL.to_vec();

        loop {
            for field in pending.drain(..) {
                if let Some(msg) = view.error_for(field) {
                    println!("  ! {}", msg);
                }
                let value = if field.is_secret() {
                    answered(
                        Password::new(&format!("{}:", field.label()))
                            .without_confirmation()
                            .with_display_mode(PasswordDisplayMode::Masked)
                            .prompt(),
                    )?
                } else {
                    answered(
                        Text::new(&format!("{}:", field.label()))
                            .with_initial_value(view.form().value(field))
                            .prompt(),
                    )?
                };
                let Some(value) = value else {
                    return Ok(None);
                };
                view.edit(field, value);
            }

            println!("Creating account...");
            match view.submit().await {
                SubmitOutcome::Registered { navigate_to } => {
                    println!("Account created.");
                    return Ok(Some(navigate_to));
                }
                SubmitOutcome::Invalid => {
                    pending = view.errors().keys().copied().collect();
                    debug!(fields = pending.len(), "re-prompting invalid fields");
                }
                SubmitOutcome::Failed(msg) => {
                    self.notifier.notify(&format!("Registration failed: {}", msg));
                    let retry = answered(Confirm::new("Try again?").with_default(true).prompt())?;
                    if retry != Some(true) {
                        return Ok(None);
                    }
                }
            }
        }
    }
}

fn location_line(location: Option<&Location>) -> String {
    location.map_or_else(|| "Detecting...".to_string(), |loc| loc.to_string())
}

fn print_links(links: &[String], empty: &str) {
    if links.is_empty() {
        println!("  {}", empty);
    }
    for link in links {
        println!("  • {}", link);
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            match self.session.current_user().await {
                Some(user) => println!("Signed in as {}", user.display_name()),
                None => println!("Not signed in"),
            }
            let actions = vec![
                HomeAction::Article,
                HomeAction::Profile,
                HomeAction::Register,
                HomeAction::Quit,
            ];
            let Some(action) = answered(Select::new("Home", actions).prompt())? else {
                return Ok(());
            };
            match action {
                HomeAction::Article => {
                    if let Some(article) = self.pick_article().await? {
                        self.article_screen(article).await?;
                    }
                }
                HomeAction::Profile => self.profile_screen().await?,
                HomeAction::Register => {
                    if let Some(Route::Home) = self.register_screen().await? {
                        println!("Welcome aboard.");
                    }
                }
                HomeAction::Quit => return Ok(()),
            }
        }
    }
}
