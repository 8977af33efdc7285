//! Session controller - who is logged in, their progress, and display preferences
//!
//! The controller is the only writer of the session store. Every change to
//! the active user is written to the store first and committed in memory
//! only after the write succeeded, so a user exists in memory exactly when
//! its mirror exists in the store.

use std::sync::Arc;

use crate::domain::result::{Error, Result};
use crate::domain::{Language, Notification, Page, Preferences, RegistrationRequest, Theme, User};
use crate::locale::{self, t};
use crate::ports::{RegistrationGateway, SessionStore, KEY_LANGUAGE, KEY_THEME, KEY_USER};

/// In-memory application state synced to a [`SessionStore`]
pub struct SessionController {
    store: Arc<dyn SessionStore>,
    gateway: Arc<dyn RegistrationGateway>,
    user: Option<User>,
    page: Page,
    preferences: Preferences,
    notifications: Vec<Notification>,
}

impl SessionController {
    /// Restore state from the store. The page always starts at home.
    pub fn load(store: Arc<dyn SessionStore>, gateway: Arc<dyn RegistrationGateway>) -> Result<Self> {
        let user = Self::read_user(store.as_ref())?;
        let preferences = Preferences {
            theme: Theme::from_stored(store.load(KEY_THEME)?.as_deref()),
            language: Language::from_stored(store.load(KEY_LANGUAGE)?.as_deref()),
        };

        Ok(Self {
            store,
            gateway,
            user,
            page: Page::Home,
            preferences,
            notifications: Vec::new(),
        })
    }

    /// Read the user mirror. A mirror that no longer parses is dropped so the
    /// store and memory agree on "nobody is logged in".
    fn read_user(store: &dyn SessionStore) -> Result<Option<User>> {
        let Some(raw) = store.load(KEY_USER)? else {
            return Ok(None);
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => Ok(Some(user)),
            Err(_) => {
                store.remove(KEY_USER)?;
                Ok(None)
            }
        }
    }

    /// Replace the active user, store first
    fn set_user(&mut self, user: Option<User>) -> Result<()> {
        match &user {
            Some(u) => self.store.save(KEY_USER, &serde_json::to_string(u)?)?,
            None => self.store.remove(KEY_USER)?,
        }
        self.user = user;
        Ok(())
    }

    // === Identity ===

    /// Log in by email.
    ///
    /// When the stored mirror has exactly this email it is reactivated as-is,
    /// counters included. The password is not checked against anything; any
    /// other email gets a fresh user named after the part before `@`.
    pub fn login(&mut self, email: &str, _password: &str) -> Result<User> {
        let stored = Self::read_user(self.store.as_ref())?;
        let user = match stored {
            Some(existing) if existing.email == email => existing,
            _ => User::from_email(email),
        };

        self.set_user(Some(user.clone()))?;
        self.page = Page::Welcome;
        Ok(user)
    }

    /// Register through the gateway.
    ///
    /// On success a fresh user becomes active and the page moves to welcome.
    /// On failure the active user is left alone and the error carries the
    /// gateway's message (or a localized generic one if it sent none).
    pub async fn register(&mut self, name: &str, email: &str, password: &str) -> Result<User> {
        let request = RegistrationRequest::new(name, email, password);
        let lang = self.preferences.language;

        let response = match self.gateway.register(&request).await {
            Ok(response) => response,
            Err(Error::Gateway(msg)) if msg.is_empty() => {
                return Err(Error::gateway(t("serverError", lang)));
            }
            Err(e) => return Err(e),
        };

        if !response.success {
            let message = if response.message.is_empty() {
                t("serverError", lang).to_string()
            } else {
                response.message
            };
            return Err(Error::Gateway(message));
        }

        let user = User::new(name, email);
        self.set_user(Some(user.clone()))?;
        self.page = Page::Welcome;
        Ok(user)
    }

    /// Forget the active user and return home
    pub fn logout(&mut self) -> Result<()> {
        self.set_user(None)?;
        self.page = Page::Home;
        Ok(())
    }

    // === Progress ===

    /// Credit points and completed tasks to the active user.
    ///
    /// Does nothing when nobody is logged in. A positive point delta queues a
    /// success notification.
    pub fn award_points(&mut self, points: u32, tasks_completed: u32) -> Result<()> {
        let Some(current) = &self.user else {
            return Ok(());
        };

        let mut updated = current.clone();
        updated.award(points, tasks_completed);
        self.set_user(Some(updated))?;

        if points > 0 {
            let lang = self.preferences.language;
            let description = if tasks_completed > 0 {
                locale::format_tasks_completed(tasks_completed, lang)
            } else {
                t("pointsAdded", lang).to_string()
            };
            self.notifications.push(
                Notification::success(locale::format_points_earned(points, lang))
                    .with_description(description),
            );
        }

        Ok(())
    }

    /// Drain queued notifications
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    // === Navigation ===

    /// Go to `page`, or to login when `page` needs a user and there is none.
    /// Returns the page actually shown.
    pub fn navigate(&mut self, page: Page) -> Page {
        self.page = if page.is_protected() && self.user.is_none() {
            Page::Login
        } else {
            page
        };
        self.page
    }

    /// [`navigate`](Self::navigate) by page identifier
    pub fn navigate_str(&mut self, page: &str) -> Result<Page> {
        let page: Page = page.parse()?;
        Ok(self.navigate(page))
    }

    /// Where the logo link points: welcome for users, home otherwise
    pub fn home_target(&self) -> Page {
        if self.is_authenticated() {
            Page::Welcome
        } else {
            Page::Home
        }
    }

    // === Preferences ===

    /// Flip between dark and light, persisting the new value
    pub fn toggle_theme(&mut self) -> Result<Theme> {
        let theme = self.preferences.theme.toggled();
        self.store.save(KEY_THEME, theme.as_str())?;
        self.preferences.theme = theme;
        Ok(theme)
    }

    /// Switch the site language, persisting the new value
    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.store.save(KEY_LANGUAGE, language.code())?;
        self.preferences.language = language;
        Ok(())
    }

    // === Accessors ===

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn theme(&self) -> Theme {
        self.preferences.theme
    }

    pub fn language(&self) -> Language {
        self.preferences.language
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySessionStore;
    use crate::domain::RegistrationResponse;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;

    /// Gateway that answers every request the same way and records what it saw
    struct StubGateway {
        answer: std::result::Result<RegistrationResponse, String>,
        seen: Mutex<Vec<RegistrationRequest>>,
    }

    impl StubGateway {
        fn replying(answer: RegistrationResponse) -> Arc<Self> {
            Arc::new(Self {
                answer: Ok(answer),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn unreachable() -> Arc<Self> {
            Arc::new(Self {
                answer: Err(String::new()),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl RegistrationGateway for StubGateway {
        async fn register(&self, request: &RegistrationRequest) -> Result<RegistrationResponse> {
            self.seen.lock().unwrap().push(request.clone());
            self.answer.clone().map_err(Error::Gateway)
        }
    }

    /// Store whose writes start failing once `read_only` is set
    #[derive(Default)]
    struct SwitchableStore {
        inner: MemorySessionStore,
        read_only: AtomicBool,
    }

    impl SessionStore for SwitchableStore {
        fn save(&self, key: &str, value: &str) -> Result<()> {
            if self.read_only.load(Ordering::SeqCst) {
                return Err(Error::storage("disk full"));
            }
            self.inner.save(key, value)
        }

        fn load(&self, key: &str) -> Result<Option<String>> {
            self.inner.load(key)
        }

        fn remove(&self, key: &str) -> Result<()> {
            if self.read_only.load(Ordering::SeqCst) {
                return Err(Error::storage("disk full"));
            }
            self.inner.remove(key)
        }
    }

    fn controller_with(store: Arc<MemorySessionStore>) -> SessionController {
        let gateway = StubGateway::replying(RegistrationResponse::ok("User registered!"));
        SessionController::load(store, gateway).unwrap()
    }

    fn fresh() -> (Arc<MemorySessionStore>, SessionController) {
        let store = Arc::new(MemorySessionStore::new());
        let ctrl = controller_with(Arc::clone(&store));
        (store, ctrl)
    }

    fn stored_user(store: &MemorySessionStore) -> Option<User> {
        store
            .load(KEY_USER)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[test]
    fn test_fresh_load_defaults() {
        let (_, ctrl) = fresh();
        assert!(ctrl.user().is_none());
        assert_eq!(ctrl.page(), Page::Home);
        assert_eq!(ctrl.theme(), Theme::Dark);
        assert_eq!(ctrl.language(), Language::Az);
    }

    #[test]
    fn test_login_without_stored_user_synthesizes_one() {
        let (store, mut ctrl) = fresh();

        let user = ctrl.login("a@b.com", "x").unwrap();

        assert_eq!(user, User::new("a", "a@b.com"));
        assert_eq!(ctrl.user(), Some(&user));
        assert_eq!(ctrl.page(), Page::Welcome);
        assert_eq!(stored_user(&store), Some(user));
    }

    #[test]
    fn test_login_reactivates_stored_user_verbatim() {
        let leyla = User {
            name: "Leyla".into(),
            email: "l@x.com".into(),
            points: 40,
            tasks_completed: 2,
        };
        let store = Arc::new(MemorySessionStore::with_values([(
            KEY_USER,
            serde_json::to_string(&leyla).unwrap(),
        )]));
        let mut ctrl = controller_with(Arc::clone(&store));

        let user = ctrl.login("l@x.com", "anything").unwrap();

        assert_eq!(user, leyla);
        assert_eq!(ctrl.page(), Page::Welcome);
    }

    #[test]
    fn test_login_email_match_is_case_sensitive() {
        let stored = User::new("Leyla", "l@x.com");
        let store = Arc::new(MemorySessionStore::with_values([(
            KEY_USER,
            serde_json::to_string(&stored).unwrap(),
        )]));
        let mut ctrl = controller_with(Arc::clone(&store));

        let user = ctrl.login("L@x.com", "pw").unwrap();

        assert_eq!(user, User::new("L", "L@x.com"));
        assert_eq!(stored_user(&store), Some(user));
    }

    #[test]
    fn test_award_points_is_additive() {
        let (store, mut ctrl) = fresh();
        ctrl.login("a@b.com", "x").unwrap();

        let awards = [(10, 1), (0, 0), (25, 0), (5, 3), (0, 2)];
        for (points, tasks) in awards {
            ctrl.award_points(points, tasks).unwrap();
        }

        let user = ctrl.user().unwrap();
        assert_eq!(user.points, 40);
        assert_eq!(user.tasks_completed, 6);
        assert_eq!(stored_user(&store).as_ref(), Some(user));
    }

    #[test]
    fn test_award_points_while_anonymous_is_noop() {
        let (store, mut ctrl) = fresh();

        ctrl.award_points(50, 2).unwrap();

        assert!(ctrl.user().is_none());
        assert!(stored_user(&store).is_none());
        assert!(ctrl.take_notifications().is_empty());
        assert_eq!(ctrl.page(), Page::Home);
    }

    #[test]
    fn test_award_points_notifications() {
        let (_, mut ctrl) = fresh();
        ctrl.set_language(Language::En).unwrap();
        ctrl.login("a@b.com", "x").unwrap();

        ctrl.award_points(10, 2).unwrap();
        ctrl.award_points(5, 0).unwrap();
        ctrl.award_points(0, 1).unwrap();

        let notes = ctrl.take_notifications();
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].title, "🎉 Congratulations! You earned +10 points!");
        assert_eq!(notes[0].description.as_deref(), Some("2 tasks completed"));
        assert_eq!(notes[1].description.as_deref(), Some("Points added to your profile"));
        assert!(ctrl.take_notifications().is_empty());
    }

    #[test]
    fn test_protected_pages_redirect_when_anonymous() {
        let (_, mut ctrl) = fresh();
        assert_eq!(ctrl.navigate(Page::Profile), Page::Login);
        assert_eq!(ctrl.page(), Page::Login);
        assert_eq!(ctrl.navigate(Page::Welcome), Page::Login);
        assert_eq!(ctrl.navigate(Page::Map), Page::Map);
    }

    #[test]
    fn test_protected_pages_open_when_authenticated() {
        let (_, mut ctrl) = fresh();
        ctrl.login("a@b.com", "x").unwrap();
        assert_eq!(ctrl.navigate(Page::Profile), Page::Profile);
        assert_eq!(ctrl.page(), Page::Profile);
    }

    #[test]
    fn test_navigate_str_rejects_unknown_page() {
        let (_, mut ctrl) = fresh();
        assert!(ctrl.navigate_str("dashboard").is_err());
        assert_eq!(ctrl.page(), Page::Home);
        assert_eq!(ctrl.navigate_str("games-interactive").unwrap(), Page::GamesInteractive);
    }

    #[test]
    fn test_logout_clears_mirror() {
        let (store, mut ctrl) = fresh();
        ctrl.login("a@b.com", "x").unwrap();
        ctrl.navigate(Page::Profile);

        ctrl.logout().unwrap();

        assert!(ctrl.user().is_none());
        assert_eq!(ctrl.page(), Page::Home);
        assert_eq!(store.load(KEY_USER).unwrap(), None);

        let reloaded = controller_with(store);
        assert!(!reloaded.is_authenticated());
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let (store, mut ctrl) = fresh();

        assert_eq!(ctrl.toggle_theme().unwrap(), Theme::Light);
        assert_eq!(store.load(KEY_THEME).unwrap().as_deref(), Some("light"));

        assert_eq!(ctrl.toggle_theme().unwrap(), Theme::Dark);
        assert_eq!(store.load(KEY_THEME).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_preferences_survive_reload() {
        let (store, mut ctrl) = fresh();
        ctrl.toggle_theme().unwrap();
        ctrl.set_language(Language::Ru).unwrap();

        let reloaded = controller_with(store);
        assert_eq!(reloaded.theme(), Theme::Light);
        assert_eq!(reloaded.language(), Language::Ru);
    }

    #[test]
    fn test_corrupt_user_mirror_is_dropped() {
        let store = Arc::new(MemorySessionStore::with_values([(KEY_USER, "{not json")]));
        let ctrl = controller_with(Arc::clone(&store));

        assert!(ctrl.user().is_none());
        assert_eq!(store.load(KEY_USER).unwrap(), None);
    }

    #[test]
    fn test_home_target() {
        let (_, mut ctrl) = fresh();
        assert_eq!(ctrl.home_target(), Page::Home);
        ctrl.login("a@b.com", "x").unwrap();
        assert_eq!(ctrl.home_target(), Page::Welcome);
    }

    #[tokio::test]
    async fn test_register_success_activates_fresh_user() {
        let store = Arc::new(MemorySessionStore::new());
        let gateway = StubGateway::replying(RegistrationResponse::ok("User registered!"));
        let mut ctrl = SessionController::load(store.clone(), gateway.clone()).unwrap();

        let user = ctrl.register("Kim", "k@x.com", "secret").await.unwrap();

        assert_eq!(user, User::new("Kim", "k@x.com"));
        assert_eq!(ctrl.page(), Page::Welcome);
        assert_eq!(stored_user(&store), Some(user));
        assert_eq!(
            gateway.seen.lock().unwrap().as_slice(),
            &[RegistrationRequest::new("Kim", "k@x.com", "secret")]
        );
    }

    #[tokio::test]
    async fn test_register_failure_keeps_user_and_surfaces_message() {
        let store = Arc::new(MemorySessionStore::new());
        let gateway = StubGateway::replying(RegistrationResponse::fail("DB error"));
        let mut ctrl = SessionController::load(store.clone(), gateway).unwrap();

        let err = ctrl.register("Kim", "k@x.com", "secret").await.unwrap_err();

        assert_eq!(err.to_string(), "DB error");
        assert!(ctrl.user().is_none());
        assert!(stored_user(&store).is_none());
        assert_eq!(ctrl.page(), Page::Home);
    }

    #[tokio::test]
    async fn test_register_failure_does_not_replace_active_user() {
        let store = Arc::new(MemorySessionStore::new());
        let gateway = StubGateway::replying(RegistrationResponse::fail("DB error"));
        let mut ctrl = SessionController::load(store.clone(), gateway).unwrap();
        let active = ctrl.login("a@b.com", "x").unwrap();

        assert!(ctrl.register("Kim", "k@x.com", "secret").await.is_err());

        assert_eq!(ctrl.user(), Some(&active));
        assert_eq!(stored_user(&store), Some(active));
    }

    #[tokio::test]
    async fn test_register_unreachable_gateway_uses_localized_message() {
        let store = Arc::new(MemorySessionStore::with_values([(KEY_LANGUAGE, "en")]));
        let mut ctrl = SessionController::load(store, StubGateway::unreachable()).unwrap();

        let err = ctrl.register("Kim", "k@x.com", "secret").await.unwrap_err();

        assert_eq!(err.to_string(), "Server error");
        assert!(ctrl.user().is_none());
    }

    #[tokio::test]
    async fn test_failed_writes_leave_memory_untouched() {
        let store = Arc::new(SwitchableStore::default());
        let gateway = StubGateway::replying(RegistrationResponse::ok("User registered!"));
        let mut ctrl = SessionController::load(store.clone(), gateway).unwrap();
        let active = ctrl.login("a@b.com", "x").unwrap();
        store.read_only.store(true, Ordering::SeqCst);

        assert!(ctrl.award_points(10, 1).is_err());
        assert_eq!(ctrl.user(), Some(&active));
        assert!(ctrl.take_notifications().is_empty());

        assert!(ctrl.logout().is_err());
        assert!(ctrl.is_authenticated());

        assert!(ctrl.toggle_theme().is_err());
        assert_eq!(ctrl.theme(), Theme::Dark);

        assert!(ctrl.set_language(Language::Ru).is_err());
        assert_eq!(ctrl.language(), Language::Az);

        assert!(ctrl.register("Kim", "k@x.com", "secret").await.is_err());
        assert_eq!(ctrl.user(), Some(&active));

        let mirror: User = serde_json::from_str(&store.load(KEY_USER).unwrap().unwrap()).unwrap();
        assert_eq!(mirror, User::new("a", "a@b.com"));
    }
}
