use futures::future::LocalBoxFuture;

use crate::config::LoaderConfig;
use crate::loading_state::{LoadingOptions, LoadingState};
use crate::models::User;
use crate::screens::{RefreshFlag, Screen};
use crate::services::ApiService;

pub struct ProfileScreen {
    api: ApiService,
    pub user: LoadingState<User>,
    refreshing: RefreshFlag,
}

impl ProfileScreen {
    pub fn new(api: ApiService, config: &LoaderConfig) -> Self {
        Self {
            api,
            user: LoadingState::new("user", LoadingOptions::loading(), config.clone()),
            refreshing: RefreshFlag::default(),
        }
    }

    pub fn display_name(&self) -> String {
        self.user
            .data()
            .map(|u| u.name)
            .unwrap_or_else(|| "User Name".to_string())
    }

    pub fn display_email(&self) -> String {
        self.user
            .data()
            .map(|u| u.email)
            .unwrap_or_else(|| "user@example.com".to_string())
    }

    async fn load_user(&self) {
        log::info!("👤 Loading profile screen");
        let api = &self.api;
        let _ = self.user.execute(|| api.get_user()).await;
    }
}

impl Screen for ProfileScreen {
    fn name(&self) -> &'static str {
        "profile"
    }

    fn load(&self) -> LocalBoxFuture<'_, ()> {
        Box::pin(self.load_user())
    }

    fn refresh_flag(&self) -> &RefreshFlag {
        &self.refreshing
    }
}
