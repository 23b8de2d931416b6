use crate::roblox::Kind;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub users_url: String,
    pub groups_url: String,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(users_url: String, groups_url: String) -> Self {
        Self {
            users_url,
            groups_url,
        }
    }

    #[must_use]
    pub fn base_url(&self, kind: Kind) -> &str {
        match kind {
            Kind::User => &self.users_url,
            Kind::Group => &self.groups_url,
        }
    }
}

impl Default for GlobalArgs {
    fn default() -> Self {
        Self::new(
            Kind::User.default_base_url().to_string(),
            Kind::Group.default_base_url().to_string(),
        )
    }
}
