use strum::{EnumIter, IntoStaticStr};

/// Environment keys reported on the admin diagnostics checklist, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    RoomPassword,
    RoomAuthSecret,
    LivekitUrl,
    LivekitApiKey,
    LivekitApiSecret,
    AdminPassword,
}

impl ConfigKey {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
