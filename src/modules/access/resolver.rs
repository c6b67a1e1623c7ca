use crate::api::types::ChannelContext;
use crate::config::{BotConfig, KeywordRule, LinkList, MapleConfig};
use std::collections::HashSet;

/// A feature that can be restricted to a set of channels.
pub trait AccessItem {
    fn use_global_whitelist(&self) -> bool;
    fn self_whitelist(&self) -> &[String];
}

impl AccessItem for MapleConfig {
    fn use_global_whitelist(&self) -> bool {
        self.use_global_whitelist
    }

    fn self_whitelist(&self) -> &[String] {
        &self.self_whitelist
    }
}

impl AccessItem for LinkList {
    fn use_global_whitelist(&self) -> bool {
        self.use_global_whitelist
    }

    fn self_whitelist(&self) -> &[String] {
        &self.self_whitelist
    }
}

impl AccessItem for KeywordRule {
    fn use_global_whitelist(&self) -> bool {
        self.use_global_whitelist
    }

    fn self_whitelist(&self) -> &[String] {
        &self.self_whitelist
    }
}

/// Global whitelist and admin settings, frozen at startup.
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    pub whitelist_mode: bool,
    pub whitelist: HashSet<String>,
    pub admins: HashSet<String>,
}

impl AccessPolicy {
    pub fn new<W, A>(whitelist_mode: bool, whitelist: W, admins: A) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            whitelist_mode,
            whitelist: whitelist.into_iter().map(Into::into).collect(),
            admins: admins.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &BotConfig) -> Self {
        Self::new(
            config.whitelist_mode,
            config.whitelist.iter().cloned(),
            config.admins.iter().cloned(),
        )
    }

    pub fn is_admin(&self, user_id: &str) -> bool {
        self.admins.contains(user_id)
    }

    pub fn can_use<I: AccessItem + ?Sized>(&self, ctx: &ChannelContext, item: &I) -> bool {
        can_use(ctx, self, item)
    }
}

pub fn can_use<I: AccessItem + ?Sized>(ctx: &ChannelContext, policy: &AccessPolicy, item: &I) -> bool {
    let channel_id = match ctx.channel_id.as_deref() {
        Some(id) => id,
        None => return true,
    };

    if item.use_global_whitelist() {
        return !policy.whitelist_mode || policy.whitelist.contains(channel_id);
    }

    let own = item.self_whitelist();
    own.is_empty() || own.iter().any(|id| id == channel_id)
}
