use crate::api::messages;
use crate::modules::binding::BindingStore;
use crate::modules::trend::Snapshot;
use crate::utils::client::{ApiError, ApiResult, GameApi};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::{info, warn};

/// Characters left alone by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn profile_url(name: &str) -> String {
    format!(
        "{}{}",
        messages::PROFILE_URL,
        utf8_percent_encode(name, URI_COMPONENT)
    )
}

pub fn format_profile(snapshot: &Snapshot, queried_name: &str) -> String {
    format!(
        "{} ({}@{})\n{} | Lv.{} ({:.3}%)\n\n详细信息: \n{}",
        snapshot.character_name,
        snapshot.world_name,
        snapshot.guild_or_default(),
        snapshot.character_class,
        snapshot.level,
        snapshot.exp_rate,
        profile_url(queried_name)
    )
}

pub fn failure_message(error: &ApiError) -> &'static str {
    if error.is_service_error() {
        messages::CHARACTER_NOT_FOUND
    } else {
        messages::QUERY_FAILED
    }
}

pub async fn fetch_latest(api: &dyn GameApi, name: &str) -> ApiResult<Snapshot> {
    let id = api.lookup_character_id(name).await?;
    api.get_snapshot(&id, None).await
}

pub async fn query_profile(api: &dyn GameApi, name: &str) -> String {
    match fetch_latest(api, name).await {
        Ok(snapshot) => format_profile(&snapshot, name),
        Err(e) => {
            warn!(character = name, error = %e, "Profile query failed");
            failure_message(&e).to_string()
        }
    }
}

/// Looks up the user's binding, mapping storage faults to a reply.
pub fn bound_character(store: &dyn BindingStore, user_id: &str) -> Result<Option<String>, String> {
    store.get(user_id).map_err(|e| {
        warn!(user = user_id, error = %e, "Failed to read binding");
        messages::STORAGE_FAILED.to_string()
    })
}

pub fn bind(store: &dyn BindingStore, user_id: &str, character_name: &str) -> String {
    match store.insert_if_absent(user_id, character_name) {
        Ok(Some(current)) => format!(
            "{} 已与 {} 绑定，如需换绑，先使用\"%解绑\"后再次绑定。",
            user_id, current
        ),
        Ok(None) => {
            info!(user = user_id, character = character_name, "Bound character");
            format!("已成功绑定 {} 与 {}", user_id, character_name)
        }
        Err(e) => {
            warn!(user = user_id, error = %e, "Failed to save binding");
            messages::STORAGE_FAILED.to_string()
        }
    }
}

pub fn unbind(store: &dyn BindingStore, user_id: &str) -> String {
    match store.remove(user_id) {
        Ok(Some(previous)) => {
            info!(user = user_id, character = %previous, "Removed binding");
            format!("成功解绑 {} 与 {} 的关联", user_id, previous)
        }
        Ok(None) => messages::NOT_BOUND_UNBIND.to_string(),
        Err(e) => {
            warn!(user = user_id, error = %e, "Failed to remove binding");
            messages::STORAGE_FAILED.to_string()
        }
    }
}
