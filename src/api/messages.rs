//! Fixed replies shown to chat users.

pub const QUERY_USAGE: &str = "请提供角色名, 用法: %查询 角色名(仅限TMS)";
pub const BIND_USAGE: &str = "请提供角色名，用法: %绑定 角色名";
pub const NAME_REQUIRED: &str = "请提供角色名";
pub const NOT_BOUND_INFO: &str = "您尚未绑定角色名，请使用 %绑定 角色名 指令进行绑定";
pub const NOT_BOUND_EXP: &str = "你尚未绑定角色名，使用 %绑定 角色名 指令进行绑定";
pub const NOT_BOUND_UNBIND: &str = "你尚未绑定角色名，无需解绑";
pub const API_KEY_MISSING: &str = "API密钥未设置，请联系管理员配置apiKey";
pub const CHARACTER_NOT_FOUND: &str = "查询失败，请检查角色名(仅限TMS)";
pub const QUERY_FAILED: &str = "查询失败，请稍后再试或联系管理员";
pub const INSUFFICIENT_DATA: &str = "网络错误（";
pub const STORAGE_FAILED: &str = "绑定数据读写失败，请联系管理员";
pub const NO_LINKS: &str = "暂无或忘了（";
pub const NONE_YET: &str = "（暂无）";
pub const PROFILE_URL: &str = "https://maplescouter.com/info?name=";
