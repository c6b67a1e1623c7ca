/// Commands the bot answers besides the configured link lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Query,
    Bind,
    MyInfo,
    MyExp,
    Inspect,
    Unbind,
    ListWeb,
    ListAll,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        let command = match name {
            "%查询" | "%查詢" => Command::Query,
            "%绑定" | "%綁定" => Command::Bind,
            "%我的信息" => Command::MyInfo,
            "%我的经验" | "%我的經驗" => Command::MyExp,
            "%查岗" | "%查崗" => Command::Inspect,
            "%解绑" | "%解綁" => Command::Unbind,
            "listweb" => Command::ListWeb,
            "listall" => Command::ListAll,
            _ => return None,
        };
        Some(command)
    }
}

/// A message split into its leading word and first argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage<'a> {
    pub name: &'a str,
    pub argument: Option<&'a str>,
}

pub fn parse_message(text: &str) -> Option<ParsedMessage<'_>> {
    let mut parts = text.split_whitespace();
    let name = parts.next()?;
    Some(ParsedMessage {
        name,
        argument: parts.next(),
    })
}
