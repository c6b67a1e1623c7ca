use crate::api::messages;
use crate::config::{KeywordRule, LinkList};
use std::fmt::Write;

pub fn link_reply(list: &LinkList) -> String {
    if list.websites.is_empty() {
        return messages::NO_LINKS.to_string();
    }
    list.websites.join("\n")
}

pub fn find_list<'a>(lists: &'a [LinkList], name: &str) -> Option<&'a LinkList> {
    lists.iter().find(|list| {
        let trimmed = list.name.trim();
        !trimmed.is_empty() && trimmed == name
    })
}

fn describe(list: &LinkList) -> String {
    format!("【{}】\n{}", list.name, list.websites.join("\n"))
}

pub fn list_web(lists: &[LinkList]) -> String {
    if lists.is_empty() {
        return messages::NO_LINKS.to_string();
    }
    let body: Vec<String> = lists.iter().map(describe).collect();
    format!("=== 指令 ===\n{}", body.join("\n"))
}

pub fn list_all(lists: &[LinkList], keywords: &[KeywordRule]) -> String {
    let mut out = String::from("=== 当前网页查询指令 ===\n");
    if lists.is_empty() {
        out.push_str(messages::NONE_YET);
        out.push('\n');
    } else {
        for list in lists {
            out.push_str(&describe(list));
            out.push('\n');
        }
    }

    out.push_str("\n=== 当前关键词监听 ===\n");
    if keywords.is_empty() {
        out.push_str(messages::NONE_YET);
        out.push('\n');
    } else {
        for rule in keywords {
            let _ = writeln!(out, "监听：{} → 回复：{}", rule.listening, rule.reply);
        }
    }

    out.trim_end().to_string()
}
