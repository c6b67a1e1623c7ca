use crate::api::types::ChannelContext;
use crate::config::KeywordRule;
use crate::modules::access::AccessPolicy;
use regex::{Regex, RegexBuilder};
use tracing::warn;

pub struct CompiledKeyword {
    pub rule: KeywordRule,
    pattern: Regex,
}

impl CompiledKeyword {
    pub fn compile(rule: KeywordRule) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(&rule.listening)
            .case_insensitive(true)
            .build()?;
        Ok(Self { rule, pattern })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

/// Compiles every rule; rules with an invalid pattern are logged and dropped.
pub fn compile_keywords(rules: &[KeywordRule]) -> Vec<CompiledKeyword> {
    rules
        .iter()
        .cloned()
        .filter_map(|rule| {
            let listening = rule.listening.clone();
            match CompiledKeyword::compile(rule) {
                Ok(compiled) => Some(compiled),
                Err(e) => {
                    warn!(pattern = %listening, error = %e, "Skipping invalid keyword pattern");
                    None
                }
            }
        })
        .collect()
}

/// Reply of the first permitted rule whose pattern matches.
pub fn match_keyword<'a>(
    keywords: &'a [CompiledKeyword],
    ctx: &ChannelContext,
    policy: &AccessPolicy,
    text: &str,
) -> Option<&'a str> {
    keywords
        .iter()
        .filter(|keyword| policy.can_use(ctx, &keyword.rule))
        .find(|keyword| keyword.is_match(text))
        .map(|keyword| keyword.rule.reply.as_str())
}
