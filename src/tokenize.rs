//! 分词 - 按非单词字符切分并转小写

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::ProbeError;

/// 单词分隔符：连续的非单词字符
const WORD_SEPARATOR: &str = r"\W+";

static SHARED: OnceCell<Tokenizer> = OnceCell::new();

/// 行分词器
#[derive(Debug, Clone)]
pub struct Tokenizer {
    separator: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self, ProbeError> {
        Ok(Self {
            separator: Regex::new(WORD_SEPARATOR)?,
        })
    }

    /// 进程内共享的分词器
    pub fn shared() -> Result<&'static Tokenizer, ProbeError> {
        SHARED.get_or_try_init(Tokenizer::new)
    }

    /// 切分一行文本，丢弃空片段，结果为小写
    pub fn tokenize<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        self.separator
            .split(line)
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(line: &str) -> Vec<String> {
        Tokenizer::new().unwrap().tokenize(line).collect()
    }

    #[test]
    fn test_split_and_lowercase() {
        assert_eq!(words("The quick, brown FOX!"), vec!["the", "quick", "brown", "fox"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_chars() {
        assert_eq!(words("snake_case -- 42nd"), vec!["snake_case", "42nd"]);
    }

    #[test]
    fn test_empty_and_punctuation_lines() {
        assert!(words("").is_empty());
        assert!(words("  ...!!  \n").is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(words("Über café"), vec!["über", "café"]);
    }

    #[test]
    fn test_shared_instance() {
        let first = Tokenizer::shared().unwrap();
        let second = Tokenizer::shared().unwrap();
        assert!(std::ptr::eq(first, second));
    }
}
