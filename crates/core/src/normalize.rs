use indexmap::IndexSet;
use std::borrow::Cow;

/// 可作为 prefix 的输入
///
/// `None` 对应缺省的 prefix，会在规范化时被丢弃。
pub trait AsPrefix {
    fn as_prefix(&self) -> Option<&str>;
}

impl AsPrefix for str {
    fn as_prefix(&self) -> Option<&str> {
        Some(self)
    }
}

impl AsPrefix for String {
    fn as_prefix(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl AsPrefix for Cow<'_, str> {
    fn as_prefix(&self) -> Option<&str> {
        Some(self.as_ref())
    }
}

impl<T: AsPrefix + ?Sized> AsPrefix for &T {
    fn as_prefix(&self) -> Option<&str> {
        (**self).as_prefix()
    }
}

impl<T: AsPrefix> AsPrefix for Option<T> {
    fn as_prefix(&self) -> Option<&str> {
        self.as_ref().and_then(|prefix| prefix.as_prefix())
    }
}

/// 规范化 prefix 列表
///
/// 功能：
/// 1. 丢弃缺省 / 空字符串
/// 2. 按空白拆分（`"foo bar"` → `foo`, `bar`）
/// 3. 去重，保留首次出现的顺序
pub fn normalize_prefixes<I>(prefixes: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsPrefix,
{
    let mut unique: IndexSet<String> = IndexSet::new();

    for prefix in prefixes {
        let Some(raw) = prefix.as_prefix() else {
            continue;
        };
        for token in raw.split_whitespace() {
            if !unique.contains(token) {
                unique.insert(token.to_string());
            }
        }
    }

    unique.into_iter().collect()
}
