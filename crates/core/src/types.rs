use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 状态标记：state 名 -> 是否启用
///
/// 保持插入顺序，输出因此是确定的。重复插入同名 state 时后者覆盖前者。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateFlags {
    flags: IndexMap<String, bool>,
}

impl StateFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// builder 风格的插入
    ///
    /// ```
    /// use classnamer_core::StateFlags;
    ///
    /// let states = StateFlags::new().with("is-loading", true).with("is-empty", false);
    /// assert!(states.is_active("is-loading"));
    /// assert!(!states.is_active("is-empty"));
    /// ```
    pub fn with(mut self, name: impl Into<String>, active: bool) -> Self {
        self.insert(name, active);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, active: bool) -> Option<bool> {
        self.flags.insert(name.into(), active)
    }

    /// 未出现的 state 视为未启用
    pub fn is_active(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }

    /// 所有启用的 state 名，按插入顺序
    pub fn active(&self) -> impl Iterator<Item = &str> + '_ {
        self.flags
            .iter()
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.flags.iter().map(|(name, active)| (name.as_str(), *active))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for StateFlags {
    fn from_iter<T: IntoIterator<Item = (K, bool)>>(iter: T) -> Self {
        let mut states = StateFlags::new();
        for (name, active) in iter {
            states.insert(name, active);
        }
        states
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for StateFlags {
    fn from(entries: [(K, bool); N]) -> Self {
        entries.into_iter().collect()
    }
}

/// 生成的类名集合
///
/// 每个类名只出现一次，按生成顺序排列；`Display` 输出以空格分隔的字符串。
/// 插入时按空白拆分，集合中的每一项都是单个 token（含空白的 tail / state
/// 名会被拆成多个类名，与浏览器解析 class 属性的结果一致）。
/// 相等比较不考虑顺序（类名本身是无序集合）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: IndexSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 拆分已有的 class 字符串
    pub fn parse(input: &str) -> Self {
        input.split_whitespace().collect()
    }

    /// 插入类名（按空白拆分），没有新增任何 token 时返回 false
    pub fn insert(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if !class.contains(char::is_whitespace) {
            return !class.is_empty() && self.classes.insert(class);
        }

        let mut inserted = false;
        for token in class.split_whitespace() {
            if !self.classes.contains(token) {
                self.classes.insert(token.to_string());
                inserted = true;
            }
        }
        inserted
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.classes.into_iter().collect()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, class) in self.classes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(class)?;
        }
        Ok(())
    }
}

impl From<ClassList> for String {
    fn from(list: ClassList) -> Self {
        list.to_string()
    }
}

impl<S: Into<String>> FromIterator<S> for ClassList {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut list = ClassList::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for ClassList {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl IntoIterator for ClassList {
    type Item = String;
    type IntoIter = indexmap::set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}
