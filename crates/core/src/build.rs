use crate::merge::{merge_element_classes, ElementClasses};
use crate::naming::NamingConfig;
use crate::normalize::{normalize_prefixes, AsPrefix};
use crate::types::{ClassList, StateFlags};
use tracing::trace;

/// 主 build 函数
///
/// 为每个 prefix 生成 element 名（`prefix-tail`）以及每个启用 state 的
/// 类名（`prefix-tail-state`），以空格连接返回。
///
/// # 参数
///
/// * `prefixes` - 类名根，可含缺省项（`None` / 空串）或以空格分隔的多个名字
/// * `tail` - element 名，为空时 element 名就是 prefix 本身
/// * `states` - 状态标记，只有为 true 的 state 参与生成
///
/// ```
/// use classnamer_core::{build, StateFlags};
///
/// let states = StateFlags::new().with("active", true);
/// let classes = build(["Card", "custom"], "actions", &states);
/// assert_eq!(
///     classes,
///     "Card-actions Card-actions-active custom-actions custom-actions-active"
/// );
/// ```
pub fn build<I>(prefixes: I, tail: &str, states: &StateFlags) -> String
where
    I: IntoIterator,
    I::Item: AsPrefix,
{
    ClassNamer::new(prefixes).build_with(tail, states)
}

/// 固定 prefix 的类名生成器
///
/// 一次给定 prefix，之后可用不同的 tail / states 反复生成：
///
/// ```
/// use classnamer_core::{ClassNamer, StateFlags};
///
/// let namer = ClassNamer::new(["Menu"]);
/// assert_eq!(namer.build(""), "Menu");
/// assert_eq!(namer.build("item"), "Menu-item");
///
/// let item = namer.element("item");
/// let states = StateFlags::new().with("selected", true);
/// assert_eq!(item.build_with(&states), "Menu-item Menu-item-selected");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNamer {
    prefixes: Vec<String>,
    config: NamingConfig,
}

impl ClassNamer {
    pub fn new<I>(prefixes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsPrefix,
    {
        Self::with_config(prefixes, NamingConfig::default())
    }

    pub fn with_config<I>(prefixes: I, config: NamingConfig) -> Self
    where
        I: IntoIterator,
        I::Item: AsPrefix,
    {
        Self {
            prefixes: normalize_prefixes(prefixes),
            config,
        }
    }

    /// 规范化后的 prefix
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// 再固定 tail，得到某个 element 的生成器
    pub fn element(&self, tail: impl Into<String>) -> Element<'_> {
        Element {
            namer: self,
            tail: tail.into(),
        }
    }

    pub fn build(&self, tail: &str) -> String {
        self.class_list(tail, &StateFlags::new()).to_string()
    }

    pub fn build_with(&self, tail: &str, states: &StateFlags) -> String {
        self.class_list(tail, states).to_string()
    }

    /// 生成类名集合（未拼接成字符串）
    pub fn class_list(&self, tail: &str, states: &StateFlags) -> ClassList {
        trace!(
            prefixes = self.prefixes.len(),
            states = states.len(),
            tail,
            "composing class names"
        );

        let groups = self.element_names(tail).map(|element| {
            let state_classes = states
                .active()
                .map(|state| self.config.state_name(&element, state))
                .collect();
            ElementClasses {
                element,
                states: state_classes,
            }
        });

        merge_element_classes(groups)
    }

    /// 把输出中的某个类名还原为它所属的 element 名
    ///
    /// 类名本身是 element 名时原样返回；否则尝试去掉某个启用 state 的后缀。
    /// 无法由当前 prefix / tail / states 推导出的类名返回 `None`。
    pub fn element_of(&self, class: &str, tail: &str, states: &StateFlags) -> Option<String> {
        let elements: Vec<String> = self.element_names(tail).collect();

        if elements.iter().any(|element| element == class) {
            return Some(class.to_string());
        }

        states.active().find_map(|state| {
            let element = class
                .strip_suffix(state)?
                .strip_suffix(self.config.state_separator())?;
            elements
                .iter()
                .find(|candidate| candidate.as_str() == element)
                .cloned()
        })
    }

    fn element_names<'a>(&'a self, tail: &'a str) -> impl Iterator<Item = String> + 'a {
        self.prefixes
            .iter()
            .map(move |prefix| self.config.element_name(prefix, tail))
    }
}

/// 固定了 prefix 与 tail 的生成器，只差 states
#[derive(Debug, Clone)]
pub struct Element<'a> {
    namer: &'a ClassNamer,
    tail: String,
}

impl Element<'_> {
    pub fn tail(&self) -> &str {
        &self.tail
    }

    pub fn build(&self) -> String {
        self.namer.build(&self.tail)
    }

    pub fn build_with(&self, states: &StateFlags) -> String {
        self.namer.build_with(&self.tail, states)
    }

    pub fn class_list(&self, states: &StateFlags) -> ClassList {
        self.namer.class_list(&self.tail, states)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn loading() -> StateFlags {
        StateFlags::new().with("is-loading", true)
    }

    fn tokens(classes: &str) -> Vec<&str> {
        classes.split(' ').collect()
    }

    #[test]
    fn test_build_single_prefix() {
        assert_eq!(build(["root"], "", &StateFlags::new()), "root");
    }

    #[test]
    fn test_build_separates_prefixes_by_space() {
        assert_eq!(build(["root", "foo"], "", &StateFlags::new()), "root foo");
    }

    #[test]
    fn test_build_unique_prefixes() {
        assert_eq!(build(["root", "root"], "", &StateFlags::new()), "root");
        assert_eq!(build(["root", "root"], "foo", &StateFlags::new()), "root-foo");
    }

    #[test]
    fn test_build_tail() {
        assert_eq!(build(["root"], "foo", &StateFlags::new()), "root-foo");
    }

    #[test]
    fn test_build_tail_appends_to_each_prefix() {
        let classes = build(["root", "second"], "foo", &StateFlags::new());
        assert_eq!(tokens(&classes), vec!["root-foo", "second-foo"]);
    }

    #[test]
    fn test_build_truthy_state() {
        let classes = build(["root"], "", &loading());
        assert_eq!(tokens(&classes), vec!["root", "root-is-loading"]);
    }

    #[test]
    fn test_build_falsy_state() {
        let states = StateFlags::new().with("is-loading", false);
        assert_eq!(build(["root"], "", &states), "root");
    }

    #[test]
    fn test_build_state_applies_to_each_prefix_with_tail() {
        let classes = build(["root", "foo"], "element", &loading());
        assert_eq!(
            tokens(&classes),
            vec![
                "root-element",
                "root-element-is-loading",
                "foo-element",
                "foo-element-is-loading"
            ]
        );
    }

    #[test]
    fn test_build_splits_prefix_with_space() {
        let classes = build(["root", "foo bar"], "", &loading());
        assert_eq!(
            tokens(&classes),
            vec!["root", "root-is-loading", "foo", "foo-is-loading", "bar", "bar-is-loading"]
        );
    }

    #[test]
    fn test_build_skips_absent_prefixes() {
        let classes = build([None, Some("root"), Some("")], "foo", &StateFlags::new());
        assert_eq!(classes, "root-foo");
    }

    #[test]
    fn test_build_no_prefixes() {
        assert_eq!(build(Vec::<String>::new(), "foo", &loading()), "");
    }

    #[test]
    fn test_false_state_never_removes_element_name() {
        // prefix "a" 的 state "s" 为 false，但 "a-s" 作为另一个 prefix 的 element 名必须保留
        let states = StateFlags::new().with("s", false);
        assert_eq!(build(["a-s", "a"], "", &states), "a-s a");
        assert_eq!(build(["a", "a-s"], "", &states), "a a-s");
    }

    #[test]
    fn test_coinciding_state_and_element_collapse() {
        let states = StateFlags::new().with("s", true);
        assert_eq!(build(["a", "a-s"], "", &states), "a a-s a-s-s");
    }

    #[test]
    fn test_whitespace_in_tail_keeps_tokens_unique() {
        let classes = build(["a", "b"], "x y", &StateFlags::new());
        assert_eq!(classes, "a-x y b-x");

        let list = ClassNamer::new(["a"]).class_list("x y", &StateFlags::new());
        assert!(list.contains("a-x"));
        assert!(list.contains("y"));
    }

    #[test]
    fn test_whitespace_in_state_keeps_tokens_unique() {
        let states = StateFlags::new().with("is loading", true);
        let classes = build(["a", "b"], "", &states);
        assert_eq!(classes, "a a-is loading b b-is");
        assert_eq!(
            classes.split_whitespace().count(),
            ClassList::parse(&classes).len()
        );
    }

    #[test]
    fn test_namer_reuse() {
        let namer = ClassNamer::new(["root", "custom"]);
        assert_eq!(namer.build(""), "root custom");
        assert_eq!(namer.build("title"), "root-title custom-title");
        assert_eq!(
            namer.build_with("title", &loading()),
            "root-title root-title-is-loading custom-title custom-title-is-loading"
        );
    }

    #[test]
    fn test_element_builder() {
        let namer = ClassNamer::new(["root"]);
        let element = namer.element("body");
        assert_eq!(element.tail(), "body");
        assert_eq!(element.build(), "root-body");
        assert_eq!(element.build_with(&loading()), "root-body root-body-is-loading");
        assert!(element.class_list(&loading()).contains("root-body-is-loading"));
    }

    #[test]
    fn test_namer_with_bem_config() {
        let namer = ClassNamer::with_config(["Card"], NamingConfig::bem());
        let states = StateFlags::new().with("active", true);
        assert_eq!(
            namer.build_with("actions", &states),
            "Card__actions Card__actions--active"
        );
    }

    #[test]
    fn test_namer_prefixes_normalized() {
        let namer = ClassNamer::new(["root foo", "root"]);
        assert_eq!(namer.prefixes(), ["root", "foo"]);
    }

    #[test]
    fn test_element_of() {
        let namer = ClassNamer::new(["root", "foo"]);
        let states = loading();
        assert_eq!(
            namer.element_of("root-el", "el", &states),
            Some("root-el".to_string())
        );
        assert_eq!(
            namer.element_of("foo-el-is-loading", "el", &states),
            Some("foo-el".to_string())
        );
        assert_eq!(namer.element_of("bar-el", "el", &states), None);
        assert_eq!(namer.element_of("root-el-is-empty", "el", &states), None);
    }

    #[test]
    fn test_element_of_ignores_inactive_state() {
        let namer = ClassNamer::new(["root"]);
        let states = StateFlags::new().with("is-loading", false);
        assert_eq!(namer.element_of("root-is-loading", "", &states), None);
    }
}
