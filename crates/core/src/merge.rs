use crate::types::ClassList;

/// 单个 prefix 产出的类名：element 名及其启用的 state 名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementClasses {
    pub element: String,
    pub states: Vec<String>,
}

/// 合并各 prefix 产出的类名
///
/// 功能：
/// - 按 prefix 顺序依次放入 element 名和其 state 名
/// - 重名的类只保留第一次出现的位置（并集，不会被后来者移除）
pub fn merge_element_classes<I>(groups: I) -> ClassList
where
    I: IntoIterator<Item = ElementClasses>,
{
    let mut classes = ClassList::new();

    for group in groups {
        classes.insert(group.element);
        classes.extend(group.states);
    }

    classes
}
