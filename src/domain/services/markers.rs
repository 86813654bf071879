// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::node::Element;
use scraper::{ElementRef, Selector};
use thiserror::Error;

/// 提取器错误类型
#[derive(Error, Debug, Clone)]
pub enum ExtractionError {
    /// 选择器编译失败
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// 结构标记
///
/// 页面布局变化时依旧稳定的属性或样式类，用来定位条目中的特定角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// 属性值以指定前缀开头
    AttrPrefix {
        attr: &'static str,
        prefix: &'static str,
    },
    /// 属性值完全相等
    AttrEquals {
        attr: &'static str,
        value: &'static str,
    },
    /// 带有指定样式类
    Class(&'static str),
}

impl Marker {
    /// 判断元素是否带有该标记
    pub fn matches(&self, element: &Element) -> bool {
        match *self {
            Marker::AttrPrefix { attr, prefix } => element
                .attr(attr)
                .is_some_and(|value| value.starts_with(prefix)),
            Marker::AttrEquals { attr, value } => element.attr(attr) == Some(value),
            Marker::Class(class) => element.classes().any(|c| c == class),
        }
    }

    fn css(&self, tag: &str) -> String {
        match *self {
            Marker::AttrPrefix { attr, prefix } => format!(r#"{}[{}^="{}"]"#, tag, attr, prefix),
            Marker::AttrEquals { attr, value } => format!(r#"{}[{}="{}"]"#, tag, attr, value),
            Marker::Class(class) => format!("{}.{}", tag, class),
        }
    }
}

/// 标记查询
///
/// 在文档树上查找“标签名 + 结构标记”匹配的元素，可选地再下钻到某个后代标签。
#[derive(Debug, Clone)]
pub struct MarkerQuery {
    selector: Selector,
    css: String,
}

impl MarkerQuery {
    /// 编译查询
    ///
    /// # 参数
    ///
    /// * `tag` - 元素标签名
    /// * `marker` - 结构标记
    pub fn new(tag: &str, marker: Marker) -> Result<Self, ExtractionError> {
        Self::compile(marker.css(tag))
    }

    /// 编译查询，匹配标记元素下的某个后代标签
    pub fn descendant(tag: &str, marker: Marker, child: &str) -> Result<Self, ExtractionError> {
        Self::compile(format!("{} {}", marker.css(tag), child))
    }

    /// 编译只按标签名匹配的查询
    pub fn tag(tag: &str) -> Result<Self, ExtractionError> {
        Self::compile(tag.to_string())
    }

    fn compile(css: String) -> Result<Self, ExtractionError> {
        let selector = Selector::parse(&css)
            .map_err(|e| ExtractionError::InvalidSelector(format!("{}: {:?}", css, e)))?;
        Ok(Self { selector, css })
    }

    /// 按文档顺序返回范围内所有匹配的元素
    pub fn find_all<'a>(&'a self, scope: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        scope.select(&self.selector)
    }

    /// 返回范围内第一个匹配的元素
    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope.select(&self.selector).next()
    }

    pub fn css(&self) -> &str {
        &self.css
    }
}

/// 元素的文本内容，连续空白折叠为单个空格并去掉首尾空白
pub fn trimmed_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 紧随其后的第一个指定标签的兄弟元素
pub fn next_sibling_tag<'a>(element: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    element
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|sibling| sibling.value().name() == tag)
}
