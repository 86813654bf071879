// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::Utc;
use metrics::counter;
use scraper::{ElementRef, Html};
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::models::product::{ProductFields, ProductRecord};
use crate::domain::services::markers::{
    next_sibling_tag, trimmed_text, ExtractionError, Marker, MarkerQuery,
};

/// 条目容器标记：`data-test` 以 `post-item` 开头
const POST_ITEM: Marker = Marker::AttrPrefix {
    attr: "data-test",
    prefix: "post-item",
};

/// 产品名称标记：`data-test` 以 `post-name-` 开头
const POST_NAME: Marker = Marker::AttrPrefix {
    attr: "data-test",
    prefix: "post-name-",
};

const VOTE_BUTTON: Marker = Marker::AttrEquals {
    attr: "data-test",
    value: "vote-button",
};

const TAG_LIST: Marker = Marker::AttrEquals {
    attr: "data-sentry-component",
    value: "TagList",
};

/// 描述元素需带有其中任一标记
const SECONDARY_TEXT: [Marker; 2] = [
    Marker::Class("text-secondary"),
    Marker::AttrEquals {
        attr: "data-sentry-component",
        value: "LegacyText",
    },
];

/// 单条记录提取失败的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("post name element not found")]
    MissingName,
    #[error("post name element has no link")]
    MissingLink,
    #[error("post name link has no text")]
    EmptyTitle,
}

/// 排行榜提取服务
///
/// 把排行榜页面的 HTML 解析为有序的产品记录。单个条目提取失败只会跳过该条目，
/// 不会影响整页结果。
pub struct LeaderboardExtractor {
    post_item: MarkerQuery,
    post_name: MarkerQuery,
    link: MarkerQuery,
    logo: MarkerQuery,
    vote_count: MarkerQuery,
    tag_link: MarkerQuery,
}

impl LeaderboardExtractor {
    /// 编译所有查询
    pub fn new() -> Result<Self, ExtractionError> {
        Ok(Self {
            post_item: MarkerQuery::new("section", POST_ITEM)?,
            post_name: MarkerQuery::new("div", POST_NAME)?,
            link: MarkerQuery::tag("a")?,
            logo: MarkerQuery::tag("img")?,
            vote_count: MarkerQuery::descendant("button", VOTE_BUTTON, "p")?,
            tag_link: MarkerQuery::descendant("div", TAG_LIST, "a")?,
        })
    }

    /// 提取页面中的全部产品记录
    ///
    /// 序号使用条目的尝试序号（从1开始），被跳过的条目同样占用一个序号。
    /// 页面中没有任何条目时返回空列表。
    ///
    /// # 参数
    ///
    /// * `markup` - 页面 HTML
    ///
    /// # 返回值
    ///
    /// 按文档顺序排列的产品记录
    pub fn extract_records(&self, markup: &str) -> Vec<ProductRecord> {
        let document = Html::parse_document(markup);
        let containers: Vec<ElementRef<'_>> =
            self.post_item.find_all(document.root_element()).collect();
        debug!("Found {} product sections", containers.len());

        let mut products = Vec::with_capacity(containers.len());
        for (offset, container) in containers.into_iter().enumerate() {
            let index = offset + 1;
            match self.extract_one(container, index) {
                Ok(product) => products.push(product),
                Err(e) => {
                    warn!(index, error = %e, "Skipping product section");
                    counter!("leaderboard_records_skipped_total").increment(1);
                }
            }
        }

        products
    }

    /// 提取单个条目
    ///
    /// 只有名称元素或其链接缺失时才会失败，其余字段都降级为默认值。
    ///
    /// # 参数
    ///
    /// * `container` - 条目容器元素
    /// * `index` - 条目序号
    ///
    /// # 返回值
    ///
    /// * `Ok(ProductRecord)` - 产品记录
    /// * `Err(RecordError)` - 缺少名称或链接
    pub fn extract_one(
        &self,
        container: ElementRef<'_>,
        index: usize,
    ) -> Result<ProductRecord, RecordError> {
        let name = self
            .post_name
            .find_first(container)
            .ok_or(RecordError::MissingName)?;
        let link = self
            .link
            .find_first(name)
            .ok_or(RecordError::MissingLink)?;

        let title = trimmed_text(link);
        if title.is_empty() {
            return Err(RecordError::EmptyTitle);
        }

        let fields = ProductFields {
            logo_url: self.logo_url(container),
            href: non_blank(link.value().attr("href")),
            description: description_of(name),
            votes: self.votes(container),
            tags: self.tags(container),
            title,
        };

        Ok(ProductRecord::assemble(index, fields, Utc::now()))
    }

    fn logo_url(&self, container: ElementRef<'_>) -> Option<String> {
        let img = self.logo.find_first(container)?;
        non_blank(img.value().attr("src"))
    }

    fn votes(&self, container: ElementRef<'_>) -> Option<u32> {
        let count = self.vote_count.find_first(container)?;
        trimmed_text(count).parse().ok()
    }

    fn tags(&self, container: ElementRef<'_>) -> Vec<String> {
        self.tag_link
            .find_all(container)
            .map(trimmed_text)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

fn description_of(name: ElementRef<'_>) -> Option<String> {
    let sibling = next_sibling_tag(name, "div")?;
    let recognized = SECONDARY_TEXT
        .iter()
        .any(|marker| marker.matches(sibling.value()));
    if !recognized {
        return None;
    }

    let text = trimmed_text(sibling);
    (!text.is_empty()).then_some(text)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
