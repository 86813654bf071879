// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// 站点源地址，用于补全站内相对链接
pub const SITE_ORIGIN: &str = "https://www.producthunt.com";

/// 产品记录
///
/// 从排行榜单个条目中提取出的结构化数据。创建后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// 页面顺序中的序号（从1开始）
    pub index: usize,
    /// 产品图标地址
    #[serde(rename = "logo")]
    pub logo_url: Option<String>,
    /// 产品名称，提取成功时非空
    pub title: String,
    /// 产品描述，缺失时使用合成的描述
    pub description: String,
    /// 产品页面的绝对地址
    pub product_url: String,
    /// 投票数，解析失败时为0
    pub votes: u32,
    /// 标签列表
    pub tags: Vec<String>,
    /// 提取时间（不是发布时间）
    pub scraped_at: DateTime<Utc>,
}

/// 单个条目中各字段的提取结果
///
/// 除 `title` 外每个字段都是可选的，默认值由 [`ProductRecord::assemble`] 统一补齐。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFields {
    pub logo_url: Option<String>,
    pub title: String,
    pub href: Option<String>,
    pub description: Option<String>,
    pub votes: Option<u32>,
    pub tags: Vec<String>,
}

impl ProductRecord {
    /// 由字段提取结果组装产品记录
    ///
    /// # 参数
    ///
    /// * `index` - 条目在页面中的序号
    /// * `fields` - 各字段的提取结果
    /// * `scraped_at` - 提取时间
    ///
    /// # 返回值
    ///
    /// 缺失字段已替换为默认值的产品记录
    pub fn assemble(index: usize, fields: ProductFields, scraped_at: DateTime<Utc>) -> Self {
        let ProductFields {
            logo_url,
            title,
            href,
            description,
            votes,
            tags,
        } = fields;

        let product_url = href
            .map(|href| absolutize(&href))
            .unwrap_or_else(|| fallback_product_url(&title));
        let description = description.unwrap_or_else(|| fallback_description(&title));

        Self {
            index,
            logo_url,
            title,
            description,
            product_url,
            votes: votes.unwrap_or(0),
            tags,
            scraped_at,
        }
    }
}

/// 将站内相对地址补全为绝对地址
///
/// 只有以单个 `/` 开头的地址被视为站内地址，`//host/...` 这类地址原样返回。
pub fn absolutize(href: &str) -> String {
    if href.starts_with('/') && !href.starts_with("//") {
        format!("{}{}", SITE_ORIGIN, href)
    } else {
        href.to_string()
    }
}

/// 描述缺失时的合成描述
pub fn fallback_description(title: &str) -> String {
    format!("{} - Product from ProductHunt", title)
}

/// 链接缺失时根据标题合成产品地址
pub fn fallback_product_url(title: &str) -> String {
    format!("{}/posts/{}", SITE_ORIGIN, slugify(title))
}

/// 标题转换为 URL 片段
///
/// 先转写为 ASCII，再转小写，每段连续的非字母数字字符折叠为一个 `-`，
/// 首尾的 `-` 去掉。结果为空时返回 `product`。
pub fn slugify(title: &str) -> String {
    let ascii = deunicode(title).to_lowercase();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;
    for ch in ascii.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "product".to_string()
    } else {
        slug
    }
}
