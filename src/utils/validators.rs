// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use url::{Host, Url};

/// 校验时使用的占位协议
const PLACEHOLDER_SCHEME: &str = "https://";

/// 检查候选字符串是否为合法域名
///
/// 等价于 `canonical_host(candidate).is_some()`
///
/// # 参数
///
/// * `candidate` - 候选域名
///
/// # 返回值
///
/// 如果候选字符串是合法域名则返回true，否则返回false
pub fn is_valid(candidate: &str) -> bool {
    canonical_host(candidate).is_some()
}

/// 返回候选域名的规范形式
///
/// 在候选字符串前加上占位协议后解析为URL，要求结果只包含一个域名主机：
/// 不能带用户信息、端口、路径、查询或片段，主机不能是IP字面量，
/// 且至少包含两个非空标签。返回解析后的主机名（小写，非ASCII标签转为 punycode）
pub fn canonical_host(candidate: &str) -> Option<String> {
    // percent escapes are decoded into a different host, ":443" is dropped as the default port,
    // control characters are silently stripped by the parser
    if candidate.is_empty()
        || candidate.contains(['%', ':'])
        || candidate.chars().any(char::is_control)
    {
        return None;
    }

    let parsed = Url::parse(&format!("{}{}", PLACEHOLDER_SCHEME, candidate)).ok()?;

    if !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.port().is_some()
        || parsed.path() != "/"
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return None;
    }

    // "example.com/" parses to the same URL as "example.com"
    if candidate.ends_with('/') {
        return None;
    }

    match parsed.host() {
        Some(Host::Domain(domain))
            if domain.contains('.') && !domain.split('.').any(|label| label.is_empty()) =>
        {
            Some(domain.to_string())
        }
        _ => None,
    }
}
