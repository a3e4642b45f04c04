// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 诊断事件使用的 tracing target
///
/// 被拒绝的候选域名以 `<source-url> : <candidate>` 的格式输出到此 target
pub const DIAGNOSTICS_TARGET: &str = "diagnostics";

/// 初始化日志
///
/// 通过 `RUST_LOG` 覆盖默认过滤规则。重复调用时保持第一次的订阅者
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,blocklist_aggregator=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
