// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use blocklist_aggregator::utils::telemetry::{self, DIAGNOSTICS_TARGET};

    #[test]
    fn test_telemetry_initialization() {
        telemetry::init_telemetry();
        // 重复初始化不应 panic
        telemetry::init_telemetry();

        tracing::debug!("This is a debug message");
        tracing::info!(sources = 2, groups = 3, "Run finished");
        tracing::warn!(
            target: DIAGNOSTICS_TARGET,
            "{} : {}",
            "https://lists.example.org/hosts.txt",
            "bad"
        );
    }
}
