// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

#[cfg(test)]
mod tests {
    use blocklist_aggregator::config::settings::Settings;
    use blocklist_aggregator::config::sources;

    #[test]
    fn test_environment_overrides_defaults() {
        std::env::set_var("BLOCKLIST__OUTPUT__DIRECTORY", "/tmp/lists");
        std::env::set_var("BLOCKLIST__GIT__PUSH", "false");

        let settings = Settings::new().unwrap();

        std::env::remove_var("BLOCKLIST__OUTPUT__DIRECTORY");
        std::env::remove_var("BLOCKLIST__GIT__PUSH");

        assert_eq!(settings.output.directory, "/tmp/lists");
        assert!(!settings.git.push);
        assert!(settings.git.enabled);
        assert_eq!(settings.output.extension, "txt");
    }

    #[tokio::test]
    async fn test_load_source_list_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sources.yaml");
        std::fs::write(
            &path,
            "adlists:\n  - url: https://lists.example.org/ads.txt\n    groups: [base, ads]\n",
        )
        .unwrap();

        let specs = sources::load_sources(&path).await.unwrap();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].url.as_str(), "https://lists.example.org/ads.txt");
        assert_eq!(specs[0].groups, vec!["base".to_string(), "ads".to_string()]);
    }
}
