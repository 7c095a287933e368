use folio_site::core::ContentProvider;
use folio_site::utils::validation::Validate;
use folio_site::{
    AssetConfig, AssetResolver, Content, LocalStorage, SiteBuilder, SiteConfig, StaticContent,
    Tokens, TomlContent,
};
use tempfile::TempDir;

fn config_for(output_path: &str) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.site.output_path = output_path.to_string();
    config.asset = AssetConfig {
        delay_ms: 0,
        ..AssetConfig::default()
    };
    config
}

#[tokio::test]
async fn test_end_to_end_build_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();
    let config = config_for(&output_path);
    assert!(config.validate().is_ok());

    let resolver = AssetResolver::new(config.asset.clone(), Tokens::from_seed(None)).unwrap();
    let builder = SiteBuilder::new(
        LocalStorage::new(output_path.clone()),
        StaticContent,
        resolver,
        &config,
    );

    let output = builder.build().await.unwrap();

    assert_eq!(output.output_path, output_path);
    assert!(temp_dir.path().join("static/img").is_dir());
    for file in &output.files {
        assert!(temp_dir.path().join(file).is_file(), "missing {}", file);
    }

    let html = std::fs::read_to_string(temp_dir.path().join("index.html")).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("https://source.unsplash.com/1200x600/?artificial+intelligence+technology+code&amp;sig="));
    assert!(html.contains("https://source.unsplash.com/400x400/?professional+portrait+technology&amp;sig="));
    assert!(html.contains("/800x600/?artificial+intelligence&amp;sig="));
    assert!(html.contains("/800x600/?robotics&amp;sig="));
    for project in StaticContent.projects() {
        assert!(html.contains(&project.title));
    }
}

#[tokio::test]
async fn test_seeded_builds_are_reproducible() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    let mut pages = Vec::new();
    for dir in [&first_dir, &second_dir] {
        let output_path = dir.path().to_str().unwrap().to_string();
        let config = config_for(&output_path);
        let resolver =
            AssetResolver::new(config.asset.clone(), Tokens::from_seed(Some(2024))).unwrap();
        let builder = SiteBuilder::new(
            LocalStorage::new(output_path),
            StaticContent,
            resolver,
            &config,
        );
        builder.build().await.unwrap();
        pages.push(std::fs::read_to_string(dir.path().join("index.html")).unwrap());
    }

    assert_eq!(pages[0], pages[1]);
}

#[tokio::test]
async fn test_build_from_toml_content() {
    let temp_dir = TempDir::new().unwrap();
    let content_path = temp_dir.path().join("portfolio.toml");

    let mut portfolio = StaticContent.portfolio();
    portfolio.profile.name = "Jordan Lee".to_string();
    portfolio.projects.truncate(2);
    tokio::fs::write(&content_path, TomlContent::to_toml_string(&portfolio).unwrap())
        .await
        .unwrap();

    let output_path = temp_dir.path().join("site").to_str().unwrap().to_string();
    let mut config = config_for(&output_path);
    config.content.path = Some(content_path.to_str().unwrap().to_string());
    assert!(config.validate().is_ok());

    let content = Content::load(config.content_path()).unwrap();
    let resolver = AssetResolver::new(config.asset.clone(), Tokens::from_seed(Some(1))).unwrap();
    let builder = SiteBuilder::new(
        LocalStorage::new(output_path.clone()),
        content,
        resolver,
        &config,
    );

    builder.build().await.unwrap();

    let html = std::fs::read_to_string(std::path::Path::new(&output_path).join("index.html")).unwrap();
    assert!(html.contains("<h1>Jordan Lee</h1>"));
    assert_eq!(html.matches("<article class=\"card\">").count(), 2);
}
