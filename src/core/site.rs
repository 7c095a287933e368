use crate::core::page::{
    project_index, render_page, PageMeta, ABOUT_INDEX, AVATAR_SIZE, CONTACT_INDEX, HERO_SIZE,
    IMAGE_SIZE,
};
use crate::core::placeholder::SLOTS;
use crate::core::{ConfigProvider, ContentProvider, ImageResolver, PageAssets, Portfolio, Storage};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Datelike;
use futures::future::join_all;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutput {
    pub output_path: String,
    pub files: Vec<String>,
}

pub struct SiteBuilder<S: Storage, C: ContentProvider, R: ImageResolver> {
    storage: S,
    content: C,
    resolver: R,
    output_path: String,
    static_dir: String,
}

impl<S: Storage, C: ContentProvider, R: ImageResolver> SiteBuilder<S, C, R> {
    pub fn new(storage: S, content: C, resolver: R, config: &impl ConfigProvider) -> Self {
        Self {
            storage,
            content,
            resolver,
            output_path: config.output_path().to_string(),
            static_dir: config.static_dir().trim_matches('/').to_string(),
        }
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Creates the static asset directory. Safe to call repeatedly.
    pub async fn ensure_static_dir(&self) -> Result<()> {
        tracing::debug!("Ensuring static directory {}", self.static_dir);
        self.storage.create_dir(&self.static_dir).await
    }

    /// Resolves every image slot concurrently, one URL per slot.
    pub async fn resolve_assets(&self, portfolio: &Portfolio) -> PageAssets {
        let projects = (0..portfolio.projects.len()).map(|position| {
            self.resolver
                .resolve(project_index(position), IMAGE_SIZE.0, IMAGE_SIZE.1)
        });

        let (hero, avatar, about, projects, contact) = tokio::join!(
            self.resolver.resolve_hero(HERO_SIZE.0, HERO_SIZE.1),
            self.resolver.resolve_profile(AVATAR_SIZE.0, AVATAR_SIZE.1),
            self.resolver.resolve(ABOUT_INDEX, IMAGE_SIZE.0, IMAGE_SIZE.1),
            join_all(projects),
            self.resolver.resolve(CONTACT_INDEX, IMAGE_SIZE.0, IMAGE_SIZE.1),
        );

        tracing::debug!("Resolved {} image slots", projects.len() + 4);
        PageAssets {
            hero,
            avatar,
            about,
            projects,
            contact,
        }
    }

    /// Renders the page in memory with fresh image URLs.
    pub async fn render(&self) -> Result<String> {
        let portfolio = self.content.portfolio();
        portfolio.validate()?;

        let assets = self.resolve_assets(&portfolio).await;
        let meta = PageMeta {
            year: chrono::Local::now().year(),
            static_dir: self.static_dir.clone(),
        };
        Ok(render_page(&portfolio, &assets, &meta))
    }

    pub async fn build(&self) -> Result<SiteOutput> {
        tracing::info!("Building portfolio site into {}", self.output_path);
        self.ensure_static_dir().await?;

        let html = self.render().await?;
        self.storage.write_file("index.html", html.as_bytes()).await?;
        let mut files = vec!["index.html".to_string()];
        tracing::debug!("Wrote index.html ({} bytes)", html.len());

        for slot in SLOTS {
            let path = format!("{}/{}", self.static_dir, slot.file_name());
            self.storage
                .write_file(&path, slot.render().as_bytes())
                .await?;
            files.push(path);
        }

        tracing::info!("Site built with {} files", files.len());
        Ok(SiteOutput {
            output_path: self.output_path.clone(),
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::StaticContent;
    use async_trait::async_trait;
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
        dirs: Arc<Mutex<HashSet<String>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
                dirs: Arc::new(Mutex::new(HashSet::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn create_dir(&self, path: &str) -> Result<()> {
            let mut dirs = self.dirs.lock().await;
            dirs.insert(path.to_string());
            Ok(())
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig;

    impl ConfigProvider for MockConfig {
        fn output_path(&self) -> &str {
            "test_output"
        }

        fn static_dir(&self) -> &str {
            "/static/img/"
        }

        fn server_addr(&self) -> &str {
            "127.0.0.1:0"
        }
    }

    /// Records every call and answers with a URL naming the slot.
    #[derive(Default)]
    struct CountingResolver {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ImageResolver for CountingResolver {
        async fn resolve(&self, index: i64, width: u32, height: u32) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("https://img.test/{}/{}x{}", index, width, height)
        }

        async fn resolve_hero(&self, width: u32, height: u32) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("https://img.test/hero/{}x{}", width, height)
        }

        async fn resolve_profile(&self, width: u32, height: u32) -> String {
            self.calls.fetch_add(1, Ordering::SeqCst);
            format!("https://img.test/profile/{}x{}", width, height)
        }

        async fn resolve_batch(
            &self,
            categories: &[String],
            count: usize,
        ) -> HashMap<String, Vec<String>> {
            categories
                .iter()
                .map(|c| (c.clone(), vec![format!("https://img.test/{}", c); count]))
                .collect()
        }
    }

    #[tokio::test]
    async fn test_resolve_assets_one_call_per_slot() {
        let builder = SiteBuilder::new(
            MockStorage::new(),
            StaticContent,
            CountingResolver::default(),
            &MockConfig,
        );
        let portfolio = builder.content().portfolio();

        let assets = builder.resolve_assets(&portfolio).await;

        assert_eq!(builder.resolver().calls.load(Ordering::SeqCst), 10);
        assert_eq!(assets.hero, "https://img.test/hero/1200x600");
        assert_eq!(assets.avatar, "https://img.test/profile/400x400");
        assert_eq!(assets.about, "https://img.test/0/800x600");
        assert_eq!(assets.contact, "https://img.test/7/800x600");
        assert_eq!(
            assets.projects,
            (1..=6)
                .map(|i| format!("https://img.test/{}/800x600", i))
                .collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn test_build_writes_page_and_placeholders() {
        let storage = MockStorage::new();
        let builder = SiteBuilder::new(
            storage.clone(),
            StaticContent,
            CountingResolver::default(),
            &MockConfig,
        );

        let output = builder.build().await.unwrap();

        assert_eq!(output.output_path, "test_output");
        assert_eq!(
            output.files,
            vec![
                "index.html",
                "static/img/hero.svg",
                "static/img/avatar.svg",
                "static/img/image.svg"
            ]
        );
        assert!(storage.dirs.lock().await.contains("static/img"));

        let html = String::from_utf8(storage.get_file("index.html").await.unwrap()).unwrap();
        assert!(html.contains("https://img.test/hero/1200x600"));
        assert!(html.contains("Conversational AI Assistant"));

        let svg = storage.get_file("static/img/hero.svg").await.unwrap();
        assert!(String::from_utf8(svg).unwrap().contains("width='1200'"));
    }

    #[tokio::test]
    async fn test_ensure_static_dir_is_idempotent() {
        let storage = MockStorage::new();
        let builder = SiteBuilder::new(
            storage.clone(),
            StaticContent,
            CountingResolver::default(),
            &MockConfig,
        );

        builder.ensure_static_dir().await.unwrap();
        builder.ensure_static_dir().await.unwrap();

        assert_eq!(storage.dirs.lock().await.len(), 1);
    }
}
