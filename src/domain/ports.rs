use crate::domain::model::{
    Certification, EducationEntry, ExperienceEntry, Portfolio, Profile, Project,
};
use crate::utils::error::{AssetError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::ops::RangeInclusive;

pub trait Storage: Send + Sync {
    fn create_dir(&self, path: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn static_dir(&self) -> &str;
    fn server_addr(&self) -> &str;
}

/// Static portfolio records. Accessors cannot fail.
pub trait ContentProvider: Send + Sync {
    fn profile(&self) -> Profile;
    fn projects(&self) -> Vec<Project>;
    fn experience(&self) -> Vec<ExperienceEntry>;
    fn education(&self) -> Vec<EducationEntry>;
    fn certifications(&self) -> Vec<Certification>;

    fn portfolio(&self) -> Portfolio {
        Portfolio {
            profile: self.profile(),
            projects: self.projects(),
            experience: self.experience(),
            education: self.education(),
            certifications: self.certifications(),
        }
    }
}

/// Source of cache-busting tokens.
pub trait TokenSource: Send + Sync {
    fn token(&self, range: RangeInclusive<u32>) -> std::result::Result<u32, AssetError>;
}

/// Turns image slots into URLs. Implementations absorb their own failures.
#[async_trait]
pub trait ImageResolver: Send + Sync {
    async fn resolve(&self, index: i64, width: u32, height: u32) -> String;
    async fn resolve_hero(&self, width: u32, height: u32) -> String;
    async fn resolve_profile(&self, width: u32, height: u32) -> String;
    async fn resolve_batch(&self, categories: &[String], count: usize)
        -> HashMap<String, Vec<String>>;
}
