use crate::core::ContentProvider;
use crate::domain::model::{
    Certification, Contact, EducationEntry, ExperienceEntry, Portfolio, Profile, Project, Skill,
};
use crate::utils::error::{Result, SiteError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::path::Path;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill(name: &str, level: u8) -> Skill {
    Skill {
        name: name.to_string(),
        level,
    }
}

fn project(title: &str, description: &str, technologies: &[&str], highlights: &[&str]) -> Project {
    Project {
        title: title.to_string(),
        description: description.to_string(),
        technologies: strings(technologies),
        highlights: strings(highlights),
    }
}

/// The built-in portfolio.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl ContentProvider for StaticContent {
    fn profile(&self) -> Profile {
        Profile {
            name: "Alex Morgan".to_string(),
            title: "Senior AI Engineer".to_string(),
            tagline: "Building intelligent systems that solve real-world problems".to_string(),
            about: "Experienced AI Engineer with 7+ years of expertise in machine learning, \
                    deep learning, and natural language processing. Passionate about developing \
                    AI solutions that drive business value and improve user experiences.\n\n\
                    My approach combines strong theoretical foundations with practical \
                    implementation skills, allowing me to take projects from research to production."
                .to_string(),
            skills: vec![
                skill("Machine Learning", 95),
                skill("Deep Learning", 90),
                skill("Natural Language Processing", 85),
                skill("Computer Vision", 80),
                skill("MLOps", 85),
                skill("Python", 95),
                skill("TensorFlow/PyTorch", 90),
                skill("Data Engineering", 75),
            ],
            contact: Contact {
                email: "alex.morgan@example.com".to_string(),
                linkedin: "linkedin.com/in/alexmorgan".to_string(),
                github: "github.com/alexmorgan-ai".to_string(),
                twitter: "twitter.com/alexmorgan_ai".to_string(),
            },
        }
    }

    fn projects(&self) -> Vec<Project> {
        vec![
            project(
                "Conversational AI Assistant",
                "Developed an advanced conversational AI system using transformer-based architecture. \
                 The system handles complex queries with contextual understanding and maintains conversation history.",
                &["PyTorch", "Transformer Models", "FastAPI", "Redis", "Docker"],
                &[
                    "Achieved 92% accuracy on intent recognition",
                    "Reduced response latency by 40% through model optimization",
                    "Implemented efficient context management for multi-turn conversations",
                    "Deployed as a scalable microservice architecture",
                ],
            ),
            project(
                "Computer Vision for Manufacturing QA",
                "Built a real-time defect detection system for manufacturing quality assurance \
                 using computer vision and deep learning techniques.",
                &["TensorFlow", "OpenCV", "Kubernetes", "NVIDIA Triton", "Python"],
                &[
                    "Reduced manual inspection time by 75%",
                    "Improved defect detection accuracy to 98.5%",
                    "Implemented distributed inference for high-throughput processing",
                    "Created custom annotation tool for efficient data labeling",
                ],
            ),
            project(
                "Predictive Maintenance System",
                "Designed and implemented a predictive maintenance system for industrial equipment \
                 using time-series analysis and anomaly detection.",
                &["Scikit-learn", "Prophet", "Kafka", "Spark", "AWS"],
                &[
                    "Reduced unplanned downtime by 35%",
                    "Saved $1.2M annually in maintenance costs",
                    "Processed 10TB+ of sensor data in real-time",
                    "Developed custom feature extraction for multivariate time series",
                ],
            ),
            project(
                "Recommendation Engine for E-commerce",
                "Created a personalized recommendation engine for an e-commerce platform \
                 using collaborative filtering and content-based approaches.",
                &["Python", "PySpark", "Neo4j", "FastAPI", "React"],
                &[
                    "Increased conversion rate by 23%",
                    "Improved average order value by 15%",
                    "Implemented hybrid recommendation approach with real-time updates",
                    "Designed A/B testing framework for algorithm evaluation",
                ],
            ),
            project(
                "NLP for Automated Document Processing",
                "Developed an NLP system for automated document processing, classification, \
                 and information extraction from unstructured text.",
                &["Hugging Face Transformers", "spaCy", "Elasticsearch", "Flask", "Docker"],
                &[
                    "Automated processing of 10,000+ documents daily",
                    "Achieved 94% accuracy in document classification",
                    "Reduced manual processing time by 80%",
                    "Implemented custom named entity recognition for domain-specific extraction",
                ],
            ),
            project(
                "MLOps Platform Development",
                "Led the development of an internal MLOps platform for model training, deployment, \
                 monitoring, and lifecycle management.",
                &["Kubernetes", "TensorFlow Extended", "Prometheus", "Grafana", "Python"],
                &[
                    "Reduced model deployment time from weeks to hours",
                    "Implemented automated testing and validation pipelines",
                    "Created comprehensive monitoring for model drift and performance",
                    "Designed reproducible training workflows with version control",
                ],
            ),
        ]
    }

    fn experience(&self) -> Vec<ExperienceEntry> {
        vec![
            ExperienceEntry {
                title: "Senior AI Engineer".to_string(),
                company: "TechInnovate AI".to_string(),
                period: "2020 - Present".to_string(),
                description: "Lead AI Engineer responsible for developing and deploying machine learning \
                              solutions across multiple business units. Architected and implemented end-to-end \
                              ML pipelines and established best practices for the AI team."
                    .to_string(),
            },
            ExperienceEntry {
                title: "Machine Learning Engineer".to_string(),
                company: "DataSphere Solutions".to_string(),
                period: "2017 - 2020".to_string(),
                description: "Developed predictive models and recommendation systems for enterprise clients. \
                              Collaborated with data scientists and software engineers to productionize \
                              machine learning models and integrate them into client applications."
                    .to_string(),
            },
            ExperienceEntry {
                title: "Data Scientist".to_string(),
                company: "AnalyticsPro".to_string(),
                period: "2015 - 2017".to_string(),
                description: "Conducted exploratory data analysis and built statistical models to solve \
                              business problems. Created data visualizations and dashboards to communicate \
                              insights to stakeholders and drive decision-making."
                    .to_string(),
            },
        ]
    }

    fn education(&self) -> Vec<EducationEntry> {
        vec![
            EducationEntry {
                degree: "M.S. in Computer Science, AI Specialization".to_string(),
                institution: "Stanford University".to_string(),
                period: "2013 - 2015".to_string(),
                description: "Focused on machine learning, deep learning, and artificial intelligence applications."
                    .to_string(),
            },
            EducationEntry {
                degree: "B.S. in Computer Science".to_string(),
                institution: "University of California, Berkeley".to_string(),
                period: "2009 - 2013".to_string(),
                description: "Graduated with honors. Coursework in algorithms, data structures, and mathematics."
                    .to_string(),
            },
        ]
    }

    fn certifications(&self) -> Vec<Certification> {
        [
            ("Google Professional Machine Learning Engineer", "Google Cloud", "2022"),
            ("AWS Certified Machine Learning - Specialty", "Amazon Web Services", "2021"),
            ("Deep Learning Specialization", "DeepLearning.AI", "2020"),
            ("TensorFlow Developer Certificate", "Google", "2019"),
        ]
        .iter()
        .map(|(name, issuer, year)| Certification {
            name: name.to_string(),
            issuer: issuer.to_string(),
            year: year.to_string(),
        })
        .collect()
    }
}

/// Portfolio loaded from a TOML document.
#[derive(Debug, Clone)]
pub struct TomlContent {
    portfolio: Portfolio,
}

impl TomlContent {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(content).map_err(|e| SiteError::ContentError {
                message: format!("TOML parsing error: {}", e),
            })?;
        portfolio.validate()?;
        Ok(Self { portfolio })
    }

    pub fn to_toml_string(portfolio: &Portfolio) -> Result<String> {
        toml::to_string(portfolio).map_err(|e| SiteError::ContentError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl ContentProvider for TomlContent {
    fn profile(&self) -> Profile {
        self.portfolio.profile.clone()
    }

    fn projects(&self) -> Vec<Project> {
        self.portfolio.projects.clone()
    }

    fn experience(&self) -> Vec<ExperienceEntry> {
        self.portfolio.experience.clone()
    }

    fn education(&self) -> Vec<EducationEntry> {
        self.portfolio.education.clone()
    }

    fn certifications(&self) -> Vec<Certification> {
        self.portfolio.certifications.clone()
    }

    fn portfolio(&self) -> Portfolio {
        self.portfolio.clone()
    }
}

/// Content picked at startup: built-in or from a file.
#[derive(Debug, Clone)]
pub enum Content {
    Static(StaticContent),
    Toml(TomlContent),
}

impl Content {
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading portfolio content from {}", path);
                Ok(Content::Toml(TomlContent::from_file(path)?))
            }
            None => Ok(Content::Static(StaticContent)),
        }
    }

    fn provider(&self) -> &dyn ContentProvider {
        match self {
            Content::Static(content) => content as &dyn ContentProvider,
            Content::Toml(content) => content,
        }
    }
}

impl ContentProvider for Content {
    fn profile(&self) -> Profile {
        self.provider().profile()
    }

    fn projects(&self) -> Vec<Project> {
        self.provider().projects()
    }

    fn experience(&self) -> Vec<ExperienceEntry> {
        self.provider().experience()
    }

    fn education(&self) -> Vec<EducationEntry> {
        self.provider().education()
    }

    fn certifications(&self) -> Vec<Certification> {
        self.provider().certifications()
    }

    fn portfolio(&self) -> Portfolio {
        self.provider().portfolio()
    }
}

impl Validate for Portfolio {
    fn validate(&self) -> Result<()> {
        let content_error = |e: SiteError| SiteError::ContentError {
            message: e.to_string(),
        };

        validate_non_empty_string("profile.name", &self.profile.name).map_err(content_error)?;
        validate_non_empty_string("profile.title", &self.profile.title).map_err(content_error)?;
        for skill in &self.profile.skills {
            validate_non_empty_string("profile.skills.name", &skill.name).map_err(content_error)?;
            validate_range(&format!("skill '{}'", skill.name), skill.level, 0, 100)
                .map_err(content_error)?;
        }
        for project in &self.projects {
            validate_non_empty_string("projects.title", &project.title).map_err(content_error)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_static_content_cardinalities() {
        let portfolio = StaticContent.portfolio();

        assert_eq!(portfolio.profile.skills.len(), 8);
        assert_eq!(portfolio.projects.len(), 6);
        assert_eq!(portfolio.experience.len(), 3);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.certifications.len(), 4);
        assert!(portfolio
            .projects
            .iter()
            .all(|p| p.technologies.len() == 5 && p.highlights.len() == 4));
    }

    #[test]
    fn test_static_content_is_valid() {
        let portfolio = StaticContent.portfolio();

        assert!(portfolio.validate().is_ok());
        assert!(portfolio.profile.skills.iter().all(|s| s.level <= 100));
        assert_eq!(portfolio.profile.contact.email, "alex.morgan@example.com");
    }

    #[test]
    fn test_toml_round_trip_of_static_content() {
        let original = StaticContent.portfolio();
        let toml = TomlContent::to_toml_string(&original).unwrap();

        let loaded = TomlContent::from_toml_str(&toml).unwrap();

        assert_eq!(loaded.portfolio(), original);
    }

    #[test]
    fn test_toml_content_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[profile]
name = "Sam Rivera"
title = "Data Engineer"
tagline = "Pipelines that keep running"
about = "Builds data platforms."

[[profile.skills]]
name = "Rust"
level = 88

[profile.contact]
email = "sam@example.com"
linkedin = "linkedin.com/in/sam"
github = "github.com/sam"
twitter = "twitter.com/sam"

[[projects]]
title = "Stream Router"
description = "Routes events."
technologies = ["Rust", "Kafka"]
highlights = ["Zero downtime deploys"]
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let content = TomlContent::from_file(temp_file.path()).unwrap();

        assert_eq!(content.profile().name, "Sam Rivera");
        assert_eq!(content.profile().skills.len(), 1);
        assert_eq!(content.projects().len(), 1);
        assert!(content.experience().is_empty());
        assert!(content.certifications().is_empty());
    }

    #[test]
    fn test_skill_level_above_100_is_rejected() {
        let mut portfolio = StaticContent.portfolio();
        portfolio.profile.skills[0].level = 120;
        let toml = TomlContent::to_toml_string(&portfolio).unwrap();

        let err = TomlContent::from_toml_str(&toml).unwrap_err();

        assert!(matches!(err, SiteError::ContentError { .. }));
    }

    #[test]
    fn test_malformed_toml_is_content_error() {
        let err = TomlContent::from_toml_str("[profile\nname = ").unwrap_err();
        assert!(matches!(err, SiteError::ContentError { .. }));
    }

    #[test]
    fn test_content_load_defaults_to_static() {
        let content = Content::load(None).unwrap();
        assert_eq!(content.portfolio(), StaticContent.portfolio());
    }
}
