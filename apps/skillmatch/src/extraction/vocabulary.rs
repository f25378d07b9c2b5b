//! Fixed skill vocabularies. Membership here is the only thing that makes a string a skill.

use std::collections::HashSet;

use once_cell::sync::Lazy;

pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python", "java", "javascript", "typescript", "c++", "c", "c#", "go", "rust",
    "kotlin", "swift", "php", "ruby", "scala", "r", "matlab", "perl",
    "shell", "bash", "powershell",
    // Core computer science
    "data structures", "algorithms", "object oriented programming", "oops",
    "design patterns", "system design", "operating systems",
    "computer networks", "dbms",
    "multithreading", "concurrency", "memory management",
    // Web fundamentals
    "html", "css", "sass", "bootstrap", "tailwind css",
    "responsive design", "cross browser compatibility",
    // Frontend frameworks
    "react", "redux", "next.js",
    "angular", "vue", "nuxt.js",
    "vite", "webpack",
    // Backend frameworks
    "node.js", "express", "nestjs",
    "django", "django rest framework", "flask", "fastapi",
    "spring", "spring boot",
    "asp.net", "laravel", "rails",
    // APIs and communication
    "rest api", "graphql", "grpc",
    "web sockets", "api development",
    "authentication", "authorization",
    "jwt", "oauth", "session management",
    // Databases
    "sql", "mysql", "postgresql", "sqlite", "oracle",
    "mongodb", "redis", "dynamodb", "cassandra",
    "elasticsearch", "neo4j",
    // Cloud platforms
    "aws", "azure", "gcp",
    "aws ec2", "aws s3", "aws rds", "aws lambda",
    "cloud functions", "cloud security",
    "load balancing", "auto scaling",
    // DevOps and infrastructure
    "docker", "kubernetes",
    "ci/cd", "jenkins", "github actions",
    "terraform", "ansible",
    "nginx", "apache",
    "linux", "unix",
    // Monitoring and logging
    "prometheus", "grafana",
    "elk stack", "log monitoring",
    // Testing
    "unit testing", "integration testing",
    "pytest", "junit",
    "jest", "mocha",
    "selenium", "cypress",
    "test driven development", "tdd", "bdd",
    // Data science
    "data analysis", "data preprocessing",
    "feature engineering",
    "pandas", "numpy",
    "matplotlib", "seaborn",
    "jupyter",
    // Machine learning
    "machine learning", "deep learning",
    "supervised learning", "unsupervised learning",
    "neural networks",
    "tensorflow", "pytorch", "keras",
    "scikit-learn",
    "natural language processing", "nlp",
    "computer vision",
    "transformers", "hugging face",
    "llms", "chatbots",
    "recommendation systems",
    "model evaluation", "model deployment",
    "mlops",
    // Mobile
    "android", "ios",
    "react native", "flutter", "xamarin",
    // Security
    "web security", "owasp",
    "sql injection", "xss", "csrf",
    "encryption", "hashing",
    // Version control and tools
    "git", "github", "gitlab",
    "git workflows", "pull requests",
    "code review",
    "jira", "confluence",
    // Methodologies
    "agile", "scrum", "kanban",
    "microservices", "monolithic architecture",
    "serverless architecture",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork",
    "problem solving", "critical thinking",
    "analytical thinking",
    "project management", "time management",
    "collaboration", "adaptability",
    "creativity", "attention to detail",
    "decision making", "initiative",
    "ownership", "conflict resolution",
    "mentorship", "presentation skills",
    "documentation", "multitasking",
];

/// Substrings that open a skills section when found anywhere in a line.
pub const SECTION_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "competencies",
    "proficiencies",
];

/// Characters a skills section is split on, all at once.
pub const SECTION_DELIMITERS: &[char] = &[',', ';', '|', '\n', '•', '-'];

/// A noun phrase is kept as a skill only if it contains one of these.
pub const PHRASE_MARKERS: &[&str] = &["api", "framework", "library", "tool", "platform"];

static ALL_LABELS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TECHNICAL_SKILLS
        .iter()
        .chain(SOFT_SKILLS.iter())
        .copied()
        .collect()
});

/// Exact, case-sensitive membership in either vocabulary. Callers lowercase first.
pub fn is_known_label(label: &str) -> bool {
    ALL_LABELS.contains(label)
}

/// True when the label is made only of alphanumeric characters and can use plain `\b` anchors.
pub fn is_plain_word(label: &str) -> bool {
    !label.is_empty() && label.chars().all(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabularies_are_lowercase_and_trimmed() {
        for label in TECHNICAL_SKILLS.iter().chain(SOFT_SKILLS.iter()) {
            assert_eq!(*label, label.trim(), "untrimmed label {label:?}");
            assert_eq!(*label, label.to_lowercase(), "non-lowercase label {label:?}");
        }
    }

    #[test]
    fn test_vocabularies_have_no_duplicates() {
        let total = TECHNICAL_SKILLS.len() + SOFT_SKILLS.len();
        assert_eq!(ALL_LABELS.len(), total);
    }

    #[test]
    fn test_soft_skills_are_alphabetic_phrases() {
        for label in SOFT_SKILLS {
            assert!(label.chars().all(|c| c.is_alphabetic() || c == ' '));
        }
    }

    #[test]
    fn test_plain_word_detection() {
        assert!(is_plain_word("python"));
        assert!(is_plain_word("neo4j"));
        assert!(!is_plain_word("c++"));
        assert!(!is_plain_word("ci/cd"));
        assert!(!is_plain_word("rest api"));
        assert!(!is_plain_word(""));
    }

    #[test]
    fn test_known_label_lookup() {
        assert!(is_known_label("rest api"));
        assert!(is_known_label("leadership"));
        assert!(!is_known_label("Rest API"));
        assert!(!is_known_label("cobol"));
    }
}
