//! Improvement tips. Groups missing skills into study areas and phrases them for the user.
//!
//! Classification is plain substring containment against each category's keyword list, so one
//! skill can appear under several categories and an unfamiliar skill may appear under none.

pub const ALL_SKILLS_MET: &str = "Great! You have all the required skills for this position.";

const BULLET: &str = "•";

/// Above this many missing skills the generic study advice is appended.
const GENERIC_ADVICE_THRESHOLD: usize = 5;

const GENERIC_ADVICE: &[&str] = &[
    "Consider taking online courses or certifications for the missing skills",
    "Build projects demonstrating these skills",
    "Update your resume to highlight any related experience",
];

/// One study area in the tip taxonomy.
#[derive(Debug, Clone, Copy)]
pub struct TipCategory {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    /// Maximum skills listed on the tip line. `None` lists them all.
    pub limit: Option<usize>,
}

/// Categories in the order their tip lines are emitted.
pub const TIP_CATEGORIES: &[TipCategory] = &[
    TipCategory {
        label: "Programming Languages",
        keywords: &[
            "python", "java", "javascript", "typescript", "c++", "c#", " c ", "go", "rust",
            "kotlin", "swift", "php", "ruby", "scala", "perl", "shell", "bash", "powershell",
            "matlab", " r ",
        ],
        limit: None,
    },
    TipCategory {
        label: "Core CS Concepts",
        keywords: &[
            "data structures", "algorithms", "oop", "oops", "object oriented programming",
            "design patterns", "system design", "operating systems", "computer networks",
            "dbms", "multithreading", "concurrency", "memory management",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Web Fundamentals",
        keywords: &[
            "html", "css", "sass", "bootstrap", "tailwind", "responsive design",
            "cross browser",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Frontend Skills",
        keywords: &[
            "react", "redux", "next.js", "angular", "vue", "nuxt", "vite", "webpack",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Backend & APIs",
        keywords: &[
            "node.js", "express", "nestjs", "django", "django rest", "flask", "fastapi",
            "spring", "spring boot", "asp.net", "laravel", "rails", "rest api", "graphql",
            "grpc", "web sockets", "api development", "authentication", "authorization",
            "jwt", "oauth", "session management",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Databases",
        keywords: &[
            "sql", "mysql", "postgresql", "sqlite", "oracle", "mongodb", "redis", "dynamodb",
            "cassandra", "elasticsearch", "neo4j", "pl/sql",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Cloud & DevOps",
        keywords: &[
            "aws", "azure", "gcp", "cloud", "ec2", "s3", "rds", "lambda", "cloud functions",
            "docker", "kubernetes", "ci/cd", "jenkins", "github actions", "terraform",
            "ansible", "linux", "unix", "nginx", "apache", "load balancing", "auto scaling",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Monitoring & Logging",
        keywords: &["monitoring", "prometheus", "grafana", "elk", "log monitoring"],
        limit: Some(3),
    },
    TipCategory {
        label: "Testing & QA",
        keywords: &[
            "unit testing", "integration testing", "pytest", "junit", "jest", "mocha",
            "selenium", "cypress", "tdd", "bdd", "test driven",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Data Science & Analytics",
        keywords: &[
            "data analysis", "data preprocessing", "feature engineering", "data modeling",
            "pandas", "numpy", "matplotlib", "seaborn", "jupyter", "etl", "statistics",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Machine Learning & AI",
        keywords: &[
            "machine learning", "deep learning", "supervised learning",
            "unsupervised learning", "neural networks", "tensorflow", "pytorch", "keras",
            "scikit-learn", "nlp", "natural language processing", "computer vision",
            "opencv", "transformers", "hugging face", "llms", "chatbots",
            "recommendation systems", "model evaluation", "model deployment", "mlops",
            "cuda",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Mobile Development",
        keywords: &["android", "ios", "react native", "flutter", "xamarin", "xcode"],
        limit: Some(3),
    },
    TipCategory {
        label: "Security",
        keywords: &[
            "security", "web security", "cloud security", "owasp", "xss", "csrf",
            "sql injection", "encryption", "hashing",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Tools & Collaboration",
        keywords: &[
            "git", "github", "gitlab", "jira", "confluence", "code review", "pull requests",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Software Architecture & Practices",
        keywords: &[
            "agile", "scrum", "kanban", "microservices", "monolithic", "serverless",
            "distributed systems", "performance tuning",
        ],
        limit: Some(3),
    },
    TipCategory {
        label: "Soft Skills",
        keywords: &[
            "communication", "leadership", "teamwork", "problem solving",
            "critical thinking", "analytical thinking", "project management",
            "time management", "collaboration", "adaptability", "creativity",
            "attention to detail", "decision making", "initiative", "ownership",
            "conflict resolution", "mentorship", "presentation skills", "documentation",
            "multitasking",
        ],
        limit: Some(3),
    },
];

impl TipCategory {
    /// Missing skills that fall into this category, in input order.
    pub fn classify<'a>(&self, missing_skills: &'a [String]) -> Vec<&'a str> {
        missing_skills
            .iter()
            .filter(|skill| {
                let lower = skill.to_lowercase();
                self.keywords.iter().any(|k| lower.contains(k))
            })
            .map(String::as_str)
            .collect()
    }
}

/// Builds the tip list for a set of missing skills.
///
/// No missing skills → a single congratulation. Otherwise a header, one line per non-empty
/// category, and generic advice when more than five skills are missing.
pub fn improvement_tips(missing_skills: &[String], job_title: &str) -> Vec<String> {
    if missing_skills.is_empty() {
        return vec![ALL_SKILLS_MET.to_string()];
    }

    let mut tips = vec![format!(
        "To improve your match for {job_title}, consider learning or highlighting:"
    )];

    for category in TIP_CATEGORIES {
        let matched = category.classify(missing_skills);
        if matched.is_empty() {
            continue;
        }
        let shown = match category.limit {
            Some(limit) => &matched[..matched.len().min(limit)],
            None => &matched[..],
        };
        tips.push(format!("{BULLET} {}: {}", category.label, shown.join(", ")));
    }

    if missing_skills.len() > GENERIC_ADVICE_THRESHOLD {
        tips.extend(GENERIC_ADVICE.iter().map(|line| format!("{BULLET} {line}")));
    }

    tips
}
