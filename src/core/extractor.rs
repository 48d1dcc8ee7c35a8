use crate::models::{CandidateRecord, EducationTier};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Keyword tables driving the extraction scans
///
/// Loaded once as configuration data; not user-extensible at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorVocabulary {
    #[serde(default = "default_skills")]
    pub skills: Vec<String>,
    #[serde(default = "default_certifications")]
    pub certifications: Vec<String>,
}

impl Default for ExtractorVocabulary {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            certifications: default_certifications(),
        }
    }
}

fn default_skills() -> Vec<String> {
    [
        // Programming
        "Python",
        "JavaScript",
        "TypeScript",
        "Java",
        "C++",
        "Rust",
        "React",
        "Vue",
        "Angular",
        "Node.js",
        "SQL",
        "MySQL",
        "PostgreSQL",
        "AWS",
        "Docker",
        "Kubernetes",
        "Git",
        "Linux",
        "Machine Learning",
        // Management
        "Project Management",
        "Team Management",
        "Leadership",
        "Scrum",
        "Agile",
        // Marketing
        "Marketing",
        "SEO",
        "SEM",
        "Google Analytics",
        // Sales
        "Sales",
        "Negotiation",
        "CRM",
        // Design
        "UI/UX",
        "Photoshop",
        "Illustrator",
        "Figma",
        // Finance
        "Accounting",
        "Bookkeeping",
        "Financial Analysis",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_certifications() -> Vec<String> {
    [
        "AWS Certified Solutions Architect",
        "Certified Scrum Master",
        "PMP",
        "TOEIC",
        "CPA",
        "CISSP",
        "CCNA",
        "基本情報技術者",
        "簿記",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Best-effort resume text extractor
///
/// Never fails on malformed input: fields that cannot be recognized degrade
/// to empty strings, zero years, or empty collections. Lower scores are the
/// only user-visible effect of unrecognized content.
#[derive(Debug, Clone)]
pub struct Extractor {
    vocabulary: ExtractorVocabulary,
    email_re: Regex,
    name_re: Regex,
    years_res: Vec<Regex>,
}

impl Extractor {
    pub fn new(vocabulary: ExtractorVocabulary) -> Self {
        // Patterns are literals; compilation cannot fail
        let email_re =
            Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
        let name_re = Regex::new(r"(?mi)^\s*(?:name|氏名|名前)\s*[:：]\s*(\S.*)$").unwrap();
        let years_res = vec![
            Regex::new(r"(?i)(\d{1,2})\s*\+?\s*years?[^\n]{0,40}?experience").unwrap(),
            Regex::new(r"(?i)experience[^\n]{0,40}?(\d{1,2})\s*\+?\s*years?").unwrap(),
            Regex::new(r"経験\s*(\d{1,2})\s*年").unwrap(),
            Regex::new(r"(\d{1,2})\s*年[^\n]{0,20}?経験").unwrap(),
        ];

        Self {
            vocabulary,
            email_re,
            name_re,
            years_res,
        }
    }

    /// Normalize a raw resume text blob into a candidate record
    pub fn extract(&self, raw_text: &str) -> CandidateRecord {
        CandidateRecord {
            name: self.extract_name(raw_text),
            email: self.extract_email(raw_text),
            experience_years: self.extract_experience_years(raw_text),
            education: self.extract_education(raw_text),
            certifications: self.extract_certifications(raw_text),
            skills: self.extract_skills(raw_text),
            raw_text: raw_text.to_string(),
        }
    }

    /// First labeled name line; empty string when absent
    fn extract_name(&self, text: &str) -> String {
        self.name_re
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }

    /// First email-shaped substring; empty string when absent
    fn extract_email(&self, text: &str) -> String {
        self.email_re
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Largest explicit year count found near an experience keyword; 0 when none
    fn extract_experience_years(&self, text: &str) -> u8 {
        self.years_res
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            .filter_map(|m| m.as_str().parse::<u8>().ok())
            .max()
            .unwrap_or(0)
    }

    /// Case-insensitive membership scan against the skill vocabulary
    ///
    /// Naive substring scan: broad terms also fire on their superstrings
    /// ("Java" matches "JavaScript" lines). Set semantics, vocabulary order.
    fn extract_skills(&self, text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        let mut skills = Vec::new();

        for term in &self.vocabulary.skills {
            if lower.contains(&term.to_lowercase()) && !skills.contains(term) {
                skills.push(term.clone());
            }
        }

        skills
    }

    /// Lines mentioning a degree, in first-seen source order
    fn extract_education(&self, text: &str) -> Vec<String> {
        let mut education = Vec::new();

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if EducationTier::detect(trimmed) != EducationTier::None {
                let entry = trimmed.to_string();
                if !education.contains(&entry) {
                    education.push(entry);
                }
            }
        }

        education
    }

    /// Certification names found by line-based scan, in vocabulary order
    fn extract_certifications(&self, text: &str) -> Vec<String> {
        let lower_lines: Vec<String> = text.lines().map(|l| l.to_lowercase()).collect();
        let mut certifications = Vec::new();

        for cert in &self.vocabulary.certifications {
            let cert_lower = cert.to_lowercase();
            if lower_lines.iter().any(|line| line.contains(&cert_lower))
                && !certifications.contains(cert)
            {
                certifications.push(cert.clone());
            }
        }

        certifications
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractorVocabulary::default())
    }
}
