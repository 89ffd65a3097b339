//! Skill-gap scoring against per-role requirement tables
//!
//! Each role carries a weighted requirement list: must-have skills weigh
//! 3.0, good-to-have 2.0, bonus 1.0. Readiness is the matched share of
//! total weight, as a percentage. Unknown roles fall back to a generic
//! software-role table.

use serde::Serialize;

use crate::error::{Error, Result};

/// Importance tier of a required skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    MustHave,
    GoodToHave,
    Bonus,
}

impl SkillTier {
    pub fn weight(&self) -> f64 {
        match self {
            Self::MustHave => 3.0,
            Self::GoodToHave => 2.0,
            Self::Bonus => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::MustHave => "Must have",
            Self::GoodToHave => "Good to have",
            Self::Bonus => "Bonus",
        }
    }
}

/// One requirement line and whether the candidate meets it
#[derive(Debug, Clone, Serialize)]
pub struct SkillCheck {
    /// Requirement as listed, e.g. "React or Vue or Angular"
    pub skill: String,
    pub tier: SkillTier,
    pub have: bool,
}

/// Result of comparing a skill list against a role's requirements
#[derive(Debug, Clone, Serialize)]
pub struct SkillGapReport {
    pub role: String,
    /// Matched weight over total weight, 0-100
    pub readiness: f64,
    pub checks: Vec<SkillCheck>,
    /// Unmet requirements, heaviest tier first, then alphabetical
    pub missing: Vec<SkillCheck>,
}

impl SkillGapReport {
    /// Coaching line matched to the readiness band
    pub fn verdict(&self) -> &'static str {
        if self.readiness >= 80.0 {
            "Strongly qualified. Focus on bonus skills to stand out."
        } else if self.readiness >= 60.0 {
            "Good foundation. Fill the must-have gaps first."
        } else if self.readiness >= 40.0 {
            "Decent start. Must-have skills are non-negotiable; start there."
        } else {
            "Early stage. Focus entirely on must-have skills for now."
        }
    }
}

struct RoleTable {
    role: &'static str,
    must_have: &'static [&'static str],
    good_to_have: &'static [&'static str],
    bonus: &'static [&'static str],
}

const ROLE_TABLES: &[RoleTable] = &[
    RoleTable {
        role: "frontend developer",
        must_have: &["HTML", "CSS", "JavaScript", "React or Vue or Angular", "Git"],
        good_to_have: &[
            "TypeScript",
            "Testing (Jest/Cypress)",
            "Webpack/Vite",
            "REST APIs",
            "Responsive Design",
        ],
        bonus: &[
            "Next.js/Nuxt.js",
            "GraphQL",
            "CI/CD",
            "Performance Optimization",
            "Accessibility (a11y)",
        ],
    },
    RoleTable {
        role: "backend developer",
        must_have: &[
            "Python or Java or Node.js",
            "SQL",
            "REST APIs",
            "Git",
            "Database Design",
        ],
        good_to_have: &[
            "Docker",
            "Cloud (AWS/GCP/Azure)",
            "Redis/Caching",
            "Testing",
            "Message Queues",
        ],
        bonus: &["Kubernetes", "Microservices", "GraphQL", "CI/CD", "System Design"],
    },
    RoleTable {
        role: "full stack developer",
        must_have: &[
            "HTML/CSS/JavaScript",
            "Backend Language (Python/Java/Node.js)",
            "SQL",
            "REST APIs",
            "Git",
        ],
        good_to_have: &[
            "React or Vue",
            "Docker",
            "Cloud Basics",
            "Testing",
            "Authentication/Security",
        ],
        bonus: &["TypeScript", "CI/CD", "Kubernetes", "System Design", "DevOps"],
    },
    RoleTable {
        role: "data scientist",
        must_have: &[
            "Python",
            "SQL",
            "Statistics",
            "Pandas/NumPy",
            "Machine Learning Basics",
        ],
        good_to_have: &[
            "Scikit-learn",
            "Data Visualization",
            "Deep Learning",
            "Feature Engineering",
            "Git",
        ],
        bonus: &[
            "MLOps",
            "Spark/Big Data",
            "Cloud ML Services",
            "A/B Testing",
            "NLP/CV",
        ],
    },
    RoleTable {
        role: "devops engineer",
        must_have: &[
            "Linux",
            "Docker",
            "CI/CD",
            "Cloud (AWS/GCP/Azure)",
            "Scripting (Bash/Python)",
        ],
        good_to_have: &[
            "Kubernetes",
            "Terraform/IaC",
            "Monitoring (Prometheus/Grafana)",
            "Networking",
            "Git",
        ],
        bonus: &[
            "Service Mesh",
            "Security (DevSecOps)",
            "Cost Optimization",
            "Multi-cloud",
            "GitOps",
        ],
    },
    RoleTable {
        role: "mobile developer",
        must_have: &[
            "Kotlin/Swift or React Native/Flutter",
            "REST APIs",
            "Git",
            "UI/UX Basics",
            "State Management",
        ],
        good_to_have: &[
            "Testing",
            "CI/CD",
            "Push Notifications",
            "Offline Storage",
            "App Store Deployment",
        ],
        bonus: &[
            "Performance Profiling",
            "Native Modules",
            "GraphQL",
            "Accessibility",
            "Analytics",
        ],
    },
];

const DEFAULT_TABLE: RoleTable = RoleTable {
    role: "default",
    must_have: &[
        "Programming Language",
        "Data Structures & Algorithms",
        "Git",
        "Problem Solving",
        "Communication",
    ],
    good_to_have: &["SQL", "REST APIs", "Testing", "Cloud Basics", "Docker"],
    bonus: &[
        "System Design",
        "CI/CD",
        "Open Source Contributions",
        "Technical Writing",
        "Leadership",
    ],
};

/// Roles with a dedicated requirement table
pub fn known_roles() -> Vec<&'static str> {
    ROLE_TABLES.iter().map(|t| t.role).collect()
}

/// Requirements with alternatives ("React or Vue") match on any variant,
/// case-insensitively and by substring in either direction.
fn has_skill(requirement: &str, skills: &[String]) -> bool {
    requirement.split(" or ").any(|variant| {
        let variant = variant.trim().to_lowercase();
        skills
            .iter()
            .any(|s| *s == variant || s.contains(&variant) || variant.contains(s.as_str()))
    })
}

/// Score `skills` against the requirements for `target_role`
pub fn analyze_skill_gap(skills: &[String], target_role: &str) -> Result<SkillGapReport> {
    let skills: Vec<String> = skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if skills.is_empty() {
        return Err(Error::Validation("At least one skill is required".into()));
    }

    let role = target_role.trim().to_lowercase();
    let table = ROLE_TABLES
        .iter()
        .find(|t| t.role == role)
        .unwrap_or(&DEFAULT_TABLE);

    let mut checks = Vec::new();
    for (tier, list) in [
        (SkillTier::MustHave, table.must_have),
        (SkillTier::GoodToHave, table.good_to_have),
        (SkillTier::Bonus, table.bonus),
    ] {
        for requirement in list {
            checks.push(SkillCheck {
                skill: (*requirement).to_string(),
                tier,
                have: has_skill(requirement, &skills),
            });
        }
    }

    let total_weight: f64 = checks.iter().map(|c| c.tier.weight()).sum();
    let matched_weight: f64 = checks
        .iter()
        .filter(|c| c.have)
        .map(|c| c.tier.weight())
        .sum();
    let readiness = if total_weight > 0.0 {
        matched_weight / total_weight * 100.0
    } else {
        0.0
    };

    let mut missing: Vec<SkillCheck> = checks.iter().filter(|c| !c.have).cloned().collect();
    missing.sort_by(|a, b| {
        b.tier
            .weight()
            .partial_cmp(&a.tier.weight())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.skill.cmp(&b.skill))
    });

    Ok(SkillGapReport {
        role: table.role.to_string(),
        readiness,
        checks,
        missing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_skill_list_is_rejected() {
        assert!(analyze_skill_gap(&[], "frontend developer").is_err());
        assert!(analyze_skill_gap(&skills(&["  ", ""]), "frontend developer").is_err());
    }

    #[test]
    fn unknown_role_falls_back_to_default_table() {
        let report = analyze_skill_gap(&skills(&["Git"]), "wizard").unwrap();
        assert_eq!(report.role, "default");
    }

    #[test]
    fn alternatives_match_any_variant() {
        let report =
            analyze_skill_gap(&skills(&["html", "css", "javascript", "vue", "git"]), "frontend developer")
                .unwrap();
        let react_line = report
            .checks
            .iter()
            .find(|c| c.skill.contains("React or Vue"))
            .unwrap();
        assert!(react_line.have);
    }

    #[test]
    fn readiness_weights_tiers() {
        // All five must-haves met, nothing else: 15 of 30 total weight
        let report = analyze_skill_gap(
            &skills(&["html", "css", "javascript", "react", "git"]),
            "frontend developer",
        )
        .unwrap();
        assert!((report.readiness - 50.0).abs() < 1e-9);
    }

    #[test]
    fn missing_sorted_by_weight_then_name() {
        let report = analyze_skill_gap(&skills(&["git"]), "frontend developer").unwrap();
        let weights: Vec<f64> = report.missing.iter().map(|c| c.tier.weight()).collect();
        let mut sorted = weights.clone();
        sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());
        assert_eq!(weights, sorted);

        // Within the must-have tier, names are alphabetical
        let must: Vec<&str> = report
            .missing
            .iter()
            .filter(|c| c.tier == SkillTier::MustHave)
            .map(|c| c.skill.as_str())
            .collect();
        let mut expected = must.clone();
        expected.sort();
        assert_eq!(must, expected);
    }
}
