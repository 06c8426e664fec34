//! Role classifier: maps a free-text job title to a fixed role category.
//!
//! Classification walks `ROLE_RULES` top to bottom and returns the category of
//! the first rule with a matching needle. Categories overlap in vocabulary
//! ("sales manager", "product manager", "principal engineer"), so the table
//! order IS the precedence:
//!
//! 1. product titles, then design
//! 2. industry roles (sales … retail)
//! 3. tech specialties (frontend … security)
//! 4. generic leadership
//! 5. no match → `RoleCategory::General`

use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse job-title taxonomy used to pick role-relevant question banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    Frontend,
    Backend,
    Fullstack,
    Mobile,
    Data,
    Ml,
    Devops,
    Security,
    Product,
    Design,
    Sales,
    Marketing,
    Finance,
    Hr,
    Operations,
    CustomerService,
    Healthcare,
    Education,
    Legal,
    Consulting,
    Creative,
    Hospitality,
    Retail,
    Leadership,
    General,
}

impl RoleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCategory::Frontend => "frontend",
            RoleCategory::Backend => "backend",
            RoleCategory::Fullstack => "fullstack",
            RoleCategory::Mobile => "mobile",
            RoleCategory::Data => "data",
            RoleCategory::Ml => "ml",
            RoleCategory::Devops => "devops",
            RoleCategory::Security => "security",
            RoleCategory::Product => "product",
            RoleCategory::Design => "design",
            RoleCategory::Sales => "sales",
            RoleCategory::Marketing => "marketing",
            RoleCategory::Finance => "finance",
            RoleCategory::Hr => "hr",
            RoleCategory::Operations => "operations",
            RoleCategory::CustomerService => "customer_service",
            RoleCategory::Healthcare => "healthcare",
            RoleCategory::Education => "education",
            RoleCategory::Legal => "legal",
            RoleCategory::Consulting => "consulting",
            RoleCategory::Creative => "creative",
            RoleCategory::Hospitality => "hospitality",
            RoleCategory::Retail => "retail",
            RoleCategory::Leadership => "leadership",
            RoleCategory::General => "general",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when no rule matches.
pub const FALLBACK_CATEGORY: RoleCategory = RoleCategory::General;

/// A single match term. Needles are lower-case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Needle {
    /// Matches anywhere in the lower-cased title.
    Sub(&'static str),
    /// Matches only a whole alphanumeric word, so "go" does not fire on "google".
    Word(&'static str),
}

impl Needle {
    fn matches(&self, lowered: &str, words: &[&str]) -> bool {
        match self {
            Needle::Sub(s) => lowered.contains(s),
            Needle::Word(w) => words.iter().any(|word| word == w),
        }
    }
}

/// One row of the precedence table.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub category: RoleCategory,
    pub needles: &'static [Needle],
}

impl RoleRule {
    fn matches(&self, lowered: &str, words: &[&str]) -> bool {
        self.needles.iter().any(|n| n.matches(lowered, words))
    }
}

use Needle::{Sub, Word};

/// Ordered classification rules. Earlier rows win.
pub const ROLE_RULES: &[RoleRule] = &[
    // ── Product & design ────────────────────────────────────────────────────
    RoleRule {
        category: RoleCategory::Product,
        needles: &[
            Sub("product manager"),
            Sub("product owner"),
            Sub("product lead"),
            Sub("head of product"),
            Sub("director of product"),
            Sub("vp of product"),
            Sub("chief product officer"),
            Sub("product analyst"),
            Sub("product operations"),
            Sub("product strategist"),
            Sub("program manager"),
            Sub("project manager"),
            Sub("scrum master"),
            Sub("agile coach"),
        ],
    },
    RoleRule {
        category: RoleCategory::Design,
        needles: &[
            Word("ux"),
            Sub("ui/ux"),
            Sub("ui designer"),
            Sub("product designer"),
            Sub("interaction designer"),
            Sub("user experience"),
            Sub("user research"),
            Sub("design system"),
        ],
    },
    // ── Industry roles ──────────────────────────────────────────────────────
    RoleRule {
        category: RoleCategory::Sales,
        needles: &[
            Sub("sales"),
            Sub("account executive"),
            Sub("account manager"),
            Sub("business development"),
            Word("bdr"),
            Word("sdr"),
        ],
    },
    RoleRule {
        category: RoleCategory::Marketing,
        needles: &[
            Sub("marketing"),
            Sub("growth"),
            Word("seo"),
            Sub("content"),
            Sub("brand"),
            Sub("social media"),
        ],
    },
    RoleRule {
        category: RoleCategory::Finance,
        needles: &[
            Sub("finance"),
            Sub("financial"),
            Sub("accounting"),
            Sub("accountant"),
            Sub("bookkeeper"),
            Sub("controller"),
            Sub("treasurer"),
            Sub("auditor"),
            Sub("fp&a"),
            Sub("budget analyst"),
            Sub("investment analyst"),
        ],
    },
    RoleRule {
        category: RoleCategory::Hr,
        needles: &[
            Word("hr"),
            Sub("human resource"),
            Sub("recruiter"),
            Sub("talent"),
            Sub("people operations"),
        ],
    },
    RoleRule {
        category: RoleCategory::Operations,
        needles: &[
            Sub("operations"),
            Sub("supply chain"),
            Sub("logistics"),
            Sub("procurement"),
            Sub("warehouse"),
        ],
    },
    RoleRule {
        category: RoleCategory::CustomerService,
        needles: &[
            Sub("customer service"),
            Sub("customer support"),
            Sub("customer success"),
            Sub("support specialist"),
            Sub("help desk"),
            Sub("call center"),
        ],
    },
    RoleRule {
        category: RoleCategory::Healthcare,
        needles: &[
            Sub("nurse"),
            Sub("doctor"),
            Sub("physician"),
            Sub("medical"),
            Sub("healthcare"),
            Sub("clinical"),
            Sub("pharmacist"),
            Sub("therapist"),
            Sub("dentist"),
            Sub("dental"),
            Sub("radiolog"),
            Sub("paramedic"),
        ],
    },
    RoleRule {
        category: RoleCategory::Education,
        needles: &[
            Sub("teacher"),
            Sub("professor"),
            Sub("instructor"),
            Sub("education"),
            Sub("academic"),
            Sub("trainer"),
            Sub("tutor"),
            Sub("lecturer"),
            Sub("school principal"),
        ],
    },
    RoleRule {
        category: RoleCategory::Legal,
        needles: &[
            Sub("attorney"),
            Sub("lawyer"),
            Sub("legal"),
            Word("counsel"),
            Sub("litigation"),
            Sub("law firm"),
            Sub("paralegal"),
            Sub("compliance officer"),
        ],
    },
    RoleRule {
        category: RoleCategory::Consulting,
        needles: &[Sub("consultant"), Sub("consulting"), Sub("advisory")],
    },
    RoleRule {
        category: RoleCategory::Creative,
        needles: &[
            Sub("designer"),
            Sub("creative"),
            Sub("art director"),
            Sub("copywriter"),
            Sub("illustrator"),
            Sub("photographer"),
            Sub("animator"),
            Sub("video editor"),
        ],
    },
    RoleRule {
        category: RoleCategory::Hospitality,
        needles: &[
            Sub("hotel"),
            Sub("restaurant"),
            Sub("hospitality"),
            Sub("chef"),
            Sub("catering"),
            Sub("front desk"),
            Sub("concierge"),
            Sub("bartender"),
        ],
    },
    RoleRule {
        category: RoleCategory::Retail,
        needles: &[
            Sub("retail"),
            Sub("store manager"),
            Sub("merchandis"),
            Sub("sales associate"),
            Sub("cashier"),
        ],
    },
    // ── Tech specialties ────────────────────────────────────────────────────
    RoleRule {
        category: RoleCategory::Frontend,
        needles: &[
            Sub("frontend"),
            Sub("front-end"),
            Sub("front end"),
            Sub("react"),
            Sub("vue"),
            Sub("angular"),
            Sub("next.js"),
            Sub("javascript"),
            Sub("typescript"),
            Sub("ui engineer"),
            Sub("web developer"),
        ],
    },
    RoleRule {
        category: RoleCategory::Backend,
        needles: &[
            Sub("backend"),
            Sub("back-end"),
            Sub("back end"),
            Sub("node"),
            Sub("python"),
            Word("java"),
            Word("go"),
            Sub("golang"),
            Word("ruby"),
            Word("rails"),
            Sub(".net"),
            Word("php"),
            Word("scala"),
            Word("rust"),
            Sub("django"),
            Sub("spring boot"),
            Sub("fastapi"),
            Sub("api engineer"),
        ],
    },
    RoleRule {
        category: RoleCategory::Fullstack,
        needles: &[
            Sub("full stack"),
            Sub("full-stack"),
            Sub("fullstack"),
            Word("mern"),
            Word("mean"),
            Sub("jamstack"),
        ],
    },
    RoleRule {
        category: RoleCategory::Mobile,
        needles: &[
            Sub("mobile"),
            Word("ios"),
            Sub("android"),
            Sub("react native"),
            Sub("flutter"),
            Word("swift"),
            Word("kotlin"),
        ],
    },
    RoleRule {
        category: RoleCategory::Data,
        needles: &[
            Sub("data engineer"),
            Sub("data scientist"),
            Sub("data analyst"),
            Sub("analytics engineer"),
            Sub("big data"),
        ],
    },
    RoleRule {
        category: RoleCategory::Ml,
        needles: &[
            Sub("machine learning"),
            Sub("ml engineer"),
            Word("ml"),
            Word("ai"),
            Sub("mlops"),
            Sub("deep learning"),
            Word("nlp"),
            Sub("computer vision"),
        ],
    },
    RoleRule {
        category: RoleCategory::Devops,
        needles: &[
            Sub("devops"),
            Word("sre"),
            Sub("site reliability"),
            Sub("cloud"),
            Sub("infrastructure"),
            Sub("platform engineer"),
            Sub("kubernetes"),
            Sub("release engineer"),
            Sub("build engineer"),
        ],
    },
    RoleRule {
        category: RoleCategory::Security,
        needles: &[
            Sub("security"),
            Sub("penetration"),
            Sub("cryptograph"),
            Sub("cybersecurity"),
        ],
    },
    // ── Generic leadership ──────────────────────────────────────────────────
    RoleRule {
        category: RoleCategory::Leadership,
        needles: &[
            Sub("lead"),
            Sub("manager"),
            Sub("director"),
            Sub("head of"),
            Word("vp"),
            Word("cto"),
            Word("ceo"),
            Word("cfo"),
            Word("coo"),
            Sub("chief"),
            Word("staff"),
            Word("principal"),
            Sub("founder"),
        ],
    },
];

/// Classifies a free-text role description. Total: never fails.
pub fn classify(role_description: &str) -> RoleCategory {
    let lowered = role_description.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    ROLE_RULES
        .iter()
        .find(|rule| rule.matches(&lowered, &words))
        .map(|rule| rule.category)
        .unwrap_or(FALLBACK_CATEGORY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule_index(category: RoleCategory) -> usize {
        ROLE_RULES
            .iter()
            .position(|r| r.category == category)
            .unwrap_or_else(|| panic!("no rule for {category}"))
    }

    #[test]
    fn test_classification_is_deterministic() {
        for title in ["Senior React Engineer", "Sales Manager", "Nurse", "???"] {
            let first = classify(title);
            for _ in 0..20 {
                assert_eq!(classify(title), first, "unstable for {title}");
            }
        }
    }

    #[test]
    fn test_unmatched_falls_back_to_general() {
        assert_eq!(classify("zzz-nonsense-title"), RoleCategory::General);
        assert_eq!(classify(""), RoleCategory::General);
        assert_eq!(classify("Software Engineer"), RoleCategory::General);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("SENIOR REACT ENGINEER"), RoleCategory::Frontend);
        assert_eq!(classify("senior react engineer"), RoleCategory::Frontend);
    }

    #[test]
    fn test_tech_specialties() {
        let cases = [
            ("Senior React Engineer at Series B Startup", RoleCategory::Frontend),
            ("Senior Vue.js Engineer at Startup", RoleCategory::Frontend),
            ("Senior TypeScript Developer at SaaS Company", RoleCategory::Frontend),
            ("Senior Node.js Engineer at Series B Startup", RoleCategory::Backend),
            ("Senior Java Engineer at Enterprise", RoleCategory::Backend),
            ("Senior Go Engineer at Cloud Company", RoleCategory::Backend),
            ("Senior .NET Engineer at Enterprise", RoleCategory::Backend),
            ("Senior Full Stack Engineer at Startup", RoleCategory::Fullstack),
            ("Senior iOS Engineer at Series B Startup", RoleCategory::Mobile),
            ("Flutter Developer at Mobile First Company", RoleCategory::Mobile),
            ("Senior Data Engineer at FAANG", RoleCategory::Data),
            ("Machine Learning Engineer at AI Startup", RoleCategory::Ml),
            ("AI/ML Researcher at Research Lab", RoleCategory::Ml),
            ("Senior Site Reliability Engineer at FAANG", RoleCategory::Devops),
            ("Kubernetes Engineer at Cloud Native Company", RoleCategory::Devops),
            ("Penetration Tester at Security Firm", RoleCategory::Security),
        ];
        for (title, expected) in cases {
            assert_eq!(classify(title), expected, "title: {title}");
        }
    }

    #[test]
    fn test_industry_roles() {
        let cases = [
            ("Account Executive at SaaS Company", RoleCategory::Sales),
            ("SEO Specialist at Agency", RoleCategory::Marketing),
            ("Senior Accountant at Big Four", RoleCategory::Finance),
            ("Controller at Growing Company", RoleCategory::Finance),
            ("FP&A Analyst", RoleCategory::Finance),
            ("Investment Analyst at Hedge Fund", RoleCategory::Finance),
            ("HR Business Partner", RoleCategory::Hr),
            ("Technical Recruiter at Startup", RoleCategory::Hr),
            ("Supply Chain Analyst", RoleCategory::Operations),
            ("Customer Success Specialist", RoleCategory::CustomerService),
            ("Registered Nurse at Hospital", RoleCategory::Healthcare),
            ("High School Teacher", RoleCategory::Education),
            ("Corporate Attorney at Law Firm", RoleCategory::Legal),
            ("Corporate Counsel at Company", RoleCategory::Legal),
            ("In-House Counsel at Company", RoleCategory::Legal),
            ("Senior Corporate Counsel at Enterprise", RoleCategory::Legal),
            ("General Counsel", RoleCategory::Legal),
            ("Partner at Law Firm", RoleCategory::Legal),
            ("Litigation Paralegal", RoleCategory::Legal),
            ("Dental Hygienist at Dental Office", RoleCategory::Healthcare),
            ("Strategy Consultant", RoleCategory::Consulting),
            ("Graphic Designer at Agency", RoleCategory::Creative),
            ("Executive Chef at Restaurant", RoleCategory::Hospitality),
            ("Store Manager at Retail Chain", RoleCategory::Retail),
            ("Senior Product Manager at FAANG", RoleCategory::Product),
            ("Senior UX Engineer at Product Company", RoleCategory::Design),
        ];
        for (title, expected) in cases {
            assert_eq!(classify(title), expected, "title: {title}");
        }
    }

    /// "Sales Manager" contains both an industry needle and a leadership
    /// needle; industry rules run first, so it is a sales role.
    #[test]
    fn test_sales_manager_is_sales_not_leadership() {
        assert!(rule_index(RoleCategory::Sales) < rule_index(RoleCategory::Leadership));
        assert_eq!(classify("Sales Manager"), RoleCategory::Sales);
    }

    #[test]
    fn test_overlapping_titles_follow_table_order() {
        // product before leadership
        assert_eq!(classify("Product Manager at Tech Company"), RoleCategory::Product);
        // no industry or tech needle → leadership
        assert_eq!(classify("Engineering Manager"), RoleCategory::Leadership);
        assert_eq!(classify("VP of Engineering"), RoleCategory::Leadership);
        assert_eq!(classify("Principal Engineer"), RoleCategory::Leadership);
        // tech specialty before leadership
        assert_eq!(classify("Frontend Lead"), RoleCategory::Frontend);
        // frontend precedes mobile, so "react native" never reaches mobile
        assert_eq!(classify("React Native Engineer at Startup"), RoleCategory::Frontend);
        // "product marketing manager" is not a product manager title
        assert_eq!(classify("Product Marketing Manager"), RoleCategory::Marketing);
        // sales precedes retail
        assert_eq!(classify("Sales Associate at Department Store"), RoleCategory::Sales);
        // industry before tech
        assert_eq!(classify("Growth Engineer at Consumer Company"), RoleCategory::Marketing);
        // "principal" alone is leadership, school principal is education
        assert_eq!(classify("School Principal"), RoleCategory::Education);
    }

    #[test]
    fn test_word_needles_do_not_fire_inside_words() {
        // "go" in "google", "ai" in "retail"/"trainer", "java" in "javascript"
        assert_eq!(classify("Engineer at Google"), RoleCategory::General);
        assert_eq!(classify("JavaScript Engineer"), RoleCategory::Frontend);
        assert_eq!(classify("Corporate Trainer"), RoleCategory::Education);
        assert_eq!(classify("Chicago Office Administrator"), RoleCategory::General);
    }

    #[test]
    fn test_rule_order_matches_precedence() {
        let order: Vec<RoleCategory> = ROLE_RULES.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                RoleCategory::Product,
                RoleCategory::Design,
                RoleCategory::Sales,
                RoleCategory::Marketing,
                RoleCategory::Finance,
                RoleCategory::Hr,
                RoleCategory::Operations,
                RoleCategory::CustomerService,
                RoleCategory::Healthcare,
                RoleCategory::Education,
                RoleCategory::Legal,
                RoleCategory::Consulting,
                RoleCategory::Creative,
                RoleCategory::Hospitality,
                RoleCategory::Retail,
                RoleCategory::Frontend,
                RoleCategory::Backend,
                RoleCategory::Fullstack,
                RoleCategory::Mobile,
                RoleCategory::Data,
                RoleCategory::Ml,
                RoleCategory::Devops,
                RoleCategory::Security,
                RoleCategory::Leadership,
            ]
        );
    }

    #[test]
    fn test_needles_are_lowercase() {
        for rule in ROLE_RULES {
            for needle in rule.needles {
                let text = match needle {
                    Needle::Sub(s) | Needle::Word(s) => *s,
                };
                assert_eq!(text, text.to_lowercase(), "needle {text:?} must be lower-case");
            }
        }
    }

    #[test]
    fn test_category_serde_name_matches_as_str() {
        let json = serde_json::to_string(&RoleCategory::CustomerService).unwrap();
        assert_eq!(json, "\"customer_service\"");
        assert_eq!(RoleCategory::CustomerService.as_str(), "customer_service");
    }
}
