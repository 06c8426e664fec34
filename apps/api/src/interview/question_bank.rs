//! Static question banks.
//!
//! Technical and situational banks are keyed by role category and fall back to
//! the general bank when a category has none. The other five types share one
//! global bank each. Every resolved pool is non-empty.

use crate::interview::models::QuestionType;
use crate::interview::role_classifier::RoleCategory;

// ────────────────────────────────────────────────────────────────────────────
// Global banks
// ────────────────────────────────────────────────────────────────────────────

pub const BEHAVIORAL: &[&str] = &[
    "Tell me about a time you disagreed with a decision. How did you handle it?",
    "Describe a situation where you had to meet a tight deadline. What was your approach?",
    "Tell me about a project that didn't go as planned. What did you learn?",
    "How do you handle receiving critical feedback on your work?",
    "Describe a time you had to work with a difficult colleague or client.",
    "Tell me about your most challenging problem at work and how you solved it.",
    "How do you prioritize when everything seems urgent?",
    "Describe a time you went above and beyond expectations.",
    "Tell me about a time you had to learn something new quickly.",
    "How do you handle ambiguity or unclear expectations?",
    "Tell me about a time you failed. What did you do next?",
    "Describe a situation where you had to influence someone without direct authority.",
];

pub const LEADERSHIP: &[&str] = &[
    "How do you approach mentoring or helping less experienced colleagues?",
    "Describe your leadership style and how it has evolved.",
    "How do you make decisions that affect others on your team?",
    "Tell me about a time you had to drive consensus on a difficult issue.",
    "How do you balance competing priorities in your work?",
    "Describe how you've helped someone grow in their role.",
    "How do you handle underperformance or conflicts in a team?",
    "What's your approach to giving constructive feedback?",
    "How do you foster a positive and productive work environment?",
    "Tell me about a time you had to push back on a request from leadership.",
];

pub const PROBLEM_SOLVING: &[&str] = &[
    "Walk me through how you would approach solving a complex problem you've never seen before.",
    "How do you investigate when something isn't working as expected?",
    "Describe your systematic approach to troubleshooting issues.",
    "How do you break down large, ambiguous problems into manageable parts?",
    "Tell me about a creative solution you developed for a difficult challenge.",
    "How do you validate your assumptions when solving problems?",
    "Describe a time you had to make a decision with incomplete information.",
    "What frameworks or mental models do you use for problem-solving?",
    "How do you know when to stop iterating and ship a solution?",
    "Tell me about a time you identified a problem before it became critical.",
];

pub const CULTURE_FIT: &[&str] = &[
    "What type of work environment do you thrive in?",
    "How do you stay current with trends and best practices in your field?",
    "What motivates you in your work?",
    "Describe your ideal team culture.",
    "How do you handle work-life balance?",
    "What's the most important thing you're looking for in your next role?",
    "How do you prefer to receive feedback?",
    "What does collaboration mean to you?",
    "How do you approach learning new skills or concepts?",
    "What's your definition of success in a role like this?",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Tell me about a time you had to explain a complex concept to someone without technical background.",
    "How do you handle disagreements with colleagues while maintaining professional relationships?",
    "Describe a situation where you had to adapt your communication style for different audiences.",
    "Tell me about a time you successfully mediated a conflict between team members.",
    "How do you build trust and rapport with new colleagues or clients?",
    "Describe a time when active listening helped you solve a problem.",
    "How do you ensure everyone's voice is heard during team discussions?",
    "Tell me about a time you had to deliver difficult feedback. How did you approach it?",
    "How do you handle situations where you disagree with a decision but need to support it?",
    "Describe your approach to giving and receiving constructive criticism.",
    "Tell me about a time you successfully persuaded someone to change their mind.",
    "How do you maintain positive relationships with stakeholders who have competing interests?",
];

// ────────────────────────────────────────────────────────────────────────────
// Role-specific ("technical") banks
// ────────────────────────────────────────────────────────────────────────────

pub const GENERAL_TECHNICAL: &[&str] = &[
    "Walk me through the most significant project in your career so far and your role in it.",
    "Which tools or methods do you rely on most in your day-to-day work, and why?",
    "How do you measure the quality of your own work?",
    "Describe a process in your current role that you improved. What changed?",
    "What skill in your field have you worked hardest to develop?",
    "How do you keep your domain knowledge up to date?",
    "Tell me about a time you had to get up to speed on an unfamiliar area of your job.",
    "What does a great outcome look like in the first 90 days of this role?",
];

const FRONTEND_TECHNICAL: &[&str] = &[
    "How would you optimize the performance of a React application?",
    "Explain your approach to responsive design and mobile-first development",
    "How do you handle state management in large-scale applications?",
    "Describe your experience with component libraries and design systems",
    "How would you implement infinite scrolling or virtualization?",
    "Explain your approach to accessibility (a11y) in web applications",
    "How do you optimize bundle size and loading performance?",
    "Describe your testing strategy for frontend applications",
    "How would you implement server-side rendering (SSR)?",
    "Explain your approach to CSS-in-JS vs traditional CSS",
];

const BACKEND_TECHNICAL: &[&str] = &[
    "How would you design a scalable API architecture?",
    "Explain your approach to database optimization and indexing",
    "How do you handle authentication and authorization at scale?",
    "Describe your experience with microservices vs monolith architecture",
    "How would you implement caching strategies for APIs?",
    "Explain your approach to API versioning and backward compatibility",
    "How do you handle rate limiting and API throttling?",
    "Describe your experience with message queues and event-driven architecture",
    "How would you design a background job processing system?",
    "Explain your approach to monitoring and logging in production",
];

const FULLSTACK_TECHNICAL: &[&str] = &[
    "How do you balance frontend and backend responsibilities in your work?",
    "Describe a full-stack feature you built from scratch",
    "How do you handle real-time data synchronization between client and server?",
    "Explain your approach to API design for frontend consumption",
    "How would you architect a new web application from the ground up?",
    "Describe your experience with modern deployment and DevOps practices",
    "How do you optimize the entire stack for performance?",
    "Explain your testing strategy across the full stack",
];

const MOBILE_TECHNICAL: &[&str] = &[
    "How do you handle offline functionality in mobile apps?",
    "Explain your approach to mobile app performance optimization",
    "How do you manage different screen sizes and device capabilities?",
    "Describe your experience with native vs cross-platform development",
    "How would you implement push notifications at scale?",
    "Explain your approach to mobile app security",
    "How do you handle app store submissions and updates?",
    "Describe your mobile testing and QA strategy",
];

const DATA_TECHNICAL: &[&str] = &[
    "How would you design a data pipeline for real-time analytics?",
    "Explain your approach to data modeling and schema design",
    "How do you handle data quality and validation?",
    "Describe your experience with distributed data processing",
    "How would you optimize slow-running queries?",
    "Explain your approach to data warehousing vs data lakes",
    "How do you ensure data privacy and compliance (GDPR, etc.)?",
    "Describe your experience with ETL/ELT processes",
];

const ML_TECHNICAL: &[&str] = &[
    "How would you deploy a machine learning model to production?",
    "Explain your approach to feature engineering",
    "How do you handle model versioning and monitoring?",
    "Describe your experience with model evaluation and metrics",
    "How would you address model bias and fairness?",
    "Explain your approach to hyperparameter tuning",
    "How do you handle model retraining and continuous learning?",
    "Describe your experience with MLOps and infrastructure",
];

const DEVOPS_TECHNICAL: &[&str] = &[
    "How would you design a CI/CD pipeline from scratch?",
    "Explain your approach to infrastructure as code (IaC)",
    "How do you handle incident response and on-call rotations?",
    "Describe your experience with container orchestration",
    "How would you implement zero-downtime deployments?",
    "Explain your approach to monitoring and observability",
    "How do you handle infrastructure scaling and cost optimization?",
    "Describe your experience with disaster recovery and backup strategies",
];

const SECURITY_TECHNICAL: &[&str] = &[
    "How would you conduct a security audit for a web application?",
    "Explain your approach to threat modeling",
    "How do you handle vulnerability management and patching?",
    "Describe your experience with security compliance (SOC2, ISO, etc.)",
    "How would you implement secure authentication and authorization?",
    "Explain your approach to secrets management",
    "How do you handle security incident response?",
    "Describe your experience with penetration testing",
];

const LEADERSHIP_TECHNICAL: &[&str] = &[
    "How do you prioritize technical roadmap items?",
    "Explain your approach to hiring and building teams",
    "How do you handle conflicts within your team?",
    "Describe your experience with agile methodologies",
    "How do you balance technical debt with feature development?",
    "Explain your approach to performance reviews and career development",
    "How do you ensure knowledge sharing within the team?",
    "Describe a time you had to make a difficult technical decision",
];

const SALES_TECHNICAL: &[&str] = &[
    "How do you approach cold outreach and prospecting?",
    "Describe your sales process from lead to close",
    "How do you handle objections during the sales cycle?",
    "Tell me about your most successful deal and how you closed it",
    "How do you manage and prioritize your sales pipeline?",
    "Describe your approach to building long-term client relationships",
    "How do you stay motivated during slow periods?",
    "What's your strategy for upselling and cross-selling?",
];

const MARKETING_TECHNICAL: &[&str] = &[
    "How do you measure the success of marketing campaigns?",
    "Describe your approach to content strategy and creation",
    "How do you identify and reach your target audience?",
    "Tell me about a campaign that didn't perform well and what you learned",
    "How do you balance brand awareness with lead generation?",
    "Describe your experience with marketing analytics and attribution",
    "How do you stay updated on marketing trends and best practices?",
    "What's your approach to A/B testing and optimization?",
];

const FINANCE_TECHNICAL: &[&str] = &[
    "How do you approach financial forecasting and budgeting?",
    "Describe your experience with financial modeling",
    "How do you handle month-end and year-end close processes?",
    "Tell me about a time you identified cost-saving opportunities",
    "How do you ensure compliance with financial regulations?",
    "Describe your approach to variance analysis",
    "How do you communicate financial insights to non-finance stakeholders?",
    "What's your experience with financial reporting systems?",
];

const HR_TECHNICAL: &[&str] = &[
    "How do you approach talent acquisition and recruitment?",
    "Describe your experience with employee relations and conflict resolution",
    "How do you handle sensitive HR situations?",
    "Tell me about a successful employee retention initiative you implemented",
    "How do you ensure compliance with employment laws?",
    "Describe your approach to performance management",
    "How do you build and maintain company culture?",
    "What's your strategy for diversity and inclusion?",
];

const OPERATIONS_TECHNICAL: &[&str] = &[
    "How do you identify and eliminate operational inefficiencies?",
    "Describe your approach to process improvement",
    "How do you manage cross-functional projects?",
    "Tell me about a time you improved operational metrics",
    "How do you balance quality with speed and cost?",
    "Describe your experience with supply chain management",
    "How do you handle capacity planning and resource allocation?",
    "What's your approach to vendor management?",
];

const CUSTOMER_SERVICE_TECHNICAL: &[&str] = &[
    "How do you handle difficult or upset customers?",
    "Describe your approach to measuring customer satisfaction",
    "How do you prioritize customer issues and requests?",
    "Tell me about a time you turned a negative customer experience into a positive one",
    "How do you balance customer needs with company policies?",
    "Describe your experience with customer service tools and systems",
    "How do you train and develop customer service team members?",
    "What's your strategy for reducing customer churn?",
];

const HEALTHCARE_TECHNICAL: &[&str] = &[
    "How do you ensure patient safety and quality of care?",
    "Describe your approach to handling medical emergencies",
    "How do you manage your time with multiple patients?",
    "Tell me about a challenging patient interaction and how you handled it",
    "How do you stay current with medical best practices?",
    "Describe your experience with electronic health records",
    "How do you communicate complex medical information to patients?",
    "What's your approach to working in a multidisciplinary healthcare team?",
];

const EDUCATION_TECHNICAL: &[&str] = &[
    "How do you engage students with different learning styles?",
    "Describe your classroom management approach",
    "How do you assess student progress and learning outcomes?",
    "Tell me about a lesson plan that was particularly effective",
    "How do you handle difficult students or parents?",
    "Describe your approach to curriculum development",
    "How do you integrate technology into your teaching?",
    "What's your strategy for differentiated instruction?",
];

const LEGAL_TECHNICAL: &[&str] = &[
    "How do you approach legal research and case preparation?",
    "Describe your experience with contract negotiation and drafting",
    "How do you manage multiple cases or projects simultaneously?",
    "Tell me about a complex legal issue you resolved",
    "How do you communicate legal concepts to non-legal stakeholders?",
    "Describe your approach to risk management and compliance",
    "How do you stay current with changes in law and regulations?",
    "What's your experience with dispute resolution and litigation?",
];

const CREATIVE_TECHNICAL: &[&str] = &[
    "Walk me through your creative process from concept to execution",
    "How do you handle creative feedback and revisions?",
    "Describe a project where you had to balance creativity with client constraints",
    "Tell me about a time your creative work exceeded expectations",
    "How do you stay inspired and overcome creative blocks?",
    "Describe your experience collaborating with other creatives",
    "How do you manage multiple creative projects with tight deadlines?",
    "What's your approach to presenting and defending your creative work?",
];

const HOSPITALITY_TECHNICAL: &[&str] = &[
    "How do you ensure exceptional guest experiences?",
    "Describe your approach to handling guest complaints",
    "How do you manage staff during peak periods?",
    "Tell me about a time you exceeded guest expectations",
    "How do you balance service quality with operational efficiency?",
    "Describe your experience with revenue management",
    "How do you train and develop hospitality staff?",
    "What's your approach to maintaining standards and consistency?",
];

const RETAIL_TECHNICAL: &[&str] = &[
    "How do you drive sales and meet revenue targets?",
    "Describe your approach to visual merchandising and store layout",
    "How do you handle inventory management and shrinkage?",
    "Tell me about a successful promotion or event you executed",
    "How do you coach and develop retail staff?",
    "Describe your experience with retail analytics and reporting",
    "How do you create a positive customer shopping experience?",
    "What's your strategy for managing seasonal fluctuations?",
];

/// Role-specific bank for `category`, if one exists.
pub fn technical_bank(category: RoleCategory) -> Option<&'static [&'static str]> {
    let bank = match category {
        RoleCategory::Frontend => FRONTEND_TECHNICAL,
        RoleCategory::Backend => BACKEND_TECHNICAL,
        RoleCategory::Fullstack => FULLSTACK_TECHNICAL,
        RoleCategory::Mobile => MOBILE_TECHNICAL,
        RoleCategory::Data => DATA_TECHNICAL,
        RoleCategory::Ml => ML_TECHNICAL,
        RoleCategory::Devops => DEVOPS_TECHNICAL,
        RoleCategory::Security => SECURITY_TECHNICAL,
        RoleCategory::Leadership => LEADERSHIP_TECHNICAL,
        RoleCategory::Sales => SALES_TECHNICAL,
        RoleCategory::Marketing => MARKETING_TECHNICAL,
        RoleCategory::Finance => FINANCE_TECHNICAL,
        RoleCategory::Hr => HR_TECHNICAL,
        RoleCategory::Operations => OPERATIONS_TECHNICAL,
        RoleCategory::CustomerService => CUSTOMER_SERVICE_TECHNICAL,
        RoleCategory::Healthcare => HEALTHCARE_TECHNICAL,
        RoleCategory::Education => EDUCATION_TECHNICAL,
        RoleCategory::Legal => LEGAL_TECHNICAL,
        RoleCategory::Creative => CREATIVE_TECHNICAL,
        RoleCategory::Hospitality => HOSPITALITY_TECHNICAL,
        RoleCategory::Retail => RETAIL_TECHNICAL,
        RoleCategory::Product
        | RoleCategory::Design
        | RoleCategory::Consulting
        | RoleCategory::General => return None,
    };
    Some(bank)
}

// ────────────────────────────────────────────────────────────────────────────
// Situational banks
// ────────────────────────────────────────────────────────────────────────────

pub const GENERAL_SITUATIONAL: &[&str] = &[
    "You're given a task with unclear instructions. How do you proceed?",
    "A colleague takes credit for your work. How do you handle the situation?",
    "You realize you made a mistake that affects others. What do you do?",
];

/// Situational bank for `category`, if one exists.
pub fn situational_bank(category: RoleCategory) -> Option<&'static [&'static str]> {
    let bank: &'static [&'static str] = match category {
        RoleCategory::Frontend => &[
            "A critical bug is reported in production affecting user checkout. Walk me through your debugging process.",
            "You need to improve page load time by 50%. What would you prioritize?",
            "A designer hands you mockups that seem technically complex. How do you approach the conversation?",
        ],
        RoleCategory::Backend => &[
            "Your API starts returning slow responses during peak traffic. How do you investigate?",
            "You discover a database query that's causing performance issues. Walk me through your optimization approach.",
            "A third-party service your system depends on goes down. How do you handle it?",
        ],
        RoleCategory::Fullstack => &[
            "You need to add a new feature that touches both frontend and backend. How do you plan your approach?",
            "Users report data inconsistencies between what they see and what's in the database. How do you debug?",
            "You're asked to build a real-time feature. What considerations go into your architecture decision?",
        ],
        RoleCategory::Mobile => &[
            "Users complain about battery drain from your app. How do you investigate and fix it?",
            "You need to support both iOS and Android with limited resources. How do you make the decision?",
            "App store reviews mention crashes. Walk me through your crash investigation process.",
        ],
        RoleCategory::Data => &[
            "A stakeholder reports that dashboard numbers don't match their expectations. How do you investigate?",
            "You need to process 10x more data than your current pipeline handles. What's your approach?",
            "You discover data quality issues affecting downstream reports. How do you handle it?",
        ],
        RoleCategory::Ml => &[
            "Your model's performance degrades over time in production. How do you investigate?",
            "Stakeholders want to understand why the model made a specific prediction. How do you explain it?",
            "You need to deploy a model but have concerns about bias. What steps do you take?",
        ],
        RoleCategory::Devops => &[
            "A deployment fails and you need to roll back quickly. Walk me through your process.",
            "You notice infrastructure costs have increased 40% this month. How do you investigate?",
            "A critical security vulnerability is announced. How do you prioritize and respond?",
        ],
        RoleCategory::Security => &[
            "You discover a potential data breach. Walk me through your incident response.",
            "A new feature request raises security concerns. How do you communicate the risks?",
            "You need to implement security for a new application. Where do you start?",
        ],
        RoleCategory::Product => &[
            "Engineering says your feature request will take 3x longer than expected. How do you handle it?",
            "Two stakeholders have conflicting priorities for the roadmap. How do you resolve it?",
            "User research contradicts what your biggest customer is asking for. What do you do?",
        ],
        RoleCategory::Design => &[
            "Engineering pushes back on your design due to technical constraints. How do you handle it?",
            "Stakeholders disagree with your design direction. How do you navigate the situation?",
            "You have limited time for user research but need to make design decisions. What's your approach?",
        ],
        RoleCategory::Sales => &[
            "A prospect goes silent after your proposal. How do you re-engage them?",
            "You're behind on your quarterly quota with one month left. What's your strategy?",
            "A customer is unhappy and threatening to churn. How do you handle the conversation?",
        ],
        RoleCategory::Marketing => &[
            "A campaign underperforms significantly. How do you analyze what went wrong?",
            "You have limited budget but need to hit aggressive growth targets. How do you prioritize?",
            "Your brand messaging isn't resonating with the target audience. What's your approach?",
        ],
        RoleCategory::Finance => &[
            "You discover a discrepancy in the financial reports. How do you investigate?",
            "The budget needs to be cut by 15%. How do you approach the analysis?",
            "A business unit is asking for budget that wasn't planned. How do you evaluate the request?",
        ],
        RoleCategory::Hr => &[
            "An employee files a complaint about their manager. How do you handle it?",
            "You need to reduce headcount. How do you approach this difficult situation?",
            "Two top performers have a conflict that's affecting the team. What do you do?",
        ],
        RoleCategory::Operations => &[
            "A key supplier fails to deliver on time. How do you manage the situation?",
            "You need to cut operational costs by 20% without affecting quality. What's your approach?",
            "A process that worked well suddenly starts failing. How do you investigate?",
        ],
        RoleCategory::CustomerService => &[
            "A customer is extremely upset and demanding a refund you can't authorize. How do you handle it?",
            "Your team is overwhelmed with support tickets. How do you prioritize and manage?",
            "A recurring issue keeps generating support requests. How do you address it systematically?",
        ],
        RoleCategory::Healthcare => &[
            "You have multiple patients needing attention simultaneously. How do you prioritize?",
            "A patient disagrees with the recommended treatment plan. How do you handle it?",
            "You notice a colleague making a potential error. What do you do?",
        ],
        RoleCategory::Education => &[
            "A student is struggling despite your efforts. How do you adapt your approach?",
            "Parents disagree with your teaching methods. How do you handle the conversation?",
            "You have students at very different skill levels. How do you manage the classroom?",
        ],
        RoleCategory::Legal => &[
            "You discover information that could affect an ongoing case. How do you handle it?",
            "A client wants to proceed despite your legal advice against it. What do you do?",
            "You're facing a tight deadline but need more time for proper research. How do you manage?",
        ],
        RoleCategory::Consulting => &[
            "A client rejects your recommendations. How do you handle the pushback?",
            "You discover the project scope has expanded beyond the original agreement. What's your approach?",
            "Multiple clients have urgent needs at the same time. How do you prioritize?",
        ],
        RoleCategory::Hospitality => &[
            "A VIP guest has a complaint during a fully booked night. How do you handle it?",
            "Staff call in sick during your busiest shift. What do you do?",
            "A guest's expectations far exceed what was promised. How do you manage the situation?",
        ],
        RoleCategory::Retail => &[
            "A customer wants a return that doesn't meet policy. How do you handle it?",
            "You notice potential shoplifting. What's your approach?",
            "Sales are down and corporate is asking for explanations. How do you respond?",
        ],
        RoleCategory::Creative => &[
            "A client keeps requesting revisions that go against design best practices. How do you handle it?",
            "You're experiencing creative block with a deadline approaching. What's your process?",
            "Your creative vision conflicts with the client's brief. How do you navigate it?",
        ],
        RoleCategory::Leadership => &[
            "Your team disagrees with a decision from upper management. How do you handle it?",
            "You need to let go of a team member who is well-liked. How do you approach it?",
            "Two of your direct reports have a conflict. How do you resolve it?",
        ],
        RoleCategory::General => return None,
    };
    Some(bank)
}

// ────────────────────────────────────────────────────────────────────────────
// Pool resolution
// ────────────────────────────────────────────────────────────────────────────

/// Candidate pool for one question slot. Never empty.
pub fn pool_for(question_type: QuestionType, category: RoleCategory) -> &'static [&'static str] {
    match question_type {
        QuestionType::Technical => technical_bank(category).unwrap_or(GENERAL_TECHNICAL),
        QuestionType::Situational => situational_bank(category).unwrap_or(GENERAL_SITUATIONAL),
        QuestionType::Behavioral => BEHAVIORAL,
        QuestionType::Leadership => LEADERSHIP,
        QuestionType::ProblemSolving => PROBLEM_SOLVING,
        QuestionType::CultureFit => CULTURE_FIT,
        QuestionType::SoftSkills => SOFT_SKILLS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::role_classifier::ROLE_RULES;
    use std::collections::HashSet;

    fn all_categories() -> Vec<RoleCategory> {
        let mut cats: Vec<RoleCategory> = ROLE_RULES.iter().map(|r| r.category).collect();
        cats.push(RoleCategory::General);
        cats
    }

    #[test]
    fn test_every_pool_is_non_empty() {
        for category in all_categories() {
            for qt in QuestionType::ALL {
                let pool = pool_for(qt, category);
                assert!(!pool.is_empty(), "empty pool for {qt} / {category}");
                assert!(pool.iter().all(|q| !q.trim().is_empty()));
            }
        }
    }

    /// Mixes draw a single type at most four times (behavioral focus) and a
    /// role-specific type at most three times.
    #[test]
    fn test_pools_cover_max_draws_per_mix() {
        for category in all_categories() {
            for qt in QuestionType::ALL {
                let needed = if qt.is_role_specific() { 3 } else { 4 };
                let unique: HashSet<_> = pool_for(qt, category).iter().collect();
                assert!(
                    unique.len() >= needed,
                    "{qt} / {category} has {} unique entries, needs {needed}",
                    unique.len()
                );
            }
        }
    }

    #[test]
    fn test_categories_without_bank_fall_back_to_general() {
        for category in [RoleCategory::Product, RoleCategory::Design, RoleCategory::Consulting] {
            assert!(technical_bank(category).is_none());
            assert_eq!(pool_for(QuestionType::Technical, category), GENERAL_TECHNICAL);
        }
        assert!(situational_bank(RoleCategory::General).is_none());
        assert_eq!(
            pool_for(QuestionType::Situational, RoleCategory::General),
            GENERAL_SITUATIONAL
        );
    }

    #[test]
    fn test_global_types_ignore_category() {
        assert_eq!(
            pool_for(QuestionType::Behavioral, RoleCategory::Frontend),
            pool_for(QuestionType::Behavioral, RoleCategory::Healthcare)
        );
        assert_eq!(
            pool_for(QuestionType::Leadership, RoleCategory::Sales),
            LEADERSHIP
        );
    }

    #[test]
    fn test_frontend_bank_is_frontend_content() {
        let pool = pool_for(QuestionType::Technical, RoleCategory::Frontend);
        assert!(pool.iter().any(|q| q.contains("React")));
        assert!(pool.iter().any(|q| q.contains("responsive design")));
    }
}
