//! Common job titles offered as role suggestions.
//!
//! Each entry records the category `classify` assigns to the title. The
//! test module pins that pairing for every row, so a change to `ROLE_RULES`
//! that moves a catalog title shows up as a failing test.

use serde::Serialize;

use crate::interview::role_classifier::RoleCategory::{self, *};

pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
pub const MAX_SUGGESTION_LIMIT: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogRole {
    pub title: &'static str,
    pub role_category: RoleCategory,
}

const fn role(title: &'static str, role_category: RoleCategory) -> CatalogRole {
    CatalogRole {
        title,
        role_category,
    }
}

pub const COMMON_ROLES: &[CatalogRole] = &[
    // Frontend
    role("Senior Frontend Engineer at FAANG", Frontend),
    role("Senior React Engineer at Series B Startup", Frontend),
    role("Frontend Engineer at Tech Company", Frontend),
    role("Senior Vue.js Engineer at Startup", Frontend),
    role("Senior Angular Developer at Enterprise", Frontend),
    role("Frontend Architect at Large Company", Frontend),
    role("UI Engineer at Product Company", Frontend),
    role("Senior Next.js Developer at Startup", Frontend),
    role("Frontend Developer at E-commerce Company", Frontend),
    role("Senior TypeScript Developer at SaaS Company", Frontend),
    role("React Developer at FinTech", Frontend),
    role("Vue Developer at EdTech Startup", Frontend),
    role("Senior Web Developer at Digital Agency", Frontend),
    role("Senior JavaScript Engineer at Media Company", Frontend),

    // Backend
    role("Senior Backend Engineer at FAANG", Backend),
    role("Senior Node.js Engineer at Series B Startup", Backend),
    role("Backend Engineer at Tech Company", Backend),
    role("Senior Python Engineer at Tech Company", Backend),
    role("Senior Java Engineer at Enterprise", Backend),
    role("Senior Go Engineer at Cloud Company", Backend),
    role("Backend Architect at Scale-up", Backend),
    role("API Engineer at Platform Company", Backend),
    role("Senior Ruby on Rails Engineer at SaaS Company", Backend),
    role("Senior .NET Engineer at Enterprise", Backend),
    role("Senior PHP Engineer at Web Company", Backend),
    role("Scala Developer at Financial Services", Finance),
    role("Rust Engineer at Systems Company", Backend),
    role("Senior Django Developer at Startup", Backend),
    role("Senior Spring Boot Developer at Enterprise", Backend),
    role("Senior FastAPI Developer at Tech Company", Backend),

    // Full Stack
    role("Senior Full Stack Engineer at Startup", Fullstack),
    role("Full Stack Engineer at FAANG", Fullstack),
    role("Full Stack Developer at Series A Startup", Fullstack),
    role("Senior MERN Stack Engineer at Startup", Fullstack),
    role("Full Stack Developer at Agency", Fullstack),
    role("Senior MEAN Stack Developer at Tech Company", Fullstack),
    role("Full Stack Engineer at E-commerce", Fullstack),
    role("Senior JAMstack Developer at Modern Company", Fullstack),

    // Mobile
    role("Senior Mobile Engineer (iOS/Android) at Tech Company", Mobile),
    role("Senior iOS Engineer at Series B Startup", Mobile),
    role("Senior Android Engineer at FAANG", Mobile),
    role("React Native Engineer at Startup", Frontend),
    role("Flutter Developer at Mobile First Company", Mobile),
    role("iOS Developer at Consumer App", Mobile),
    role("Android Developer at Social Media Company", Marketing),
    role("Senior Swift Developer at Apple Ecosystem Company", Mobile),
    role("Senior Kotlin Developer at Android-First Startup", Mobile),
    role("Mobile Architect at Large Tech Company", Mobile),
    role("Cross-Platform Mobile Developer at Agency", Mobile),

    // Data & ML
    role("Data Engineer at Data-Driven Company", Data),
    role("Senior Data Engineer at FAANG", Data),
    role("Machine Learning Engineer at AI Startup", Ml),
    role("Senior ML Engineer at Tech Company", Ml),
    role("Data Scientist at Series B Startup", Data),
    role("AI/ML Researcher at Research Lab", Ml),
    role("Senior Data Scientist at FinTech", Data),
    role("MLOps Engineer at AI Company", Ml),
    role("Computer Vision Engineer at Autonomous Driving Company", Ml),
    role("NLP Engineer at Language Tech Startup", Ml),
    role("Deep Learning Engineer at Research Lab", Ml),
    role("Data Analyst at Business Intelligence Company", Data),
    role("Senior Analytics Engineer at SaaS Company", Data),
    role("Big Data Engineer at Enterprise", Data),
    role("AI Research Scientist at Tech Lab", Ml),

    // DevOps & Infrastructure
    role("DevOps Engineer at Cloud Company", Devops),
    role("Senior Site Reliability Engineer at FAANG", Devops),
    role("Senior Cloud Engineer at AWS/Azure/GCP", Devops),
    role("Infrastructure Engineer at Scale-up", Devops),
    role("Platform Engineer at Tech Company", Devops),
    role("Kubernetes Engineer at Cloud Native Company", Devops),
    role("Senior DevOps Engineer at FinTech", Devops),
    role("Cloud Architect at Enterprise", Devops),
    role("SRE at High-Traffic Platform", Devops),
    role("Infrastructure Architect at Large Company", Devops),
    role("Senior Systems Engineer at Tech Company", General),
    role("Release Engineer at Software Company", Devops),
    role("Build Engineer at Game Studio", Devops),

    // Security
    role("Security Engineer at FinTech", Security),
    role("Senior Security Engineer at FAANG", Security),
    role("Application Security Engineer at Tech Company", Security),
    role("Cloud Security Engineer at Enterprise", Devops),
    role("Senior Cybersecurity Engineer at Bank", Security),
    role("Security Architect at Financial Services", Finance),
    role("Penetration Tester at Security Firm", Security),
    role("Security Operations Engineer at Tech Company", Operations),
    role("Cryptography Engineer at Blockchain Company", Security),
    role("Compliance Engineer at FinTech", General),

    // Product & Growth
    role("Product Manager at Tech Company", Product),
    role("Senior Product Manager at FAANG", Product),
    role("Lead Product Manager at Startup", Product),
    role("Group Product Manager at Large Tech Company", Product),
    role("Director of Product at Growing Company", Product),
    role("VP of Product at Series B Company", Product),
    role("Chief Product Officer at Company", Product),
    role("Associate Product Manager at Tech Company", Product),
    role("Product Manager at Series B Startup", Product),
    role("Product Engineer at Product-Led Company", General),
    role("Senior Product Engineer at Startup", General),
    role("Technical Product Manager at Tech Company", Product),
    role("Senior Technical Product Manager at Enterprise", Product),
    role("Product Owner at Agile Company", Product),
    role("Senior Product Owner at Software Company", Product),
    role("Product Analyst at Tech Company", Product),
    role("Product Marketing Manager at SaaS Company", Marketing),
    role("Senior Product Marketing Manager at Tech Company", Marketing),
    role("Growth Product Manager at Consumer Company", Product),
    role("Growth Engineer at Consumer Company", Marketing),
    role("Senior Growth Engineer at B2C Startup", Marketing),
    role("Product Designer at Tech Company", Design),
    role("Product Strategist at Consulting Firm", Product),
    role("Product Operations Manager at Tech Company", Product),
    role("Technical Program Manager at Large Tech Company", Product),
    role("Senior Technical Program Manager at FAANG", Product),
    role("Program Manager at Tech Company", Product),
    role("Project Manager at Company", Product),
    role("Senior Project Manager at Enterprise", Product),
    role("Agile Coach at Software Company", Product),
    role("Scrum Master at Tech Company", Product),
    role("Product Development Manager at Manufacturing", Leadership),

    // QA & Testing
    role("QA Engineer at Tech Company", General),
    role("Senior QA Engineer at Software Company", General),
    role("Test Automation Engineer at Enterprise", General),
    role("Senior SDET at FAANG", General),
    role("Quality Assurance Lead at Product Company", Leadership),
    role("Performance Test Engineer at High-Scale Company", General),

    // Design & UX
    role("UI/UX Engineer at Design-First Company", Design),
    role("Senior UX Engineer at Product Company", Design),
    role("Design Systems Engineer at Tech Company", Design),
    role("Creative Technologist at Digital Agency", Creative),
    role("Front-End Design Engineer at Startup", Frontend),

    // Specialized Engineering
    role("Senior Software Engineer at FAANG", General),
    role("Staff Software Engineer at FAANG", Leadership),
    role("Principal Engineer at Large Tech Company", Leadership),
    role("Senior Blockchain Engineer at Web3 Startup", General),
    role("Game Developer at Gaming Studio", General),
    role("Embedded Systems Engineer at IoT Company", General),
    role("Firmware Engineer at Hardware Company", General),
    role("Graphics Engineer at Game Studio", General),
    role("Audio Engineer at Music Tech Company", General),
    role("Video Engineer at Streaming Platform", General),
    role("Senior Systems Programmer at Operating Systems Company", General),
    role("Compiler Engineer at Programming Language Company", General),
    role("Database Engineer at Database Company", General),
    role("Search Engineer at Search Company", General),
    role("Recommendations Engineer at Social Media", Marketing),
    role("Senior Robotics Engineer at Robotics Company", General),
    role("AR/VR Engineer at Metaverse Company", General),
    role("WebGL/3D Engineer at Interactive Company", General),
    role("Quantum Computing Engineer at Research Lab", General),

    // E-commerce & Retail
    role("E-commerce Engineer at Retail Company", Retail),
    role("Senior Marketplace Engineer at Marketplace Platform", General),
    role("Payment Systems Engineer at Payment Company", General),
    role("Checkout Engineer at E-commerce Platform", General),

    // FinTech & Finance
    role("FinTech Engineer at Financial Startup", Finance),
    role("Trading Systems Engineer at Hedge Fund", General),
    role("Senior Algorithmic Trading Engineer at Trading Firm", General),
    role("Quantitative Developer at Investment Bank", General),
    role("Risk Engineer at Financial Institution", Finance),

    // HealthTech & BioTech
    role("HealthTech Engineer at Digital Health Startup", General),
    role("Bioinformatics Engineer at Biotech Company", General),
    role("Medical Device Software Engineer at MedTech", Healthcare),
    role("Senior Clinical Software Engineer at Health Tech", Healthcare),

    // EdTech
    role("EdTech Engineer at Education Startup", Education),
    role("Learning Platform Engineer at EdTech Company", Devops),
    role("Senior Education Technology Engineer at LMS Company", Education),

    // Media & Entertainment
    role("Streaming Engineer at Video Platform", General),
    role("Content Delivery Engineer at CDN Company", Marketing),
    role("Advertising Technology Engineer at AdTech", General),
    role("Media Processing Engineer at Media Company", General),

    // Social & Communication
    role("Social Network Engineer at Social Media Company", Marketing),
    role("Messaging Engineer at Communication Platform", General),
    role("Real-time Systems Engineer at Chat Company", General),

    // Leadership & Management
    role("Tech Lead at Series A Startup", Leadership),
    role("Engineering Manager at Mid-size Company", Leadership),
    role("Senior Engineering Manager at FAANG", Leadership),
    role("Engineering Director at Growing Startup", Leadership),
    role("VP of Engineering at Series C Company", Leadership),
    role("Head of Engineering at Startup", Leadership),
    role("CTO at Early Stage Startup", Leadership),
    role("Staff Engineer at FAANG", Leadership),
    role("Principal Architect at Enterprise", Leadership),
    role("Distinguished Engineer at Large Tech Company", General),
    role("Technical Architect at Consulting Company", Consulting),
    role("Solutions Architect at Enterprise", General),
    role("Enterprise Architect at Large Corporation", General),
    role("Lead Software Engineer at Tech Company", Leadership),
    role("Senior Technical Lead at Growing Company", Leadership),

    // ── Non-technical roles ─────────────────────────────────────────────────

    // Sales & Business Development
    role("Account Executive at SaaS Company", Sales),
    role("Senior Account Executive at Enterprise Software", Sales),
    role("Sales Development Representative (SDR) at Startup", Sales),
    role("Business Development Representative at Startup", Sales),
    role("Business Development Manager at B2B Company", Sales),
    role("Senior Business Development Manager at Corporation", Sales),
    role("Sales Manager at Tech Company", Sales),
    role("Senior Sales Manager at Enterprise", Sales),
    role("Sales Director at Tech Company", Sales),
    role("VP of Sales at Growing Company", Sales),
    role("Chief Revenue Officer at Startup", Leadership),
    role("Inside Sales Representative at B2B Company", Sales),
    role("Outside Sales Representative at Enterprise", Sales),
    role("Enterprise Sales Representative at Software Company", Sales),
    role("Enterprise Account Executive at Software Company", Sales),
    role("Strategic Account Executive at Enterprise", Sales),
    role("Customer Success Manager at SaaS", CustomerService),
    role("Senior Customer Success Manager at Tech Company", CustomerService),
    role("Customer Success Director at SaaS Company", CustomerService),
    role("VP of Customer Success at Software Company", CustomerService),
    role("Account Manager at Agency", Sales),
    role("Senior Account Manager at Consulting Firm", Sales),
    role("Key Account Manager at B2B Company", Sales),
    role("Strategic Account Manager at Enterprise", Sales),
    role("Regional Sales Manager at Corporation", Sales),
    role("Territory Sales Manager at Company", Sales),
    role("District Sales Manager at Retail", Sales),
    role("National Sales Manager at Corporation", Sales),
    role("Sales Operations Manager at Tech Company", Sales),
    role("Sales Enablement Manager at SaaS", Sales),
    role("Sales Engineer at Tech Company", Sales),
    role("Solutions Engineer at Software Company", General),
    role("Pre-Sales Engineer at Enterprise Software", Sales),
    role("Sales Consultant at Consulting Firm", Sales),
    role("Channel Sales Manager at Technology Company", Sales),
    role("Partner Manager at Software Company", Leadership),
    role("Alliance Manager at Tech Company", Leadership),
    role("Revenue Operations Manager at SaaS", Operations),
    role("Head of Sales at Startup", Sales),

    // Marketing & Growth
    role("Marketing Manager at Consumer Brand", Marketing),
    role("Senior Marketing Manager at Corporation", Marketing),
    role("Digital Marketing Manager at E-commerce", Marketing),
    role("Senior Digital Marketing Manager at Tech Company", Marketing),
    role("Digital Marketing Specialist at E-commerce", Marketing),
    role("Performance Marketing Manager at Startup", Marketing),
    role("Senior Performance Marketing Manager at Scale-up", Marketing),
    role("Growth Marketing Manager at Tech Company", Marketing),
    role("Head of Growth at Startup", Marketing),
    role("VP of Growth at Series B Company", Marketing),
    role("Content Marketing Manager at Startup", Marketing),
    role("Senior Content Marketing Manager at SaaS", Marketing),
    role("Content Strategist at Digital Agency", Marketing),
    role("Content Director at Media Company", Marketing),
    role("Social Media Manager at Brand", Marketing),
    role("Senior Social Media Manager at Consumer Brand", Marketing),
    role("Social Media Strategist at Agency", Marketing),
    role("Community Manager at Tech Company", Leadership),
    role("SEO Manager at E-commerce", Marketing),
    role("Senior SEO Manager at Digital Agency", Marketing),
    role("SEO Specialist at Digital Agency", Marketing),
    role("SEM Specialist at Marketing Agency", Marketing),
    role("Brand Manager at Consumer Goods Company", Marketing),
    role("Senior Brand Manager at CPG Company", Marketing),
    role("Brand Strategist at Brand Agency", Marketing),
    role("Marketing Director at Mid-Size Company", Marketing),
    role("VP of Marketing at Series B Company", Marketing),
    role("Chief Marketing Officer at Growing Company", Marketing),
    role("Email Marketing Manager at E-commerce", Marketing),
    role("Email Marketing Specialist at E-commerce", Marketing),
    role("CRM Marketing Manager at SaaS Company", Marketing),
    role("Product Marketing Manager at Tech Company", Marketing),
    role("Senior Product Marketing Manager at Software Company", Marketing),
    role("Partner Marketing Manager at B2B Company", Marketing),
    role("Field Marketing Manager at Enterprise", Marketing),
    role("Event Marketing Manager at Company", Marketing),
    role("Demand Generation Manager at SaaS", Leadership),
    role("Lead Generation Manager at B2B Company", Leadership),
    role("Marketing Analyst at Retail Company", Marketing),
    role("Marketing Operations Manager at Tech Company", Marketing),
    role("Influencer Marketing Manager at Consumer Brand", Marketing),
    role("Affiliate Marketing Manager at E-commerce", Marketing),
    role("Marketing Automation Specialist at SaaS", Marketing),
    role("Marketing Coordinator at Company", Marketing),
    role("Marketing Communications Manager at Corporation", Marketing),
    role("Public Relations Manager at PR Agency", Leadership),
    role("Communications Manager at Corporation", Leadership),
    role("Corporate Communications Director at Enterprise", Leadership),
    role("Investor Relations Manager at Public Company", Leadership),
    role("Internal Communications Manager at Corporation", Leadership),

    // Finance & Accounting
    role("Financial Analyst at Investment Bank", Finance),
    role("Senior Accountant at Corporation", Finance),
    role("Finance Manager at Mid-Size Company", Finance),
    role("Controller at Growing Company", Finance),
    role("CFO at Startup", Leadership),
    role("Investment Analyst at Asset Management", Finance),
    role("Budget Analyst at Corporation", Finance),
    role("Tax Accountant at Accounting Firm", Finance),
    role("Financial Controller at Enterprise", Finance),
    role("Accounts Payable Manager at Company", Leadership),
    role("Treasury Analyst at Financial Services", Finance),
    role("FP&A Analyst at Tech Company", Finance),

    // Human Resources
    role("HR Manager at Mid-Size Company", Hr),
    role("Recruiter at Tech Company", Hr),
    role("Technical Recruiter at Startup", Hr),
    role("Talent Acquisition Manager at Enterprise", Hr),
    role("HR Business Partner at Corporation", Hr),
    role("People Operations Manager at Startup", Hr),
    role("Compensation & Benefits Manager at Company", Leadership),
    role("HR Generalist at Growing Company", Hr),
    role("Chief People Officer at Startup", Leadership),
    role("Employee Relations Manager at Enterprise", Leadership),
    role("Diversity & Inclusion Manager at Corporation", Leadership),
    role("Learning & Development Manager at Company", Leadership),

    // Operations & Supply Chain
    role("Operations Manager at Manufacturing", Operations),
    role("Supply Chain Manager at Retail Company", Operations),
    role("Logistics Coordinator at Distribution Center", Operations),
    role("Operations Director at E-commerce", Operations),
    role("Warehouse Manager at Logistics Company", Operations),
    role("Procurement Manager at Corporation", Operations),
    role("Inventory Manager at Retail Chain", Retail),
    role("Chief Operating Officer at Startup", Leadership),
    role("Process Improvement Manager at Manufacturing", Leadership),
    role("Operations Analyst at Consulting Firm", Operations),
    role("Fulfillment Manager at E-commerce", Leadership),

    // Customer Service & Support
    role("Customer Service Manager at Company", CustomerService),
    role("Customer Support Specialist at SaaS", CustomerService),
    role("Technical Support Engineer at Software Company", General),
    role("Call Center Manager at BPO", CustomerService),
    role("Customer Experience Manager at Retail", Retail),
    role("Support Team Lead at Tech Company", Leadership),
    role("Client Services Manager at Agency", Leadership),
    role("Help Desk Manager at IT Services", CustomerService),

    // Healthcare
    role("Registered Nurse at Hospital", Healthcare),
    role("Medical Doctor at Healthcare System", Healthcare),
    role("Physician Assistant at Clinic", Healthcare),
    role("Healthcare Administrator at Hospital", Healthcare),
    role("Clinical Research Coordinator at Medical Center", Healthcare),
    role("Medical Laboratory Technician at Lab", Healthcare),
    role("Physical Therapist at Rehabilitation Center", Healthcare),
    role("Pharmacist at Retail Pharmacy", Healthcare),
    role("Dental Hygienist at Dental Office", Healthcare),
    role("Radiologic Technologist at Imaging Center", Healthcare),
    role("Medical Billing Specialist at Healthcare Provider", Healthcare),
    role("Healthcare Consultant at Consulting Firm", Healthcare),

    // Education
    role("High School Teacher at Public School", Education),
    role("Elementary School Teacher at Private School", Education),
    role("College Professor at University", Education),
    role("Instructional Designer at EdTech Company", Creative),
    role("Academic Advisor at College", Education),
    role("School Principal at K-12 School", Education),
    role("Special Education Teacher at School District", Education),
    role("Curriculum Developer at Education Company", Education),
    role("Corporate Trainer at Enterprise", Education),
    role("Education Consultant at Consulting Firm", Education),

    // Legal
    role("Attorney at Law Firm", Legal),
    role("Senior Attorney at Law Firm", Legal),
    role("Associate Attorney at Law Practice", Legal),
    role("Partner at Law Firm", Legal),
    role("Corporate Lawyer at Corporation", Legal),
    role("In-House Counsel at Company", Legal),
    role("General Counsel at Corporation", Legal),
    role("Chief Legal Officer at Company", Legal),
    role("Corporate Counsel at Company", Legal),
    role("Senior Corporate Counsel at Enterprise", Legal),
    role("Intellectual Property Attorney at Law Firm", Legal),
    role("Patent Attorney at IP Firm", Legal),
    role("Employment Attorney at Law Firm", Legal),
    role("Contract Attorney at Company", Legal),
    role("Litigation Attorney at Law Firm", Legal),
    role("Trial Lawyer at Law Practice", Legal),
    role("Tax Attorney at Accounting Firm", Finance),
    role("Real Estate Attorney at Law Firm", Legal),
    role("Legal Counsel at Tech Company", Legal),
    role("Paralegal at Legal Office", Legal),
    role("Senior Paralegal at Law Firm", Legal),
    role("Legal Assistant at Law Firm", Legal),
    role("Legal Secretary at Law Office", Legal),
    role("Compliance Officer at Financial Services", Finance),
    role("Senior Compliance Officer at Bank", Legal),
    role("Compliance Manager at Corporation", Leadership),
    role("Regulatory Affairs Manager at Company", Leadership),
    role("Legal Operations Manager at Law Firm", Operations),
    role("Contract Manager at Corporation", Leadership),
    role("Legal Analyst at Company", Legal),
    role("General Counsel at Tech Company", Legal),
    role("Litigation Associate at Law Firm", Legal),
    role("Legal Operations Manager at Company", Operations),

    // Real Estate & Construction
    role("Real Estate Agent at Brokerage", General),
    role("Real Estate Broker at Realty Company", General),
    role("Property Manager at Real Estate Firm", Leadership),
    role("Construction Project Manager at Construction Company", Product),
    role("Civil Engineer at Engineering Firm", General),
    role("Architect at Architecture Firm", General),
    role("Commercial Real Estate Analyst at Investment Firm", General),
    role("Leasing Consultant at Property Management", Consulting),
    role("Real Estate Developer at Development Company", General),

    // Hospitality & Food Service
    role("Hotel Manager at Hospitality Group", Hospitality),
    role("Restaurant Manager at Restaurant Chain", Hospitality),
    role("Chef at Fine Dining Restaurant", Hospitality),
    role("Front Desk Manager at Hotel", Hospitality),
    role("Catering Manager at Events Company", Hospitality),
    role("Food & Beverage Director at Resort", Leadership),
    role("Banquet Manager at Convention Center", Leadership),
    role("Sommelier at Wine Bar", General),

    // Retail & E-commerce
    role("Store Manager at Retail Chain", Retail),
    role("Retail Buyer at Department Store", Retail),
    role("Merchandise Manager at Retail Company", Retail),
    role("E-commerce Manager at Online Retailer", Retail),
    role("Visual Merchandiser at Fashion Brand", Marketing),
    role("Retail Operations Manager at Chain", Operations),
    role("Category Manager at E-commerce Company", Leadership),

    // Media & Communications
    role("Journalist at News Organization", General),
    role("Senior Journalist at Major Publication", General),
    role("Reporter at Newspaper", General),
    role("Investigative Reporter at News Agency", General),
    role("News Editor at Media Company", General),
    role("Managing Editor at Publication", General),
    role("Editor-in-Chief at Magazine", Leadership),
    role("Senior PR Manager at Corporation", Leadership),
    role("PR Specialist at Agency", General),
    role("Communications Director at Corporation", Leadership),
    role("Communications Specialist at Non-Profit", General),
    role("Video Producer at Media Company", General),
    role("Senior Video Producer at Streaming Platform", General),
    role("Film Producer at Production Company", General),
    role("Executive Producer at Media Company", General),
    role("Copywriter at Advertising Agency", Creative),
    role("Senior Copywriter at Creative Agency", Creative),
    role("Content Writer at Digital Media", Marketing),
    role("Technical Writer at Software Company", General),
    role("Grant Writer at Non-Profit", General),
    role("Editor at Publishing Company", General),
    role("Copy Editor at Publication", General),
    role("Social Media Coordinator at Brand", Marketing),
    role("Content Creator at Digital Media Company", Marketing),
    role("Influencer at Social Media Platform", Marketing),
    role("YouTube Content Creator", Marketing),
    role("Podcast Producer at Media Company", General),
    role("Broadcast Producer at Television Network", General),
    role("Radio Producer at Broadcasting Company", General),
    role("Broadcast Journalist at TV Station", General),
    role("News Anchor at Television Network", General),
    role("Media Buyer at Advertising Agency", General),
    role("Media Planner at Media Agency", General),

    // Creative & Design (Non-Tech)
    role("Senior Product Designer at Startup", Design),
    role("Lead Product Designer at SaaS Company", Design),
    role("UX Designer at Digital Agency", Design),
    role("Senior UX Designer at Product Company", Design),
    role("UX Researcher at Tech Company", Design),
    role("Senior UX Researcher at FAANG", Design),
    role("UI Designer at Startup", Design),
    role("Senior UI Designer at Design Studio", Design),
    role("Visual Designer at Creative Agency", Creative),
    role("Senior Visual Designer at Brand Agency", Marketing),
    role("Interaction Designer at Product Company", Design),
    role("Motion Designer at Creative Studio", Creative),
    role("Senior Motion Designer at Media Company", Creative),
    role("Brand Designer at Brand Agency", Marketing),
    role("Senior Brand Designer at Consumer Brand", Marketing),
    role("Graphic Designer at Design Agency", Creative),
    role("Senior Graphic Designer at Marketing Agency", Marketing),
    role("Web Designer at Digital Agency", Creative),
    role("Senior Web Designer at Creative Studio", Creative),
    role("Design Lead at Tech Company", Leadership),
    role("Head of Design at Startup", Leadership),
    role("VP of Design at Growing Company", Leadership),
    role("Chief Design Officer at Company", Leadership),
    role("Art Director at Advertising Agency", Creative),
    role("Senior Art Director at Creative Agency", Creative),
    role("Creative Director at Agency", Creative),
    role("Executive Creative Director at Ad Agency", Creative),
    role("Design Systems Designer at Tech Company", Design),
    role("Content Designer at Tech Company", Marketing),
    role("Service Designer at Consulting Firm", Consulting),
    role("Experience Designer at Digital Agency", Creative),
    role("Interior Designer at Design Firm", Creative),
    role("Fashion Designer at Fashion House", Creative),
    role("Industrial Designer at Manufacturing", Creative),
    role("Illustrator at Creative Studio", Creative),
    role("Photographer at Photography Studio", Creative),
    role("3D Designer at Game Studio", Creative),
    role("Animation Designer at Animation Studio", Creative),
    role("Typography Designer at Design Studio", Creative),
    role("Print Designer at Publishing Company", Creative),
    role("Package Designer at Consumer Goods", Creative),
    role("Environmental Designer at Architecture Firm", Creative),

    // Consulting & Strategy
    role("Management Consultant at Consulting Firm", Consulting),
    role("Senior Management Consultant at Big 4", Consulting),
    role("Strategy Consultant at Strategy Firm", Consulting),
    role("Senior Strategy Consultant at MBB", Consulting),
    role("Business Consultant at Consulting Company", Consulting),
    role("Senior Business Consultant at Advisory Firm", Consulting),
    role("IT Consultant at Tech Consulting", Consulting),
    role("Senior IT Consultant at Systems Integrator", Consulting),
    role("Digital Transformation Consultant at Consulting Firm", Consulting),
    role("Change Management Consultant at Advisory Firm", Consulting),
    role("Operations Consultant at Consulting Company", Operations),
    role("HR Consultant at HR Consulting Firm", Hr),
    role("Financial Consultant at Advisory Firm", Finance),
    role("Risk Consultant at Consulting Company", Consulting),
    role("Healthcare Consultant at Healthcare Advisory", Healthcare),
    role("Technology Consultant at Professional Services", Consulting),
    role("Salesforce Consultant at Consulting Partner", Sales),
    role("SAP Consultant at Systems Integrator", Consulting),
    role("ERP Consultant at Implementation Partner", Consulting),
    role("Security Consultant at Cybersecurity Firm", Consulting),
    role("Data Consultant at Analytics Firm", Consulting),
    role("Analytics Consultant at Consulting Company", Consulting),
    role("Process Improvement Consultant at Lean Consulting", Consulting),
    role("Supply Chain Consultant at Logistics Advisory", Operations),
    role("Real Estate Consultant at Property Advisory", Consulting),
    role("Marketing Consultant at Agency", Marketing),
    role("Brand Consultant at Brand Strategy Firm", Marketing),
    role("Sustainability Consultant at ESG Firm", Consulting),
    role("Independent Consultant", Consulting),
    role("Freelance Consultant", Consulting),
    role("Principal Consultant at Consulting Firm", Consulting),
    role("Associate Partner at Consulting Firm", Consulting),
    role("Partner at Consulting Firm", Consulting),
    role("Managing Partner at Advisory Firm", Consulting),

    // Non-Profit & Government
    role("Program Manager at Non-Profit Organization", Product),
    role("Grant Writer at Charity", General),
    role("Policy Analyst at Government Agency", General),
    role("Social Worker at Community Services", General),
    role("Non-Profit Director at Foundation", Leadership),
    role("Community Outreach Coordinator at NGO", General),
    role("Fundraising Manager at Non-Profit", Leadership),
    role("Government Relations Manager at Corporation", Leadership),

    // Manufacturing & Engineering (Non-Software)
    role("Mechanical Engineer at Manufacturing", General),
    role("Electrical Engineer at Electronics Company", General),
    role("Quality Assurance Manager at Manufacturing", Leadership),
    role("Production Supervisor at Factory", General),
    role("Process Engineer at Chemical Plant", General),
    role("Industrial Engineer at Automotive", General),
    role("Maintenance Manager at Manufacturing Plant", Leadership),

    // Transportation & Logistics
    role("Truck Driver at Logistics Company", Operations),
    role("Fleet Manager at Transportation Company", Leadership),
    role("Air Traffic Controller at Airport", Finance),
    role("Pilot at Commercial Airline", General),
    role("Transportation Planner at City Government", General),
    role("Delivery Driver at Courier Service", General),

    // Science & Research (Non-Tech)
    role("Research Scientist at Pharmaceutical Company", General),
    role("Laboratory Manager at Research Institute", Leadership),
    role("Clinical Research Associate at Biotech", Healthcare),
    role("Environmental Scientist at Consulting Firm", Consulting),
    role("Chemist at Chemical Company", General),
    role("Biologist at Research Lab", General),

    // Administrative & General Office
    role("Executive Assistant at Corporation", General),
    role("Office Manager at Mid-Size Company", Leadership),
    role("Administrative Coordinator at Company", General),
    role("Receptionist at Professional Services", General),
    role("Personal Assistant to CEO", Leadership),
    role("Office Administrator at Startup", General),

    // Skilled Trades
    role("Electrician at Construction Company", General),
    role("Plumber at Plumbing Service", General),
    role("HVAC Technician at Service Company", General),
    role("Carpenter at Construction Firm", General),
    role("Mechanic at Auto Repair Shop", General),
    role("Welder at Manufacturing Plant", General),
];

/// Catalog titles containing `query` (case-insensitive), in catalog order.
/// A blank query suggests nothing.
pub fn suggest_roles(query: &str, limit: usize) -> Vec<&'static CatalogRole> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    COMMON_ROLES
        .iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .take(limit.min(MAX_SUGGESTION_LIMIT))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::interview::role_classifier::classify;

    #[test]
    fn test_every_catalog_title_keeps_its_category() {
        let moved: Vec<String> = COMMON_ROLES
            .iter()
            .filter(|r| classify(r.title) != r.role_category)
            .map(|r| format!("{} -> {} (pinned {})", r.title, classify(r.title), r.role_category))
            .collect();
        assert!(moved.is_empty(), "reclassified titles:\n{}", moved.join("\n"));
    }

    #[test]
    fn test_catalog_titles_are_unique() {
        let titles: HashSet<&str> = COMMON_ROLES.iter().map(|r| r.title).collect();
        assert_eq!(titles.len(), COMMON_ROLES.len());
        assert_eq!(COMMON_ROLES.len(), 546);
    }

    #[test]
    fn test_catalog_pins_controller_and_counsel() {
        let category_of = |title: &str| {
            COMMON_ROLES
                .iter()
                .find(|r| r.title == title)
                .map(|r| r.role_category)
        };
        assert_eq!(category_of("Controller at Growing Company"), Some(Finance));
        assert_eq!(category_of("In-House Counsel at Company"), Some(Legal));
        assert_eq!(category_of("Senior Corporate Counsel at Enterprise"), Some(Legal));
    }

    #[test]
    fn test_suggest_is_case_insensitive_substring() {
        let hits = suggest_roles("REACT", 50);
        assert!(!hits.is_empty());
        assert!(hits.iter().all(|r| r.title.to_lowercase().contains("react")));
        assert_eq!(hits[0].title, "Senior React Engineer at Series B Startup");
    }

    #[test]
    fn test_suggest_respects_limits() {
        assert_eq!(suggest_roles("engineer", 3).len(), 3);
        assert!(suggest_roles("at", 500).len() <= MAX_SUGGESTION_LIMIT);
    }

    #[test]
    fn test_blank_query_suggests_nothing() {
        assert!(suggest_roles("   ", 10).is_empty());
        assert!(suggest_roles("zzzz-no-such-title", 10).is_empty());
    }
}
