//! Built-in page content
//!
//! Every CMS-editable page has a complete literal record here. Pages render
//! from these when the CMS is unreachable, and any field the CMS leaves
//! blank is taken from them.

use super::gateway::PageContent;
use super::source::PageKey;
use serde::{Deserialize, Serialize};

fn s(text: &str) -> String {
    text.to_string()
}

// ===== Shared item shapes =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    fn new(question: &str, answer: &str) -> Self {
        Self {
            question: s(question),
            answer: s(answer),
        }
    }
}

/// Titled card with an emoji or icon name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconCard {
    pub title: String,
    #[serde(alias = "content")]
    pub description: String,
    pub icon: String,
}

impl IconCard {
    fn new(title: &str, description: &str, icon: &str) -> Self {
        Self {
            title: s(title),
            description: s(description),
            icon: s(icon),
        }
    }
}

// ===== Homepage =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HowItWorksStep {
    pub step_number: u32,
    pub step_title: String,
    pub step_description: String,
    pub step_icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhyChooseCard {
    pub card_title: String,
    pub card_description: String,
    pub card_icon: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Service {
    pub service_title: String,
    pub service_description: String,
    pub service_icon: String,
    pub service_features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Review {
    pub review_rating: u8,
    pub review_text: String,
    pub review_author: String,
    pub review_location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrustBadge {
    pub badge_title: String,
    pub badge_icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_text: String,
    pub hero_cta_link: String,
    pub hero_secondary_cta_text: String,
    pub hero_secondary_cta_link: String,
    pub hero_background_image: String,

    pub how_it_works_title: String,
    pub how_it_works_subtitle: String,
    pub how_it_works_steps: Vec<HowItWorksStep>,

    pub why_choose_title: String,
    pub why_choose_subtitle: String,
    pub why_choose_cards: Vec<WhyChooseCard>,

    pub services_title: String,
    pub services_subtitle: String,
    pub services: Vec<Service>,

    pub reviews_title: String,
    pub reviews_subtitle: String,
    pub reviews: Vec<Review>,
    pub trust_badges: Vec<TrustBadge>,

    pub lenders_title: String,
    pub lenders_subtitle: String,
    pub lenders: Vec<String>,

    pub faq_title: String,
    pub faq_subtitle: String,
    pub faqs: Vec<Faq>,

    pub final_cta_badge_text: String,
    pub final_cta_title: String,
    pub final_cta_subtitle: String,
    pub final_cta_primary_text: String,
    pub final_cta_primary_link: String,
    pub final_cta_secondary_text: String,
    pub final_cta_secondary_link: String,

    pub meta_title: String,
    pub meta_description: String,
}

impl PageContent for HomepageContent {
    const MEDIA_FIELDS: &'static [&'static str] = &["heroBackgroundImage"];

    fn key() -> PageKey {
        PageKey::Homepage
    }

    fn fallback() -> Self {
        let step = |n: u32, title: &str, description: &str, icon: &str| HowItWorksStep {
            step_number: n,
            step_title: s(title),
            step_description: s(description),
            step_icon: s(icon),
        };
        let card = |title: &str, description: &str, icon: &str| WhyChooseCard {
            card_title: s(title),
            card_description: s(description),
            card_icon: s(icon),
        };
        let service = |title: &str, description: &str, icon: &str, features: [&str; 3]| Service {
            service_title: s(title),
            service_description: s(description),
            service_icon: s(icon),
            service_features: features.iter().map(|f| s(f)).collect(),
        };
        let review = |text: &str, author: &str, location: &str| Review {
            review_rating: 5,
            review_text: s(text),
            review_author: s(author),
            review_location: s(location),
        };
        let badge = |title: &str, icon: &str| TrustBadge {
            badge_title: s(title),
            badge_icon: s(icon),
        };

        Self {
            hero_title: s("Your Mortgage. Matched to Your Life."),
            hero_subtitle: s("No haggling. No confusion. Just personalized mortgage offers that help you achieve your homeownership dreams."),
            hero_cta_text: s("Get Qualified in Minutes"),
            hero_cta_link: s("/mortgage/approval/"),
            hero_secondary_cta_text: s("Compare Offers"),
            hero_secondary_cta_link: s("/mortgage/rates"),
            hero_background_image: s("/images/hero/hero-family-home.jpg"),

            how_it_works_title: s("How approvU Works"),
            how_it_works_subtitle: s("Three simple steps to your perfect mortgage match"),
            how_it_works_steps: vec![
                step(1, "Tell us about you & your goals", "Smart, conversational quiz that learns what matters most to you", "MessageCircle"),
                step(2, "Get Matched to Real Mortgage Offers", "Based on your real profile, not estimates. See actual rates and terms", "TrendingUp"),
                step(3, "Enjoy Personalized Concierge Guidance", "Human + Tech support, zero-pressure. We're here when you need us", "Shield"),
            ],

            why_choose_title: s("Why Choose approvU"),
            why_choose_subtitle: s("Experience mortgage lending reimagined"),
            why_choose_cards: vec![
                card("Personalized Offers", "Real mortgage offers based on your unique profile, not generic estimates", "Users"),
                card("Concierge Guidance", "Human + AI support when you need it, zero pressure when you don't", "MessageCircle"),
                card("No Sales Pressure", "Work at your own pace with complete transparency and trust", "Shield"),
            ],

            services_title: s("Our Services"),
            services_subtitle: s("Comprehensive mortgage solutions for every stage of homeownership"),
            services: vec![
                service(
                    "First-Time Home Purchase",
                    "Navigate your first home purchase with confidence. Get personalized guidance, competitive rates, and exclusive first-time buyer incentives.",
                    "HomeIcon",
                    ["Down payment assistance programs", "Pre-approval with rate guarantee", "Free home buying education"],
                ),
                service(
                    "Mortgage Refinancing",
                    "Optimize your existing mortgage with better rates, terms, or access your home equity for renovations and investments.",
                    "TrendingUp",
                    ["Rate reduction analysis", "Home equity access options", "Debt consolidation strategies"],
                ),
                service(
                    "Investment Properties",
                    "Build your real estate portfolio with specialized investment property financing and rental income analysis.",
                    "LucideBanknote",
                    ["Rental income qualification", "Portfolio expansion strategies", "Commercial property options"],
                ),
                service(
                    "Mortgage Protection",
                    "Protect your investment with comprehensive mortgage insurance and life protection solutions.",
                    "Shield",
                    ["Mortgage life insurance", "Disability income protection", "Home and property insurance"],
                ),
            ],

            reviews_title: s("Real Reviews from Real Clients"),
            reviews_subtitle: s("See what homeowners are saying about their approvU experience"),
            reviews: vec![
                review("Fast, transparent, and no sales pressure! Got my mortgage approved in 3 days.", "Sarah M.", "First-time buyer, Toronto"),
                review("Finally found a mortgage platform that actually saves me money. The incentives are real!", "Michael C.", "Refinance client, Vancouver"),
                review("The concierge service is amazing. They answered all my questions without any pressure.", "Lisa R.", "Investment property, Calgary"),
            ],
            trust_badges: vec![
                badge("Trustpilot Excellent", "LucideMedal"),
                badge("4.9/5 Google Reviews", "Star"),
                badge("FSRA Licensed", "Shield"),
            ],

            lenders_title: s("Trusted by Canada's Leading Lenders"),
            lenders_subtitle: s("Over 15,000 deals matched to 25+ lenders nationwide"),
            lenders: [
                "TD Bank", "RBC", "BMO", "Scotiabank", "CIBC", "MCAP", "First National", "CMLS",
                "Meridian", "DUCA", "RFA", "B2B Bank",
            ]
            .iter()
            .map(|l| s(l))
            .collect(),

            faq_title: s("Frequently Asked Questions"),
            faq_subtitle: s("Get answers to common questions about our process"),
            faqs: vec![
                Faq::new(
                    "How is approvU different from a mortgage broker?",
                    "Unlike traditional brokers, we use technology to match you with personalized offers from multiple lenders without any sales pressure. Our concierge service provides guidance when you need it, but you're always in control of the process.",
                ),
                Faq::new(
                    "Is it safe to submit my information?",
                    "Absolutely. We use bank-level encryption and are fully licensed with FSRA. Your information is secure and never shared without your explicit consent.",
                ),
                Faq::new(
                    "Will this impact my credit score?",
                    "No, getting qualified does not impact your credit score. We only perform a soft credit check initially. Hard credit checks only happen when you're ready to proceed with a specific lender.",
                ),
                Faq::new(
                    "Who are the advisors helping me?",
                    "Our mortgage concierges are licensed professionals with years of experience in Canadian mortgage lending.",
                ),
            ],

            final_cta_badge_text: s("Over 25,000 Happy Homeowners"),
            final_cta_title: s("Ready to find your best mortgage match?"),
            final_cta_subtitle: s("Join thousands of Canadians who've trusted approvU to simplify their mortgage journey"),
            final_cta_primary_text: s("Start Your Application"),
            final_cta_primary_link: s("/mortgage/approval/"),
            final_cta_secondary_text: s("Compare Offers"),
            final_cta_secondary_link: s("/mortgage/rates"),

            meta_title: s("approvU - Best Mortgage Rates & Expert Guidance Across Canada"),
            meta_description: s("Find the best mortgage rates in Canada with approvU. Expert guidance for first-time buyers, refinancing, renewals, and investment properties. Get pre-approved in minutes."),
        }
    }
}

// ===== About =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub credentials: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_text: String,
    pub hero_cta_link: String,
    pub hero_background_image: String,

    pub mission_vision_title: String,
    pub mission_vision_subtitle: String,
    pub mission_vision_cards: Vec<IconCard>,

    pub differentiators_title: String,
    pub differentiators_subtitle: String,
    pub differentiators: Vec<IconCard>,

    pub story_title: String,
    pub story_subtitle: String,
    pub story_paragraph1: String,
    pub story_paragraph2: String,
    pub story_paragraph3: String,

    pub stats_title: String,
    pub stats: Vec<Stat>,
    pub quote_text: String,

    pub team_title: String,
    pub team_subtitle: String,
    pub team_members: Vec<TeamMember>,

    pub compliance_title: String,
    pub compliance_subtitle: String,
    pub compliance_badges: Vec<IconCard>,

    pub cta_title: String,
    pub cta_description: String,
    pub cta_button_text: String,
    pub cta_button_link: String,

    pub meta_title: String,
    pub meta_description: String,
}

impl PageContent for AboutContent {
    const MEDIA_FIELDS: &'static [&'static str] = &["heroBackgroundImage"];

    fn key() -> PageKey {
        PageKey::About
    }

    fn fallback() -> Self {
        let stat = |value: &str, label: &str| Stat {
            value: s(value),
            label: s(label),
        };
        let member = |name: &str, role: &str, bio: &str, credentials: &str| TeamMember {
            name: s(name),
            role: s(role),
            bio: s(bio),
            credentials: s(credentials),
        };

        Self {
            hero_title: s("Empowering Canadians to Secure the Best Mortgage, Faster and Smarter"),
            hero_subtitle: s("We combine technology, expertise, and exclusive partnerships to simplify your path to homeownership."),
            hero_cta_text: s("Start My Online Approval"),
            hero_cta_link: s("/mortgage/approval/"),
            hero_background_image: s("/images/features/multigenerational-family.jpg"),

            mission_vision_title: s("Our Mission & Vision"),
            mission_vision_subtitle: s("The principles that guide everything we do"),
            mission_vision_cards: vec![
                IconCard::new("Our Mission", "To help Canadians achieve homeownership with confidence by combining fast technology, expert guidance, and value-added partner offers.", "🎯"),
                IconCard::new("Our Vision", "A world where every homebuyer gets the best mortgage without stress, guesswork, or hidden fees.", "🌟"),
            ],

            differentiators_title: s("What Makes approvU Different"),
            differentiators_subtitle: s("Why thousands of Canadians choose approvU for their mortgage needs"),
            differentiators: vec![
                IconCard::new("Fast Approvals", "Get matched with top lenders in minutes, not days.", "⚡"),
                IconCard::new("Expert Guidance", "Licensed mortgage brokers guide you through every step.", "🧠"),
                IconCard::new("Exclusive Offers", "Unlock partner perks with every mortgage, from moving discounts to free legal services.", "🎁"),
                IconCard::new("Trusted & Secure", "FSRA-licensed and fully digital platform with bank-level security.", "🔒"),
            ],

            story_title: s("Our Story"),
            story_subtitle: s("Who we are and why we exist"),
            story_paragraph1: s("approvU Mortgage was founded on the belief that homeownership should be simple, transparent, and rewarding."),
            story_paragraph2: s("As a fully licensed mortgage brokerage under the Financial Services Regulatory Authority of Ontario (FSRA), we maintain the highest standards of professionalism and regulatory compliance."),
            story_paragraph3: s("Our team combines decades of mortgage industry expertise with modern technology to ensure you get the right mortgage for your situation."),

            stats_title: s("By the Numbers"),
            stats: vec![
                stat("25,000+", "Happy Homeowners"),
                stat("25+", "Lending Partners"),
                stat("$2.5B+", "Mortgages Funded"),
                stat("4.9/5", "Client Rating"),
            ],
            quote_text: s("We're obsessed with your experience, from approval to closing and beyond."),

            team_title: s("Leadership Team"),
            team_subtitle: s("Meet the experienced professionals leading approvU's mission to transform Canadian mortgages"),
            team_members: vec![
                member("Sarah Johnson", "CEO & Founder", "15+ years in mortgage lending and fintech innovation.", "MBA Finance, CPA"),
                member("Michael Chen", "CTO & Co-Founder", "Former tech lead at major Canadian banks.", "M.Sc Computer Science"),
                member("Emily Rodriguez", "Head of Mortgage Services", "Licensed mortgage professional with 12+ years of client experience.", "FSRA Licensed, CAAMP Member"),
            ],

            compliance_title: s("Licensed & Regulated"),
            compliance_subtitle: s("approvU Mortgage operates under the highest regulatory standards to protect our clients and maintain industry trust."),
            compliance_badges: vec![
                IconCard::new("FSRA Licensed", "Licensed mortgage brokerage under Financial Services Regulatory Authority of Ontario", "🏛️"),
                IconCard::new("Privacy Compliant", "Full compliance with Canadian privacy laws and data protection regulations", "🔒"),
                IconCard::new("Insured & Bonded", "Professional liability insurance and bonding for complete client protection", "🛡️"),
            ],

            cta_title: s("Ready to find your perfect mortgage?"),
            cta_description: s("Join thousands of Canadians who've experienced the approvU difference."),
            cta_button_text: s("Start My Online Approval"),
            cta_button_link: s("/mortgage/approval/"),

            meta_title: s("About approvU Mortgage | Online Mortgage Brokerage in Canada"),
            meta_description: s("Learn how approvU Mortgage helps Canadians secure the best mortgage with fast approvals, expert guidance, and exclusive partner offers."),
        }
    }
}

// ===== Mortgage hub =====

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HubSection {
    pub title: String,
    pub href: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageHubContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub sections: Vec<HubSection>,
    pub faqs: Vec<Faq>,
    pub meta_title: String,
    pub meta_description: String,
}

impl PageContent for MortgageHubContent {
    fn key() -> PageKey {
        PageKey::mortgage("mortgage-main")
    }

    fn fallback() -> Self {
        let section = |title: &str, href: &str, description: &str| HubSection {
            title: s(title),
            href: s(href),
            description: s(description),
        };

        Self {
            hero_title: s("Your Mortgage Journey Starts Here"),
            hero_subtitle: s("Expert guidance, competitive rates, and personalized solutions for every Canadian homebuyer"),
            sections: vec![
                section("Mortgage Solutions", "/mortgage/solutions", "Explore mortgage options tailored to your unique situation: first-time buyers, self-employed, investors and more."),
                section("Mortgage Calculators", "/mortgage/calculators", "Calculate payments, affordability, down payments and land transfer taxes across Canada."),
                section("Mortgage Rates", "/mortgage/rates", "Compare the latest fixed and variable mortgage rates from top Canadian lenders."),
                section("First-Time Homebuyer Guide", "/mortgage/brokers", "Everything first-time homebuyers need to know about mortgages, incentives, and the homebuying process."),
                section("Mortgage Basics", "/mortgage/basics", "Learn mortgage fundamentals, terminology, and how mortgages work in Canada."),
                section("Mortgage Guides", "/mortgage/guides", "In-depth guides covering every aspect of mortgages, from application to renewal."),
            ],
            faqs: vec![
                Faq::new(
                    "What credit score do I need for a mortgage in Canada?",
                    "Most lenders require a minimum credit score of 600-680 for conventional mortgages. Higher scores (above 700) typically qualify for better rates.",
                ),
                Faq::new(
                    "How much down payment do I need?",
                    "5% for homes under $500k, 5% on the first $500k plus 10% on the remainder up to $1M, and 20% for homes over $1M.",
                ),
                Faq::new(
                    "What's the difference between pre-qualification and pre-approval?",
                    "Pre-qualification is an estimate based on self-reported information. Pre-approval involves document verification and a credit check.",
                ),
                Faq::new(
                    "Should I choose fixed or variable rate?",
                    "Fixed rates provide payment stability. Variable rates are typically lower but can fluctuate with Bank of Canada rate changes.",
                ),
            ],
            meta_title: s("Mortgage Solutions | approvU"),
            meta_description: s("Comprehensive mortgage guidance, calculators, rates, and expert advice for Canadian homebuyers and homeowners."),
        }
    }
}

// ===== Mortgage solutions hub =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageSolutionsContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta_text: String,
    pub hero_cta_link: String,
    pub hero_secondary_cta_text: String,
    pub hero_secondary_cta_link: String,
    pub hero_background_image: String,
    pub intro_title: String,
    pub intro_paragraphs: Vec<String>,
    pub highlights: Vec<IconCard>,
    pub programs_title: String,
    pub programs: Vec<HubSection>,
    pub faqs: Vec<Faq>,
    pub final_cta_title: String,
    pub final_cta_subtitle: String,
    pub final_cta_button_text: String,
    pub final_cta_button_link: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl PageContent for MortgageSolutionsContent {
    const MEDIA_FIELDS: &'static [&'static str] = &["heroBackgroundImage"];

    fn key() -> PageKey {
        PageKey::mortgage("mortgage-solutions")
    }

    fn fallback() -> Self {
        let program = |title: &str, href: &str, description: &str| HubSection {
            title: s(title),
            href: s(href),
            description: s(description),
        };

        Self {
            hero_title: s("Find Your Perfect Mortgage Solution"),
            hero_subtitle: s("Specialized mortgage programs designed for your unique financial situation and homeownership goals"),
            hero_cta_text: s("Get Pre-Approved"),
            hero_cta_link: s("/mortgage/approval/"),
            hero_secondary_cta_text: s("Talk to an Expert"),
            hero_secondary_cta_link: s("/contact/"),
            hero_background_image: s("/images/hero/hero-family-home.jpg"),
            intro_title: s("Mortgage Solutions Tailored to You"),
            intro_paragraphs: vec![
                s("Every borrower's situation is unique. Whether you're self-employed, a newcomer to Canada, have credit challenges, or are investing in real estate, there's a mortgage solution designed for your circumstances."),
                s("approvU specializes in connecting borrowers with the right lenders and programs, including options that traditional banks may not offer. Our network includes A-lenders, B-lenders, credit unions, and private lenders to maximize your approval chances."),
            ],
            highlights: vec![
                IconCard::new("First-Time Buyers", "Access government incentive programs, lower down payment options, and first-time buyer credits to make homeownership more affordable.", "🏠"),
                IconCard::new("Self-Employed", "Alternative income verification methods including bank statement programs and stated income mortgages for business owners and contractors.", "💼"),
                IconCard::new("Newcomers", "Specialized programs that consider foreign income, shorter credit histories, and work permits for new immigrants and temporary residents.", "🌍"),
                IconCard::new("Investors", "Competitive rates on rental properties, multi-unit financing, and portfolio lending for real estate investors building wealth.", "📈"),
            ],
            programs_title: s("Specialized Mortgage Programs"),
            programs: vec![
                program("First-Time Buyer Mortgages", "/mortgage/first-time-buyer/", "Special programs, incentives, and guidance for Canadians buying their first home."),
                program("Self-Employed Mortgages", "/mortgage/self-employed/", "Mortgage solutions for self-employed Canadians with alternative income verification."),
                program("Bad Credit Mortgages", "/mortgage/bad-credit/", "Get approved for a mortgage even with challenged credit history."),
                program("Newcomer Mortgages", "/mortgage/newcomer/", "Mortgage programs for new immigrants and permanent residents to Canada."),
                program("Investment Property Mortgages", "/mortgage/investment/", "Financing solutions for rental properties and real estate investments."),
                program("Professional Mortgages", "/mortgage/professional/", "Exclusive programs for doctors, lawyers, accountants, and licensed professionals."),
                program("Mortgage Refinancing", "/mortgage/refinancing/", "Lower your rate, access equity, or consolidate debt through refinancing."),
                program("Home Purchase Mortgages", "/mortgage/home-purchase/", "Traditional purchase mortgages for owner-occupied and investment properties."),
            ],
            faqs: vec![
                Faq::new(
                    "Can I get a mortgage if I'm self-employed?",
                    "Yes! Self-employed Canadians can qualify for mortgages using alternative documentation like bank statements, Notice of Assessments, or stated income programs. We work with lenders who specialize in self-employed financing.",
                ),
                Faq::new(
                    "What credit score do I need for a mortgage?",
                    "Most lenders require a minimum credit score of 600-680 for traditional mortgages. However, alternative lenders can work with scores as low as 500-550, though with higher rates. We can help you find the right lender for your credit situation.",
                ),
                Faq::new(
                    "How much down payment is required for investment properties?",
                    "Investment properties typically require larger down payments than primary residences. Expect to put down at least 20% for rental properties versus 5-10% for owner-occupied homes. Some lenders may require 25-35% for investment properties.",
                ),
                Faq::new(
                    "How long does mortgage approval take?",
                    "Pre-approval can take 24-48 hours with proper documentation. Final approval after finding a property typically takes 1-2 weeks. Self-employed and alternative documentation scenarios may take longer due to additional verification requirements.",
                ),
            ],
            final_cta_title: s("Let's Find Your Solution"),
            final_cta_subtitle: s("Connect with mortgage experts who understand your unique situation"),
            final_cta_button_text: s("Get Pre-Approved Now"),
            final_cta_button_link: s("/mortgage/approval/"),
            meta_title: s("Mortgage Solutions for Every Situation | approvU"),
            meta_description: s("Explore tailored mortgage solutions including first-time buyer programs, self-employed mortgages, bad credit options, newcomer financing, and investment property loans."),
        }
    }
}

// ===== Approval form page =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalPageContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub meta_title: String,
    pub meta_description: String,
}

impl PageContent for ApprovalPageContent {
    fn key() -> PageKey {
        PageKey::mortgage("mortgage-approval")
    }

    fn fallback() -> Self {
        Self {
            hero_title: s("Get Approved in Minutes, 100% Online"),
            hero_subtitle: s("Fast, transparent mortgage pre-approval with no credit impact. Compare personalized offers from 25+ lenders."),
            meta_title: s("Mortgage Pre-Approval Online - Get Approved in 24 Hours | approvU"),
            meta_description: s("Get pre-approved for your mortgage in minutes. 100% online application, no credit impact, compare offers from 25+ lenders."),
        }
    }
}
