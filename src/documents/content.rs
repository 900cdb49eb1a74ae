//! Literal copy and figures shared by the two documents.

use hromada_compositor::{Column, ProjectCard, Stat, Step, Table, palette};
use hromada_layout::FontRole;
use hromada_types::{Color, TextAlign};

pub const AUTHOR: &str = "Hromada | A Project of POCACITO Network";
pub const LEAVE_BEHIND_TITLE: &str =
    "Hromada \u{2014} Connecting US Donors with Ukraine\u{2019}s Municipal Energy Transition";
pub const DEEP_DIVE_TITLE: &str =
    "Hromada: Connecting US Donors with Ukraine\u{2019}s Municipal Energy Transition";

pub const NGO_LOGOS: &[&str] = &[
    "Ecoaction",
    "Ecoclub",
    "RePower Ukraine",
    "Greenpeace CEE",
    "Energy Act For Ukraine",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NgoPartner {
    pub name: &'static str,
    pub description: &'static str,
}

/// A titled group of bullets under a coloured underline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountabilitySection {
    pub title: &'static str,
    pub color: Color,
    pub bullets: &'static [&'static str],
}

// Shared

pub const HROMADA_MEANING: &str = "Hromada (\u{0433}\u{0440}\u{043e}\u{043c}\u{0430}\u{0434}\u{0430}) means both \u{201c}community\u{201d} and \u{201c}municipality\u{201d} in Ukrainian. Our platform connects Ukrainian municipalities directly with US donors for renewable energy projects \u{2014} solar arrays, heat pumps, battery storage, and thermo-modernization for hospitals, schools, and essential services. Every project is requested by the community it serves, verified by on-the-ground NGO partners, and funded in full.";

pub const SOLAR_SCHOOL_ARGUMENT: &str = "A school with its own solar array cannot be shut down by bombing a central power station. Every decentralized renewable installation makes Russia\u{2019}s theory of victory harder to execute.";

const FEE_HEADER: &[&str] = &["Donation", "Hromada Fees", "% of Gift", "GlobalGiving"];
const FEE_ROWS: &[&[&str]] = &[
    &["$10,000", "$70\u{2013}95", "0.7\u{2013}1.0%", "$800\u{2013}1,500 (8\u{2013}15%)"],
    &["$25,000", "$70\u{2013}95", "0.3\u{2013}0.4%", "$2,000\u{2013}3,750"],
    &["$50,000", "$70\u{2013}95", "0.15\u{2013}0.2%", "$4,000\u{2013}7,500"],
    &["$100,000", "$70\u{2013}95", "0.07\u{2013}0.1%", "$8,000\u{2013}15,000"],
];
const FEE_COLUMNS: &[Column] = &[
    Column::new(86.4, TextAlign::Left),
    Column::new(75.6, TextAlign::Center).emphasis(FontRole::BodySemi, palette::GREEN),
    Column::new(72.0, TextAlign::Center).emphasis(FontRole::BodySemi, palette::GREEN),
    Column::new(115.2, TextAlign::Center).emphasis(FontRole::BodySemi, palette::RED_SOFT),
];

/// Hromada's per-gift cost against a percentage-fee platform.
pub const FEE_TABLE: Table<'static> = Table {
    columns: FEE_COLUMNS,
    header: FEE_HEADER,
    rows: FEE_ROWS,
};

// Leave-behind

pub const PULL_QUOTE: &str = "\u{201c}Our community knows what it needs to rebuild. We just need a way to reach the people who can help.\u{201d}";
pub const PULL_QUOTE_ATTRIBUTION: &str =
    "\u{2014} Framing inspired by Ukrainian municipal leaders partnering with Hromada";

pub const WHY_IT_MATTERS: &str = "Russia systematically targets Ukraine\u{2019}s centralized energy infrastructure to break civilian morale and create war fatigue. Rolling blackouts, freezing winters, and destroyed hospitals are a deliberate strategy. Traditional aid channels charge 8\u{2013}15% in platform fees and flow through national-level mechanisms too slowly for municipal needs.";

pub const SPOTLIGHT: &[ProjectCard<'static>] = &[
    ProjectCard {
        name: "Children\u{2019}s Center \u{201c}Radist\u{201d}",
        location: "Novohrodivka, Donetsk Oblast",
        cost: "$15,000",
        kind: "30kW Solar PV",
        accent: palette::CAT_OTHER,
        partner: None,
    },
    ProjectCard {
        name: "Prylymanskyi Lyceum",
        location: "Odesa Oblast",
        cost: "$18,000",
        kind: "36kW Solar PV  \u{2022}  67 panels",
        accent: palette::CAT_SCHOOL,
        partner: None,
    },
    ProjectCard {
        name: "Lutskteplo District Heating",
        location: "Lutsk, Volyn Oblast",
        cost: "$345,000",
        kind: "210kW Heat Pump",
        accent: palette::CAT_ENERGY,
        partner: None,
    },
];

pub const PIPELINE_SUMMARY: &[Stat<'static>] = &[
    Stat::new("66", "projects"),
    Stat::new("$6.8M", "total pipeline"),
    Stat::new("44", "under $50K"),
    Stat::new("5", "NGO partners"),
];

pub const SHORT_STEPS: &[Step<'static>] = &[
    Step::new(
        palette::CAT_WATER,
        "Community Request",
        "A Ukrainian municipality identifies a renewable energy need. Their NGO partner scopes the project and submits it to Hromada.",
    ),
    Step::new(
        palette::CAT_SCHOOL,
        "Verification & Screening",
        "Hromada screens for OFAC sanctions compliance, checks transparency data, and verifies the project with the NGO partner.",
    ),
    Step::new(
        palette::CAT_ENERGY,
        "Published on Platform",
        "The verified project goes live with full details: municipality, oblast, cost breakdown, and NGO partner attribution.",
    ),
    Step::new(
        palette::CAT_HOSPITAL,
        "Donor Funds the Project",
        "You browse projects, choose one, and send funds via wire transfer or DAF to POCACITO Network, our 501(c)(3) fiscal sponsor.",
    ),
    Step::new(
        palette::GREEN,
        "Funds Reach the Municipality",
        "After a second sanctions screen, funds transfer directly to the Ukrainian municipal bank account via SWIFT wire.",
    ),
];

pub const FEE_NOTE_SHORT: &str = "The only fee is your bank\u{2019}s standard wire transfer fee \u{2014} typically $25\u{2013}50. Hromada takes nothing.";

pub const TEAM_SUMMARY: &[TeamMember] = &[
    TeamMember {
        name: "Thomas Protzman",
        role: "Founder & Project Director  \u{2022}  MIA, Hertie School Berlin",
        bio: None,
    },
    TeamMember {
        name: "Kostiantyn Krynytskyi",
        role: "Co-Founder & Director \u{2014} Ukraine  \u{2022}  Head of Energy, NGO Ecoaction",
        bio: None,
    },
    TeamMember {
        name: "Sloan Austermann",
        role: "Co-Founder & Alternate Director  \u{2022}  AI Engineer, Accenture Federal Services",
        bio: None,
    },
];

pub const FISCAL_SPONSOR_LINE: &str = "Fiscal sponsor: POCACITO Network, 501(c)(3)  \u{2022}  EIN 99-0392258  \u{2022}  Candid Platinum Seal of Transparency";

// Deep-dive

pub const COVER_SUBTITLE: &str = "\u{0433}\u{0440}\u{043e}\u{043c}\u{0430}\u{0434}\u{0430}  \u{2014}  community  \u{2022}  municipality";
pub const COVER_TITLE: [&str; 2] = ["Connecting US Donors with Ukraine\u{2019}s", "Municipal Energy Transition"];
pub const COVER_STATS: &[Stat<'static>] = &[
    Stat::new("66", "Projects"),
    Stat::new("$6.8M", "Pipeline"),
    Stat::new("5", "NGO Partners"),
    Stat::new("44", "Under $50K"),
];
pub const COVER_SPONSOR: &str =
    "A Project of POCACITO Network  \u{2022}  501(c)(3)  \u{2022}  EIN 99-0392258";
pub const COVER_CONTACT: &str = "hromadaproject.org  \u{2022}  contact@hromadaproject.org";
pub const COVER_DATE: &str = "February 2026";

pub const PROBLEM: &str = "Russia\u{2019}s strategy in this war is not only military \u{2014} it is societal. By systematically targeting Ukraine\u{2019}s centralized energy infrastructure, Russia aims to break civilian morale and create war fatigue. Rolling blackouts, freezing winters, and shuttered hospitals and schools are a deliberate tactic to wear down Ukrainian society\u{2019}s will to defend itself.";
pub const PROBLEM_LEAD: &str =
    "Traditional international donor channels are not built for this problem:";
pub const PROBLEMS: &[&str] = &[
    "Most aid flows through centralized national-level mechanisms, not to individual municipalities.",
    "Ukrainian communities know exactly what they need, but have no direct channel to reach international donors.",
    "Platforms like GlobalGiving charge 8\u{2013}15% in fees before money reaches anyone.",
    "Large institutional aid programs are slow, bureaucratic, and often not designed for renewable energy infrastructure.",
];

pub const RESILIENCE: &str = "This is not charity. It is resilience infrastructure. Each solar array on a hospital, each heat pump in a school, each battery system for a water utility represents a permanent reduction in Ukraine\u{2019}s vulnerability to centralized infrastructure attacks. What is decentralized cannot be destroyed in a single strike.";
pub const CIVILIAN_ONLY: &str = "Hromada exclusively supports civilian infrastructure \u{2014} hospitals, schools, water utilities, and community energy systems. No military equipment. No dual-use technology. Ever.";

pub const SOLUTION: &str = "Hromada is a verified, transparent platform that connects Ukrainian municipalities directly with US donors for renewable energy projects. Every project is requested by the community it serves, scoped and verified by an on-the-ground NGO partner, screened for sanctions compliance, and funded in full through tax-deductible donations to our 501(c)(3) fiscal sponsor, POCACITO Network.";
pub const CATEGORIES: &str = "Project categories include solar PV installations, battery storage systems, heat pumps, and thermo-modernization across hospitals, schools, water utilities, and essential municipal infrastructure.";

pub const FULL_STEPS: &[Step<'static>] = &[
    Step::new(
        palette::CAT_WATER,
        "Community Request",
        "A Ukrainian municipality identifies a renewable energy need. Their on-the-ground NGO partner scopes the project, produces a cost estimate, and submits it to Hromada on behalf of the community.",
    ),
    Step::new(
        palette::CAT_SCHOOL,
        "Pre-Screening & Due Diligence",
        "Before publication, Hromada conducts sanctions screening of all individuals associated with the municipality, verifies transparency data, and confirms the project is in territory under effective Ukrainian government control.",
    ),
    Step::new(
        palette::CAT_OTHER,
        "Published on Platform",
        "The verified project appears on Hromada\u{2019}s interactive platform with full details: municipality name, oblast, project type, cost breakdown, NGO partner, and co-financing status.",
    ),
    Step::new(
        palette::CAT_ENERGY,
        "Donor Discovery & Consultation",
        "A donor browses the platform, finds a project, and books a brief consultation with the Hromada team to discuss the project and answer questions.",
    ),
    Step::new(
        palette::CAT_HOSPITAL,
        "Donation",
        "The donor sends funds via wire transfer or DAF directly to POCACITO Network\u{2019}s Bank of America account. Hromada accepts only donations that fund one or more complete projects \u{2014} no partial funding.",
    ),
    Step::new(
        palette::CAT_WATER,
        "Second-Round Due Diligence",
        "When funds arrive at POCACITO, Hromada conducts a second round of sanctions checks before any disbursement.",
    ),
    Step::new(
        palette::CAT_SCHOOL,
        "Legal Framework",
        "NGO partners sign MoUs defining verification and monitoring obligations. Municipalities sign contracts committing to intended use \u{2014} with legal recourse. All procurement goes through Prozorro, Ukraine\u{2019}s public platform.",
    ),
    Step::new(
        palette::CAT_ENERGY,
        "Disbursement",
        "Funds transfer from POCACITO\u{2019}s Bank of America account to the Ukrainian municipality via international SWIFT wire in USD. Direct bank-to-bank, no third-party transfer service.",
    ),
    Step::new(
        palette::GREEN,
        "Donor Dashboard & Updates",
        "Donors receive a tax-deductible receipt, secure login, and a dashboard to track their donation. Project updates with photos and receipts come from the NGO partner. Procurement is visible via Prozorro.",
    ),
];

pub const ACCOUNTABILITY_INTRO: &str = "Hromada is built on the principle that donor trust comes from evidence, not claims. Every step \u{2014} from project submission to fund disbursement \u{2014} includes verifiable accountability mechanisms.";

pub const ACCOUNTABILITY: &[AccountabilitySection] = &[
    AccountabilitySection {
        title: "Pre-Publication Screening",
        color: palette::UKRAINE_BLUE,
        bullets: &[
            "OFAC sanctions screening of all municipality officials and associated individuals",
            "Transparency score verification via TI Ukraine\u{2019}s Transparent Cities ranking",
            "Confirmation of territory under effective Ukrainian government control",
            "Verification of intended civilian use of funds",
        ],
    },
    AccountabilitySection {
        title: "Procurement Transparency",
        color: palette::CAT_ENERGY,
        bullets: &[
            "All procurement goes through Prozorro, Ukraine\u{2019}s public electronic procurement platform",
            "Contractor selection is fully transparent and auditable by any party",
            "No sanctioned entities may participate in the procurement process",
        ],
    },
    AccountabilitySection {
        title: "NGO Partner Obligations",
        color: palette::CAT_SCHOOL,
        bullets: &[
            "Partners verify municipality legitimacy, official identity, and project scope accuracy",
            "Partners monitor fund use and report any misuse immediately",
            "Monthly progress reports with photos; structured completion report within 30 days",
            "Anti-corruption and anti-diversion commitments with indemnification for breaches",
            "Municipalities sign contracts committing to intended use \u{2014} with legal recourse",
        ],
    },
    AccountabilitySection {
        title: "Donor Accountability",
        color: palette::TERRACOTTA,
        bullets: &[
            "Tax-deductible receipt from POCACITO Network (501(c)(3), EIN 99-0392258)",
            "Secure donor dashboard with donation tracking and status timeline",
            "Progress photos and completion documentation from NGO partners",
            "Full visibility into procurement via Prozorro links",
        ],
    },
    AccountabilitySection {
        title: "Fiscal Sponsor Oversight",
        color: palette::NAVY_80,
        bullets: &[
            "POCACITO Network reviews and approves all disbursements",
            "Authority to suspend any disbursement pending compliance review",
            "Candid Platinum Seal of Transparency \u{2014} highest level of nonprofit accountability",
            "Second-round sanctions screening before every international transfer",
        ],
    },
];

pub const PIPELINE_STATS: &[Stat<'static>] = &[
    Stat::new("66", "total projects"),
    Stat::new("$6.8M", "funding needed"),
    Stat::new("$7.5K\u{2013}$3M", "project range"),
    Stat::new("44 of 66", "under $50K"),
];

pub const CATEGORY_LEGEND: &[(&str, Color)] = &[
    ("Hospital / Medical", palette::CAT_HOSPITAL),
    ("School / Education", palette::CAT_SCHOOL),
    ("Water Utility", palette::CAT_WATER),
    ("Energy", palette::CAT_ENERGY),
    ("Other", palette::CAT_OTHER),
];

pub const SELECTED_PROJECTS: &[ProjectCard<'static>] = &[
    ProjectCard {
        name: "Children\u{2019}s Center \u{201c}Radist\u{201d}",
        location: "Novohrodivka, Donetsk Oblast",
        cost: "$15,000",
        kind: "30kW Solar PV  \u{2022}  56 panels",
        accent: palette::CAT_OTHER,
        partner: Some("NGO Ecoaction"),
    },
    ProjectCard {
        name: "Prylymanskyi Lyceum",
        location: "Avanhardivska, Odesa Oblast",
        cost: "$18,000",
        kind: "36kW Solar PV  \u{2022}  67 panels",
        accent: palette::CAT_SCHOOL,
        partner: Some("Energy Act For Ukraine"),
    },
    ProjectCard {
        name: "Maternity Hospital",
        location: "Nizhyn, Chernihiv Oblast",
        cost: "$60,000",
        kind: "Solar PV Installation",
        accent: palette::CAT_HOSPITAL,
        partner: Some("NGO Partner TBD"),
    },
    ProjectCard {
        name: "Lutskteplo District Heating",
        location: "Lutsk, Volyn Oblast",
        cost: "$345,000",
        kind: "210kW Heat Pump",
        accent: palette::CAT_ENERGY,
        partner: Some("NGO Ecoclub"),
    },
    ProjectCard {
        name: "School #7",
        location: "Novohrodivka, Donetsk Oblast",
        cost: "$45,000",
        kind: "90kW Solar PV  \u{2022}  167 panels",
        accent: palette::CAT_SCHOOL,
        partner: Some("NGO Ecoaction"),
    },
];

pub const NGO_PARTNERS: &[NgoPartner] = &[
    NgoPartner {
        name: "Ecoaction",
        description: "Ukraine\u{2019}s leading environmental NGO. Leads just-transition work for coal communities. Head of Energy: Kostiantyn Krynytskyi.",
    },
    NgoPartner {
        name: "Ecoclub",
        description: "Rivne-based environmental organization focused on energy efficiency and renewable energy in western Ukraine.",
    },
    NgoPartner {
        name: "RePower Ukraine",
        description: "Coalition supporting Ukraine\u{2019}s decentralized energy transition and post-war reconstruction.",
    },
    NgoPartner {
        name: "Greenpeace CEE",
        description: "Central and Eastern Europe division. Supports community-scale renewable projects in conflict-affected areas.",
    },
    NgoPartner {
        name: "Energy Act For Ukraine",
        description: "Connects international expertise with Ukrainian communities for energy infrastructure recovery.",
    },
];

pub const TEAM_BIOS: &[TeamMember] = &[
    TeamMember {
        name: "Thomas Protzman",
        role: "Founder & Project Director",
        bio: Some("Thomas built Hromada to channel US philanthropic capital toward Ukraine\u{2019}s municipal renewable energy transition. He holds a Master of International Affairs from the Hertie School in Berlin and writes on climate change, transatlantic affairs, and European politics."),
    },
    TeamMember {
        name: "Kostiantyn Krynytskyi",
        role: "Co-Founder & Director \u{2014} Ukraine",
        bio: Some("Kostiantyn is Head of the Energy Department at NGO Ecoaction, where he leads work on just transition for coal-dependent communities in Eastern Ukraine. A lawyer by training, he has served as an analyst for Ukraine\u{2019}s Public Integrity Council and as legal counsel for CrimeaSOS."),
    },
    TeamMember {
        name: "Sloan Austermann",
        role: "Co-Founder & Alternate Project Director",
        bio: Some("Sloan is an AI Engineer at Accenture Federal Services, designing and deploying cloud-native systems supporting critical federal operations. He holds multiple AWS certifications and dual degrees in International Economics and Mathematics from the University of Notre Dame."),
    },
];

pub const FISCAL_SPONSOR: &str = "POCACITO Network is a US 501(c)(3) nonprofit that serves as Hromada\u{2019}s fiscal sponsor. All donations are received by POCACITO and are tax-deductible. POCACITO holds a Candid Platinum Seal of Transparency \u{2014} the highest level of nonprofit accountability on GuideStar.";
pub const SPONSOR_REFERENCE: &str =
    "EIN 99-0392258  \u{2022}  Candid: app.candid.org/profile/16026326/pocacito-network/";
pub const FEE_NOTE_ZERO: &str =
    "Zero platform fees. You only pay your bank\u{2019}s wire transfer fee ($25\u{2013}50).";
