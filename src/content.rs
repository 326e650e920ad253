//! Static portfolio content: menu entries, page text, splash art.
//!
//! Pure data, compiled into the binary. Nothing here is mutated at runtime;
//! the view layer reads it and the update layer only needs [`MENU`] to
//! resolve what the cursor points at.

use crate::tui::state::Screen;

// ============================================================================
// MENU
// ============================================================================

/// What selecting a menu entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Open a content page.
    Open(Screen),
    /// Leave the program.
    Quit,
}

/// A single selectable entry in the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub action: MenuAction,
}

/// The main menu, top to bottom. The last entry always quits.
pub const MENU: [MenuItem; 5] = [
    MenuItem {
        label: "About Me",
        action: MenuAction::Open(Screen::About),
    },
    MenuItem {
        label: "Skills",
        action: MenuAction::Open(Screen::Skills),
    },
    MenuItem {
        label: "Experience",
        action: MenuAction::Open(Screen::Experience),
    },
    MenuItem {
        label: "Contact",
        action: MenuAction::Open(Screen::Contact),
    },
    MenuItem {
        label: "Exit",
        action: MenuAction::Quit,
    },
];

pub const MENU_TITLE: &str = "==> Welcome to Vardhaman's Terminal Portfolio";

pub const MENU_HINT: &str = "[↑ ↓ arrows or j/k | Enter to select | q to quit]";

// ============================================================================
// SPLASH
// ============================================================================

/// Block-letter name shown on the splash screen, one entry per row.
pub const SPLASH_ART: [&str; 13] = [
    "██╗   ██╗ █████╗ ██████╗ ██████╗ ██╗  ██╗ █████╗ ███╗   ███╗ █████╗ ███╗   ██╗",
    "██║   ██║██╔══██╗██╔══██╗██╔══██╗██║  ██║██╔══██╗████╗ ████║██╔══██╗████╗  ██║",
    "██║   ██║███████║██████╔╝██║  ██║███████║███████║██╔████╔██║███████║██╔██╗ ██║",
    "╚██╗ ██╔╝██╔══██║██╔══██╗██║  ██║██╔══██║██╔══██║██║╚██╔╝██║██╔══██║██║╚██╗██║",
    " ╚████╔╝ ██║  ██║██║  ██║██████╔╝██║  ██║██║  ██║██║ ╚═╝ ██║██║  ██║██║ ╚████║",
    "  ╚═══╝  ╚═╝  ╚═╝╚═╝  ╚═╝╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝",
    "",
    "██╗  ██╗ ██████╗ ████████╗██╗  ██╗ █████╗ ██████╗ ██╗",
    "██║ ██╔╝██╔═══██╗╚══██╔══╝██║  ██║██╔══██╗██╔══██╗██║",
    "█████╔╝ ██║   ██║   ██║   ███████║███████║██████╔╝██║",
    "██╔═██╗ ██║   ██║   ██║   ██╔══██║██╔══██║██╔══██╗██║",
    "██║  ██╗╚██████╔╝   ██║   ██║  ██║██║  ██║██║  ██║██║",
    "╚═╝  ╚═╝ ╚═════╝    ╚═╝   ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝",
];

pub const SPLASH_SUBTITLE: &str = "Senior Software Engineer | Terminal Portfolio";

pub const SPLASH_PROMPT: &str = "Press ENTER or SPACE to continue...";

// ============================================================================
// PAGES
// ============================================================================

/// One block of page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Plain paragraph lines.
    Text(&'static [&'static str]),
    /// A titled section: bold heading, a rule under it, then bullet lines.
    Section {
        heading: &'static str,
        bullets: &'static [&'static str],
    },
}

/// A content page: title, body blocks, and the footer that leads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub blocks: &'static [Block],
}

pub const BACK_HINT: &str = "[ Enter to go back ]";

pub const ABOUT: Page = Page {
    title: "==> ABOUT ME",
    blocks: &[
        Block::Text(&[
            "Hi, I'm Vardhaman Kothari, a Senior Software Engineer with over 7 years of backend",
            "and architecture experience. My strength lies in building scalable, modular systems",
            "with Java, Spring Boot, Microservices, and Cloud-native tools.",
        ]),
        Block::Text(&[
            "I've contributed to fintech platforms handling ₹1000+ Cr disbursements and love",
            "mentoring developers and solving real-world business problems with code.",
        ]),
    ],
};

pub const SKILLS: Page = Page {
    title: "==> SKILLS",
    blocks: &[Block::Text(&[
        "- Java, Spring Boot, REST APIs, Microservices",
        "- PostgreSQL, DynamoDB, MySQL",
        "- AWS (Fargate, Kinesis, Beanstalk), Docker",
        "- GitHub Actions, CI/CD, Distributed Systems",
    ])],
};

pub const EXPERIENCE: Page = Page {
    title: "==> PROFESSIONAL EXPERIENCE",
    blocks: &[
        Block::Section {
            heading: "Senior Software Engineer, Niro (Sep 2021 – Present)",
            bullets: &[
                "Architected backend for Embedded Finance platform (₹1000 Cr+ disbursed)",
                "Improved system performance by 30%",
                "Integrated PayU, LiquiLoans, Muthoot across the full lender lifecycle",
                "Built CI/CD pipelines using AWS Fargate & GitHub Actions",
                "Launched Loan Repayment Microservice with 95% ops automation",
                "Mentored juniors, improved code quality and resolved tech debt",
            ],
        },
        Block::Section {
            heading: "Senior Software Engineer, Reliance Jio (Jul 2020 – Sep 2021)",
            bullets: &[
                "Developed smart watchdog for multistage recovery",
                "Created containerized microservice-based platform",
            ],
        },
        Block::Section {
            heading: "Software Engineer, DigiKredit Finance (Apr 2019 – Jul 2020)",
            bullets: &[
                "Delivered MSME loan app improving financial access",
                "Integrated APIs for DMI, Northern Arc, Paytm, PhonePe",
            ],
        },
        Block::Section {
            heading: "Software Engineer, NCR Corporation (Oct 2017 – Apr 2019)",
            bullets: &[
                "Developed dynamic webview suite in IMA application",
                "Enhanced batch job management using Java, J2EE",
            ],
        },
        Block::Section {
            heading: "Intern, TickerPlant India (Apr 2017 – Oct 2017)",
            bullets: &["Learned core development practices and supported engineering teams"],
        },
    ],
};

pub const CONTACT: Page = Page {
    title: "==> CONTACT",
    blocks: &[Block::Text(&[
        "📧 vardhamank93@gmail.com",
        "🌐 linkedin.com/in/vardhaman-kothari-598843177/",
    ])],
};

/// Look up the page shown on a content screen.
///
/// Returns None for Splash and Menu, which are not pages.
pub fn page(screen: Screen) -> Option<&'static Page> {
    match screen {
        Screen::About => Some(&ABOUT),
        Screen::Skills => Some(&SKILLS),
        Screen::Experience => Some(&EXPERIENCE),
        Screen::Contact => Some(&CONTACT),
        Screen::Splash | Screen::Menu => None,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_menu_item_quits() {
        assert_eq!(MENU[MENU.len() - 1].action, MenuAction::Quit);
        assert_eq!(MENU[MENU.len() - 1].label, "Exit");
    }

    #[test]
    fn first_four_items_open_pages_in_order() {
        let targets: Vec<_> = MENU[..4].iter().map(|item| item.action).collect();
        assert_eq!(
            targets,
            vec![
                MenuAction::Open(Screen::About),
                MenuAction::Open(Screen::Skills),
                MenuAction::Open(Screen::Experience),
                MenuAction::Open(Screen::Contact),
            ]
        );
    }

    #[test]
    fn every_menu_target_has_a_page() {
        for item in &MENU {
            if let MenuAction::Open(screen) = item.action {
                assert!(page(screen).is_some(), "no page for {:?}", screen);
            }
        }
    }

    #[test]
    fn splash_and_menu_are_not_pages() {
        assert!(page(Screen::Splash).is_none());
        assert!(page(Screen::Menu).is_none());
    }

    #[test]
    fn pages_have_titles_and_body() {
        for page in [&ABOUT, &SKILLS, &EXPERIENCE, &CONTACT] {
            assert!(!page.title.is_empty());
            assert!(!page.blocks.is_empty());
        }
    }
}
