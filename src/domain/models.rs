use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Work,
    Testimonials,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Work,
        Section::Testimonials,
        Section::Blog,
        Section::Contact,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Work => "Work",
            Section::Testimonials => "Testimonials",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectCategory {
    Design,
    Web,
    Branding,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::Design,
        ProjectCategory::Web,
        ProjectCategory::Branding,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectCategory::Design => "Design",
            ProjectCategory::Web => "Web",
            ProjectCategory::Branding => "Branding",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub slug: String,
    pub title: String,
    pub category: ProjectCategory,
    pub meta: String,
    pub description: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
    pub stack: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub date: String,
    pub summary: String,
}

/// Everything the application renders: owner identity, the role phrases
/// the typewriter cycles through, and the project/testimonial/blog
/// collections the carousels index into.
///
/// The default content mirrors the shipped portfolio; a JSON file with the
/// same shape can replace it wholesale at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: String,
    pub tagline: String,
    pub roles: Vec<String>,
    pub about: Vec<String>,
    pub projects: Vec<Project>,
    pub testimonials: Vec<Testimonial>,
    pub posts: Vec<BlogPost>,
    pub site_url: String,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            owner: "Hari Shahi".to_string(),
            tagline: "I design and build calm, fast interfaces.".to_string(),
            roles: vec![
                "fullstack developer".to_string(),
                "designer".to_string(),
                "engineer".to_string(),
                "problem solver".to_string(),
                "creative thinker".to_string(),
                "tech enthusiast".to_string(),
                "innovator".to_string(),
                "coder".to_string(),
            ],
            about: vec![
                "I am a designer-developer hybrid who cares about the seams: \
                 the moment a layout loads, the way a form forgives a typo, \
                 the feel of a page that never keeps you waiting."
                    .to_string(),
                "Most of my work sits between product design and frontend \
                 engineering - design systems, dashboards, brand kits, and \
                 the occasional logo that refuses to behave at small sizes."
                    .to_string(),
            ],
            projects: default_projects(),
            testimonials: default_testimonials(),
            posts: default_posts(),
            site_url: "https://harishahi22.github.io/wind".to_string(),
        }
    }
}

impl Portfolio {
    /// Indices of the projects matching a category filter, in display order.
    pub fn projects_in(&self, filter: Option<ProjectCategory>) -> Vec<usize> {
        self.projects
            .iter()
            .enumerate()
            .filter(|(_, p)| filter.is_none_or(|c| p.category == c))
            .map(|(i, _)| i)
            .collect()
    }
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            slug: "teal-dashboard".to_string(),
            title: "Teal Dashboard UI".to_string(),
            category: ProjectCategory::Design,
            meta: "Product design • UI • 2024".to_string(),
            description: "A data-heavy dashboard redesigned for clarity and ease of use, \
                          using a modular card-based layout and teal accents to guide attention."
                .to_string(),
            challenge: "The client needed a data-heavy dashboard that felt lightweight and \
                        approachable, avoiding the typical dense, overwhelming analytics interface."
                .to_string(),
            solution: "I designed a modular card-based layout with generous whitespace, clear \
                       visual hierarchy, and teal accent colors to guide attention. Interactive \
                       charts were simplified to key metrics, with expandable details for power users."
                .to_string(),
            results: vec![
                "User task completion time reduced by 32%".to_string(),
                "Support tickets decreased by 22%".to_string(),
                "Stakeholder adoption increased within 2 weeks".to_string(),
                "Positive feedback on clarity and ease of use".to_string(),
            ],
            stack: vec![
                "Figma".to_string(),
                "Principle".to_string(),
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "Chart.js".to_string(),
            ],
        },
        Project {
            slug: "minimal-portfolio".to_string(),
            title: "Minimal Portfolio Site".to_string(),
            category: ProjectCategory::Web,
            meta: "Frontend • Performance • 2024".to_string(),
            description: "A lightning-fast, minimalist portfolio site optimized for performance \
                          and accessibility, with Lighthouse scores consistently above 95."
                .to_string(),
            challenge: "A creative professional wanted a portfolio that loaded instantly, worked \
                        on all devices, and stayed out of the way of their work."
                .to_string(),
            solution: "Built a static site with a single-page layout, optimized images, and \
                       minimal JavaScript. Used semantic HTML and CSS Grid for responsiveness. \
                       Lighthouse scores consistently 95+."
                .to_string(),
            results: vec![
                "Page load under 1.2s on 3G".to_string(),
                "Lighthouse performance score 98".to_string(),
                "Zero layout shifts (CLS 0)".to_string(),
                "Client reported increased inquiry rate".to_string(),
            ],
            stack: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "Vanilla JS".to_string(),
                "WebP".to_string(),
                "Netlify".to_string(),
            ],
        },
        Project {
            slug: "coral-brand-kit".to_string(),
            title: "Coral Brand Kit".to_string(),
            category: ProjectCategory::Branding,
            meta: "Branding • Identity • 2023".to_string(),
            description: "A complete brand identity system centered around coral, including logo \
                          variations, typography, color system, and component library."
                .to_string(),
            challenge: "A startup needed a cohesive visual identity that felt modern yet warm, \
                        with coral as the signature color."
                .to_string(),
            solution: "Developed a full brand system: logo variations, typography palette, color \
                       system, illustration style, and component library. Provided guidelines and \
                       templates for consistent application."
                .to_string(),
            results: vec![
                "Brand recognition improved in user surveys".to_string(),
                "Consistent visual language across all touchpoints".to_string(),
                "Easy onboarding for new designers".to_string(),
                "Positive feedback from stakeholders".to_string(),
            ],
            stack: vec![
                "Illustrator".to_string(),
                "Figma".to_string(),
                "After Effects".to_string(),
                "Style Guide".to_string(),
            ],
        },
        Project {
            slug: "mobile-app-screens".to_string(),
            title: "Mobile App Screens".to_string(),
            category: ProjectCategory::Design,
            meta: "UX • UI • 2023".to_string(),
            description: "Clean, motivating mobile app onboarding and core flows designed to \
                          reduce first-use drop-off and improve retention."
                .to_string(),
            challenge: "A fitness app needed onboarding and core flows that felt motivating and \
                        simple, reducing drop-off during first use."
                .to_string(),
            solution: "Designed clean, illustration-accompanied screens with step-by-step \
                       onboarding, clear CTAs, and subtle micro-interactions. Conducted two rounds \
                       of usability testing to refine flows."
                .to_string(),
            results: vec![
                "Onboarding completion increased by 28%".to_string(),
                "Day-1 retention improved by 15%".to_string(),
                "Reduced support questions about getting started".to_string(),
                "App store ratings improved".to_string(),
            ],
            stack: vec![
                "Figma".to_string(),
                "Principle".to_string(),
                "User Testing".to_string(),
                "Prototyping".to_string(),
            ],
        },
        Project {
            slug: "landing-page-system".to_string(),
            title: "Landing Page System".to_string(),
            category: ProjectCategory::Web,
            meta: "Web • Design system • 2023".to_string(),
            description: "A component-based landing page system enabling the marketing team to \
                          launch dozens of pages quickly while maintaining brand consistency and \
                          performance."
                .to_string(),
            challenge: "A marketing team needed to launch dozens of landing pages quickly while \
                        maintaining brand consistency and performance."
                .to_string(),
            solution: "Built a component-based system with reusable sections (hero, features, \
                       testimonials, CTAs). Integrated with a CMS for non-technical users. \
                       Optimized for SEO and speed."
                .to_string(),
            results: vec![
                "Page creation time reduced from days to hours".to_string(),
                "SEO scores consistently above 90".to_string(),
                "Conversion rates improved across variants".to_string(),
                "Design consistency maintained".to_string(),
            ],
            stack: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
                "React".to_string(),
                "Contentful".to_string(),
                "Vercel".to_string(),
            ],
        },
        Project {
            slug: "logo-refresh".to_string(),
            title: "Logo Refresh".to_string(),
            category: ProjectCategory::Branding,
            meta: "Brand • Visual • 2022".to_string(),
            description: "A modern logo evolution that retained brand recognition while improving \
                          scalability and perception across digital and print."
                .to_string(),
            challenge: "An established company wanted to modernize their logo without losing \
                        brand recognition or alienating existing customers."
                .to_string(),
            solution: "Conducted brand audit and stakeholder interviews. Evolved the logo with \
                       cleaner geometry, updated typography, and a flexible lockup system. \
                       Provided usage guidelines and transition assets."
                .to_string(),
            results: vec![
                "Positive feedback from 85% of surveyed customers".to_string(),
                "Improved scalability across digital and print".to_string(),
                "Clearer brand perception in focus groups".to_string(),
                "Smooth internal adoption".to_string(),
            ],
            stack: vec![
                "Illustrator".to_string(),
                "Brand Audit".to_string(),
                "Guidelines".to_string(),
            ],
        },
    ]
}

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "Hari turned a dashboard nobody wanted to open into the first tab \
                    our analysts pin every morning."
                .to_string(),
            author: "Maya Ortiz".to_string(),
            role: "Product Lead, Finch Analytics".to_string(),
        },
        Testimonial {
            quote: "The brand kit shipped with guidelines so clear our newest designer \
                    was productive on day one."
                .to_string(),
            author: "Jonas Leclerc".to_string(),
            role: "Founder, Coralline".to_string(),
        },
        Testimonial {
            quote: "Fast, responsive, and honest about trade-offs. The site he built \
                    still scores 98 on Lighthouse a year later."
                .to_string(),
            author: "Priya Raman".to_string(),
            role: "Photographer".to_string(),
        },
    ]
}

fn default_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "designing-for-slow-networks".to_string(),
            title: "Designing for Slow Networks".to_string(),
            date: "2024-09-12".to_string(),
            summary: "What a 3G budget does to your layout decisions, and why that \
                      discipline improves the fast path too."
                .to_string(),
        },
        BlogPost {
            slug: "the-case-for-boring-forms".to_string(),
            title: "The Case for Boring Forms".to_string(),
            date: "2024-06-03".to_string(),
            summary: "Forms should forgive, not impress. Notes from rebuilding the same \
                      contact form three times."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggles_both_ways() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn test_default_portfolio_content() {
        let portfolio = Portfolio::default();
        assert_eq!(portfolio.roles.len(), 8);
        assert_eq!(portfolio.roles[0], "fullstack developer");
        assert_eq!(portfolio.projects.len(), 6);
        assert!(!portfolio.testimonials.is_empty());
        assert!(!portfolio.posts.is_empty());
    }

    #[test]
    fn test_projects_in_filters_by_category() {
        let portfolio = Portfolio::default();

        let all = portfolio.projects_in(None);
        assert_eq!(all, vec![0, 1, 2, 3, 4, 5]);

        let web = portfolio.projects_in(Some(ProjectCategory::Web));
        assert_eq!(web.len(), 2);
        for i in web {
            assert_eq!(portfolio.projects[i].category, ProjectCategory::Web);
        }
    }

    #[test]
    fn test_portfolio_round_trips_through_json() {
        let portfolio = Portfolio::default();
        let json = serde_json::to_string(&portfolio).unwrap();
        let back: Portfolio = serde_json::from_str(&json).unwrap();
        assert_eq!(back.owner, portfolio.owner);
        assert_eq!(back.projects.len(), portfolio.projects.len());
    }
}
