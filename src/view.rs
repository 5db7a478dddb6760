use crate::constants::SKILL_LEVEL_MAX;
use crate::content::{
    Project, ABOUT_PARAGRAPHS, EDUCATION, PROFILE, PROJECTS, SKILLS, TECHNOLOGIES,
};
use crate::navbar::NavBarState;
use crate::section::SectionId;

// HTML for every part of the page. Pure string building so it can be
// checked on the host; the wasm side only inserts and toggles.

/// Escape text for element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Join the class names whose flag is set.
pub fn classes(parts: &[(&str, bool)]) -> String {
    parts
        .iter()
        .filter(|(_, on)| *on)
        .map(|(c, _)| *c)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------- Class state shared by first render and updates ----------------

pub fn navbar_class(nav: &NavBarState) -> String {
    classes(&[
        ("fixed top-0 w-full z-50 transition-all duration-500", true),
        ("glass py-2", nav.scrolled),
        ("bg-transparent py-4", !nav.scrolled),
        ("translate-y-0", nav.visible),
        ("-translate-y-full", !nav.visible),
    ])
}

pub fn nav_link_class(active: bool) -> String {
    classes(&[
        ("nav-link px-4 py-2 rounded-full transition-all duration-300 relative", true),
        ("text-primary font-medium", active),
        ("text-foreground hover:text-primary", !active),
    ])
}

pub fn mobile_link_class(active: bool) -> String {
    classes(&[
        ("nav-link block py-3 px-4 rounded-lg transition-all duration-300", true),
        ("bg-primary/15 text-primary font-medium", active),
        ("hover:bg-primary/10", !active),
    ])
}

pub fn mobile_menu_class(open: bool) -> String {
    classes(&[
        ("md:hidden overflow-hidden transition-all duration-500 ease-in-out", true),
        ("max-h-64 opacity-100 mt-2", open),
        ("max-h-0 opacity-0", !open),
    ])
}

pub fn indicator_class(active: bool) -> String {
    classes(&[
        ("indicator-dot block w-3 h-3 rounded-full transition-all duration-500", true),
        ("bg-primary scale-125 shadow-lg shadow-primary/50 animate-pulse", active),
        ("bg-muted hover:bg-primary/50 hover:scale-110", !active),
    ])
}

pub fn wrapper_class(active: bool) -> String {
    classes(&[
        ("section-wrapper transition-all duration-700 ease-out", true),
        ("opacity-100 translate-y-0 scale-100", active),
        ("opacity-80 translate-y-4 scale-[0.98]", !active),
    ])
}

pub fn gallery_class(modal_visible: bool) -> String {
    classes(&[
        ("parallax-container py-8", true),
        ("opacity-20 pointer-events-none", modal_visible),
        ("opacity-100", !modal_visible),
    ])
}

pub fn modal_class(visible: bool) -> String {
    classes(&[
        ("fixed top-0 left-0 w-full h-full flex items-center justify-center z-50 px-4", true),
        ("opacity-100 pointer-events-auto", visible),
        ("opacity-0 pointer-events-none", !visible),
    ])
}

pub fn loading_overlay_class(loaded: bool) -> String {
    classes(&[
        ("fixed inset-0 z-50 bg-background flex items-center justify-center transition-all duration-700", true),
        ("opacity-0 pointer-events-none", loaded),
        ("opacity-100", !loaded),
    ])
}

/// Width of the top progress bar for the active section.
pub fn progress_width(section: SectionId) -> String {
    let pct = (section.index() + 1) * 100 / SectionId::ALL.len();
    format!("{}%", pct)
}

// ---------------- Page chrome ----------------

pub fn render_navbar(active: SectionId, nav: &NavBarState) -> String {
    let desktop: String = SectionId::ALL
        .iter()
        .map(|s| {
            format!(
                "<a href=\"#{id}\" data-nav-target=\"{id}\" class=\"{class}\"><span class=\"relative z-10\">{label}</span></a>",
                id = s.dom_id(),
                class = nav_link_class(*s == active),
                label = s.label()
            )
        })
        .collect();
    let mobile: String = SectionId::ALL
        .iter()
        .map(|s| {
            format!(
                "<a href=\"#{id}\" data-nav-target=\"{id}\" data-mobile=\"1\" class=\"{class}\">{label}</a>",
                id = s.dom_id(),
                class = mobile_link_class(*s == active),
                label = s.label()
            )
        })
        .collect();
    format!(
        "<nav id=\"navbar\" class=\"{nav_class}\">\
<div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8\">\
<div class=\"flex justify-between items-center\">\
<a href=\"#home\" data-nav-target=\"home\" class=\"text-2xl font-bold text-shimmer\">Portfolio</a>\
<div class=\"md:hidden\"><button data-menu-toggle class=\"glass-card p-2 rounded-lg hover:glow-border\" aria-label=\"Toggle menu\">&#9776;</button></div>\
<div class=\"hidden md:flex space-x-1 items-center\">{desktop}</div>\
</div>\
<div id=\"mobile-menu\" class=\"{menu_class}\"><div class=\"glass rounded-lg p-2 space-y-1\">{mobile}</div></div>\
</div></nav>",
        nav_class = navbar_class(nav),
        menu_class = mobile_menu_class(nav.menu_open),
    )
}

pub fn render_indicator(active: SectionId) -> String {
    let dots: String = SectionId::ALL
        .iter()
        .map(|s| {
            format!(
                "<button data-nav-target=\"{id}\" class=\"{class}\" aria-label=\"Go to {id} section\"></button>",
                id = s.dom_id(),
                class = indicator_class(*s == active)
            )
        })
        .collect();
    format!(
        "<div id=\"section-indicator\" class=\"fixed right-8 top-1/2 transform -translate-y-1/2 z-40 space-y-3\">{}</div>",
        dots
    )
}

pub fn render_progress(active: SectionId) -> String {
    format!(
        "<div class=\"fixed top-0 left-0 w-full h-1 bg-muted/20 z-50\">\
<div id=\"progress-bar\" class=\"h-full bg-gradient-to-r from-primary to-accent transition-all duration-300 ease-out\" style=\"width: {}\"></div></div>",
        progress_width(active)
    )
}

pub fn render_loading_overlay() -> String {
    format!(
        "<div id=\"loading-overlay\" class=\"{}\"><div class=\"relative\">\
<div class=\"w-16 h-16 border-4 border-primary/30 border-t-primary rounded-full animate-spin-glow\"></div>\
<div class=\"absolute inset-0 w-16 h-16 border-4 border-transparent border-t-accent rounded-full animate-spin\"></div>\
</div></div>",
        loading_overlay_class(false)
    )
}

pub fn render_background() -> String {
    "<div class=\"fixed inset-0 z-0 overflow-hidden\">\
<div class=\"absolute -top-[20%] -left-[10%] w-[60%] h-[60%] bg-primary/20 rounded-full filter blur-[120px]\" data-parallax=\"0.1\"></div>\
<div class=\"absolute -bottom-[20%] -right-[10%] w-[60%] h-[60%] bg-accent/20 rounded-full filter blur-[120px]\" data-parallax=\"0.15\"></div>\
<div class=\"absolute top-[50%] left-[50%] w-[40%] h-[40%] bg-secondary/15 rounded-full filter blur-[100px]\" data-parallax=\"0.08\"></div>\
</div>"
        .to_string()
}

// ---------------- Sections ----------------

pub fn render_hero() -> String {
    format!(
        "<section id=\"home\" data-section class=\"min-h-screen flex flex-col justify-center relative overflow-hidden\">\
<div class=\"absolute -top-[15%] -left-[15%] w-[50%] h-[50%] bg-primary/25 rounded-full filter blur-[120px] bg-gradient transition-transform duration-75\" data-parallax-speed=\"0.2\"></div>\
<div class=\"absolute -bottom-[15%] -right-[15%] w-[50%] h-[50%] bg-accent/25 rounded-full filter blur-[120px] bg-gradient transition-transform duration-75\" data-parallax-speed=\"0.15\"></div>\
<div class=\"absolute top-[25%] right-[5%] w-[35%] h-[35%] bg-secondary/20 rounded-full filter blur-[100px] bg-gradient transition-transform duration-75\" data-parallax-speed=\"0.25\"></div>\
<div class=\"absolute inset-0 overflow-hidden opacity-30\">\
<div class=\"floating-element absolute top-[20%] left-[10%] w-4 h-4 bg-primary rounded-full animate-float\"></div>\
<div class=\"floating-element absolute top-[60%] right-[15%] w-6 h-6 bg-accent rounded-full animate-float\"></div>\
<div class=\"floating-element absolute bottom-[30%] left-[20%] w-3 h-3 bg-secondary rounded-full animate-float\"></div>\
<div class=\"floating-element absolute top-[40%] left-[70%] w-5 h-5 bg-primary/60 rounded-full animate-float\"></div>\
</div>\
<div class=\"absolute inset-0 overflow-hidden opacity-20\" data-parallax-speed=\"0.1\"><div class=\"absolute inset-0 hero-grid animate-pulse-opacity\"></div></div>\
<div class=\"section-container relative z-10 flex flex-col md:flex-row items-center\">\
<div class=\"w-full md:w-1/2 mb-12 md:mb-0\" data-parallax-speed=\"0.05\">\
<p class=\"text-lg opacity-80 mb-4 animate-fade-in\">&#128075; <span class=\"animate-wave inline-block\">Hello</span>, I'm</p>\
<h1 class=\"text-4xl md:text-6xl font-bold mb-4 relative\"><span class=\"text-shimmer glow-text\">{name}</span></h1>\
<h2 class=\"text-2xl md:text-3xl font-medium text-muted-foreground mb-6 animate-fade-in delay-200\">{role}</h2>\
<p class=\"text-lg opacity-80 max-w-lg mb-8 animate-fade-in delay-300\">{intro}</p>\
<div class=\"flex flex-wrap gap-3 animate-fade-in delay-400\">\
<a href=\"#projects\" data-nav-target=\"projects\" class=\"futuristic-button glass-card px-6 py-3 rounded-full font-medium\">View Projects</a>\
<a href=\"#contact\" data-nav-target=\"contact\" class=\"futuristic-button bg-primary text-primary-foreground px-6 py-3 rounded-full font-medium\">Contact Me</a>\
</div></div>\
<div class=\"w-full md:w-1/2 md:pl-10 animate-fade-in delay-500\" data-parallax-speed=\"0.08\">\
<div class=\"glass-card relative p-1 rounded-full mx-auto max-w-xs glow-border\">\
<div class=\"aspect-square rounded-full bg-gradient-to-br from-primary to-accent p-1 overflow-hidden relative\">\
<img src=\"{avatar}\" alt=\"Profile\" class=\"rounded-full object-cover w-full h-full p-2 animate-float\"/>\
</div></div></div>\
</div>\
<div class=\"absolute bottom-10 left-0 right-0 flex justify-center animate-bounce\">\
<a href=\"#about\" data-nav-target=\"about\" class=\"flex flex-col items-center group\"><span class=\"text-sm opacity-70 mb-2\">Scroll Down</span></a>\
</div>\
</section>",
        name = escape(PROFILE.name),
        role = escape(PROFILE.role),
        intro = escape(PROFILE.intro),
        avatar = escape(PROFILE.avatar_url),
    )
}

pub fn render_about() -> String {
    let paragraphs: String = ABOUT_PARAGRAPHS
        .iter()
        .enumerate()
        .map(|(i, p)| {
            format!(
                "<p class=\"opacity-90 animate-fade-in delay-{}00\">{}</p>",
                i + 1,
                escape(p)
            )
        })
        .collect();
    let timeline: String = EDUCATION
        .iter()
        .map(|e| {
            format!(
                "<div class=\"relative pl-6 border-l border-primary/30\">\
<div class=\"absolute -left-[7px] top-2 w-3 h-3 rounded-full bg-primary\"></div>\
<span class=\"text-sm text-primary font-medium\">{}</span>\
<h4 class=\"text-lg font-medium mt-1\">{}</h4>\
<p class=\"text-sm text-muted-foreground\">{}</p>\
<p class=\"mt-2 text-sm opacity-80\">{}</p></div>",
                escape(e.period),
                escape(e.degree),
                escape(e.institution),
                escape(e.description)
            )
        })
        .collect();
    format!(
        "<section id=\"about\" data-section class=\"relative\">\
<div class=\"section-container\">\
<h2 class=\"text-3xl md:text-4xl font-bold mb-8 text-center\"><span class=\"gradient-text\">About Me</span></h2>\
<div class=\"grid md:grid-cols-2 gap-12 items-center\">\
<div class=\"space-y-6\">{}</div>\
<div class=\"glass-card p-6 rounded-xl animate-fade-in delay-400\">\
<h3 class=\"text-2xl font-semibold mb-6 gradient-text\">Education Journey</h3>\
<div class=\"space-y-8\">{}</div></div>\
</div></div></section>",
        paragraphs, timeline
    )
}

/// Gallery card: first three tech tags plus a "+N more" chip.
pub fn render_project_card(project: &Project, index: usize) -> String {
    let mut tags: String = project
        .tech
        .iter()
        .take(3)
        .map(|t| {
            format!(
                "<span class=\"px-2 py-1 rounded-full bg-primary/10 text-primary text-xs\">{}</span>",
                escape(t)
            )
        })
        .collect();
    if project.tech.len() > 3 {
        tags.push_str(&format!(
            "<span class=\"px-2 py-1 rounded-full bg-muted/30 text-xs\">+{} more</span>",
            project.tech.len() - 3
        ));
    }
    format!(
        "<div data-project-id=\"{id}\" class=\"project-card w-[300px] sm:w-[350px] flex-shrink-0 glass-card p-6 cursor-pointer overflow-hidden\" style=\"animation-delay: {delay}ms\">\
<div class=\"relative h-40 mb-4 overflow-hidden rounded-lg\"><img src=\"{image}\" alt=\"{title}\" class=\"w-full h-full object-cover\"/></div>\
<h3 class=\"text-xl font-semibold mb-2\">{title}</h3>\
<p class=\"text-muted-foreground text-sm mb-4\">{description}</p>\
<div class=\"flex flex-wrap gap-2\">{tags}</div></div>",
        id = escape(project.id),
        delay = index * 100,
        image = escape(project.image),
        title = escape(project.title),
        description = escape(project.description),
        tags = tags,
    )
}

pub fn render_projects() -> String {
    let cards: String = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, p)| render_project_card(p, i))
        .collect();
    format!(
        "<section id=\"projects\" data-section class=\"py-24 relative\">\
<div class=\"absolute bottom-0 right-0 w-[30%] h-[40%] bg-accent/10 rounded-full filter blur-[100px]\"></div>\
<div class=\"section-container\">\
<h2 class=\"text-3xl md:text-4xl font-bold mb-12 text-center\"><span class=\"gradient-text\">Projects</span></h2>\
<p class=\"text-center mb-8 max-w-2xl mx-auto opacity-80\">Explore my projects by scrolling horizontally. Click on any project to see detailed information.</p>\
<div id=\"project-gallery\" class=\"{gallery_class}\"><div class=\"inline-flex space-x-6 px-4\">{cards}</div></div>\
</div></section>",
        gallery_class = gallery_class(false),
        cards = cards,
    )
}

/// Empty detail overlay. Lives outside the section wrappers so their
/// transforms do not turn its fixed positioning into a local one.
pub fn render_project_modal() -> String {
    format!("<div id=\"project-modal\" class=\"{}\"></div>", modal_class(false))
}

/// Inner content of the detail overlay for one project.
pub fn render_project_detail(project: &Project) -> String {
    let tech: String = project
        .tech
        .iter()
        .map(|t| {
            format!(
                "<span class=\"px-3 py-1 rounded-full bg-primary/10 text-primary text-xs\">{}</span>",
                escape(t)
            )
        })
        .collect();
    let requirements = match project.details.requirements {
        Some(reqs) => {
            let items: String = reqs
                .iter()
                .enumerate()
                .map(|(i, r)| {
                    format!(
                        "<li class=\"flex items-start\"><span class=\"inline-block w-5 h-5 rounded-full bg-primary/20 text-primary mr-3 flex-shrink-0 text-center text-xs\">{}</span>{}</li>",
                        i + 1,
                        escape(r)
                    )
                })
                .collect();
            format!(
                "<h4 class=\"text-lg font-medium mb-3 gradient-text\">Software Requirements</h4><ul class=\"mb-6 space-y-2\">{}</ul>",
                items
            )
        }
        None => String::new(),
    };
    let demo = match project.demo_url {
        Some(url) => format!(
            "<div class=\"flex justify-end\"><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"bg-primary text-primary-foreground px-6 py-3 rounded-lg font-medium inline-flex items-center\">View Demo</a></div>",
            escape(url)
        ),
        None => String::new(),
    };
    format!(
        "<div data-modal-close class=\"fixed inset-0 bg-black/50 backdrop-blur-sm\"></div>\
<div class=\"glass-card relative w-full max-w-3xl max-h-[80vh] overflow-y-auto z-10 p-8 animate-fade-in\">\
<button data-modal-close class=\"absolute top-4 right-4 p-2 rounded-full hover:bg-muted/50\" aria-label=\"Close\">&#10005;</button>\
<div class=\"relative h-48 sm:h-64 mb-6 overflow-hidden rounded-lg\"><img src=\"{image}\" alt=\"{title}\" class=\"w-full h-full object-cover\"/></div>\
<h3 class=\"text-2xl font-semibold mb-2\">{title}</h3>\
<div class=\"flex flex-wrap gap-2 mb-6\">{tech}</div>\
<h4 class=\"text-lg font-medium mb-3 gradient-text\">Project Overview</h4>\
<p class=\"mb-6 opacity-90\">{overview}</p>{requirements}{demo}</div>",
        image = escape(project.image),
        title = escape(project.title),
        tech = tech,
        overview = escape(project.details.description),
        requirements = requirements,
        demo = demo,
    )
}

/// Five level dots and a bar at `level * 20%`.
pub fn render_skill_meter(name: &str, level: u8) -> String {
    let level = level.min(SKILL_LEVEL_MAX);
    let dots: String = (0..SKILL_LEVEL_MAX)
        .map(|i| {
            format!(
                "<div class=\"w-2 h-2 rounded-full {}\"></div>",
                if i < level { "bg-primary" } else { "bg-muted" }
            )
        })
        .collect();
    format!(
        "<div class=\"space-y-2\"><div class=\"flex justify-between items-center\">\
<span class=\"font-medium\">{}</span><div class=\"flex space-x-1\">{}</div></div>\
<div class=\"h-1.5 w-full bg-muted rounded-full overflow-hidden\">\
<div class=\"h-full bg-primary rounded-full transition-all duration-500\" style=\"width: {}%\"></div></div></div>",
        escape(name),
        dots,
        level as u32 * 100 / SKILL_LEVEL_MAX as u32
    )
}

pub fn render_skills() -> String {
    let categories: String = SKILLS
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let meters: String = c
                .skills
                .iter()
                .map(|s| render_skill_meter(s.name, s.level))
                .collect();
            format!(
                "<div class=\"glass-card p-6 rounded-xl animate-fade-in\" style=\"animation-delay: {}ms\">\
<h3 class=\"text-xl font-semibold mb-6 gradient-text\">{}</h3><div class=\"space-y-6\">{}</div></div>",
                i * 100,
                escape(c.category),
                meters
            )
        })
        .collect();
    let chips: String = TECHNOLOGIES
        .iter()
        .map(|t| {
            format!(
                "<div class=\"glass-card py-3 px-5 rounded-full text-sm hover:scale-110 transition-transform duration-300\">{}</div>",
                escape(t)
            )
        })
        .collect();
    format!(
        "<section id=\"skills\" data-section class=\"py-24 relative\">\
<div class=\"absolute top-0 right-0 w-[20%] h-[30%] bg-secondary/10 rounded-full filter blur-[100px]\"></div>\
<div class=\"section-container\">\
<h2 class=\"text-3xl md:text-4xl font-bold mb-12 text-center\"><span class=\"gradient-text\">Skills &amp; Technologies</span></h2>\
<div class=\"grid md:grid-cols-2 gap-8\">{}</div>\
<div class=\"mt-16 text-center\"><h3 class=\"text-xl font-semibold mb-8 inline-block gradient-text\">Technologies I Work With</h3>\
<div class=\"flex items-center justify-center flex-wrap gap-6\">{}</div></div>\
</div></section>",
        categories, chips
    )
}

pub fn render_contact() -> String {
    let links: String = PROFILE
        .links
        .iter()
        .map(|l| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"glass-card px-5 py-3 rounded-full hover:glow-border\">{}</a>",
                escape(l.url),
                escape(l.label)
            )
        })
        .collect();
    format!(
        "<section id=\"contact\" data-section class=\"py-24 relative\">\
<div class=\"section-container text-center\">\
<h2 class=\"text-3xl md:text-4xl font-bold mb-8\"><span class=\"gradient-text\">Get In Touch</span></h2>\
<p class=\"max-w-xl mx-auto mb-8 opacity-80\">Have a project in mind or just want to say hello? My inbox is always open.</p>\
<a href=\"mailto:{email}\" class=\"futuristic-button bg-primary text-primary-foreground px-8 py-3 rounded-full font-medium\">{email}</a>\
<div class=\"flex justify-center gap-4 mt-10\">{links}</div>\
</div></section>",
        email = escape(PROFILE.email),
        links = links,
    )
}

pub fn render_footer(year: u32) -> String {
    format!(
        "<footer class=\"py-8 border-t border-primary/10\">\
<div class=\"section-container flex flex-col md:flex-row justify-between items-center gap-4 text-sm opacity-70\">\
<p>&copy; {} {}. All rights reserved.</p>\
<a href=\"#home\" data-nav-target=\"home\" class=\"hover:text-primary\">Back to top</a>\
</div></footer>",
        year,
        escape(PROFILE.name)
    )
}

fn render_section(section: SectionId, active: SectionId) -> String {
    let inner = match section {
        SectionId::Home => render_hero(),
        SectionId::About => render_about(),
        SectionId::Projects => render_projects(),
        SectionId::Skills => render_skills(),
        SectionId::Contact => render_contact(),
    };
    format!(
        "<div data-section-wrapper=\"{}\" class=\"{}\">{}</div>",
        section.dom_id(),
        wrapper_class(section == active),
        inner
    )
}

/// The whole page as mounted into `#app`.
pub fn render_page(active: SectionId, nav: &NavBarState, year: u32) -> String {
    let sections: String = SectionId::ALL
        .iter()
        .map(|s| render_section(*s, active))
        .collect();
    format!(
        "<div class=\"min-h-screen flex flex-col bg-background text-foreground overflow-x-hidden\">\
{background}{overlay}{navbar}<main class=\"flex-1\">{sections}</main>{footer}{modal}{indicator}{progress}</div>",
        background = render_background(),
        overlay = render_loading_overlay(),
        navbar = render_navbar(active, nav),
        sections = sections,
        footer = render_footer(year),
        modal = render_project_modal(),
        indicator = render_indicator(active),
        progress = render_progress(active),
    )
}
