// Portfolio content compiled into the binary.

#[derive(Debug, PartialEq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub avatar_url: &'static str,
    pub email: &'static str,
    pub links: &'static [SocialLink],
}

#[derive(Debug, PartialEq)]
pub struct SocialLink {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct EducationItem {
    pub period: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    /// 1..=5
    pub level: u8,
}

#[derive(Debug, PartialEq)]
pub struct SkillCategory {
    pub category: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, PartialEq)]
pub struct ProjectDetails {
    pub description: &'static str,
    pub requirements: Option<&'static [&'static str]>,
}

#[derive(Debug, PartialEq)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tech: &'static [&'static str],
    pub demo_url: Option<&'static str>,
    pub details: ProjectDetails,
}

pub static PROFILE: Profile = Profile {
    name: "Koushik Amboru",
    role: "Full Stack Developer & AI/ML Specialist",
    intro: "I craft modern web experiences using Next.js, TypeScript, and AI technologies. \
            Currently pursuing B.Tech in Computer Science with AI/ML specialization.",
    avatar_url: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7",
    email: "hello@amborukoushik.dev",
    links: &[
        SocialLink {
            label: "GitHub",
            url: "https://github.com/amborukoushik",
        },
        SocialLink {
            label: "LinkedIn",
            url: "https://www.linkedin.com/in/amborukoushik",
        },
    ],
};

pub static ABOUT_PARAGRAPHS: [&str; 3] = [
    "I am a passionate developer on a journey to create elegant solutions through code. \
     My educational path has led me from basic programming to advanced web development \
     and artificial intelligence.",
    "With a foundation in traditional computer science and a growing expertise in modern \
     frameworks like Next.js and TypeScript, I bridge technical knowledge with creative \
     problem solving.",
    "As I continue my B.Tech in Computer Science with a specialization in AI/ML, \
     I'm constantly exploring new technologies and taking on freelance projects \
     that challenge me to grow as a developer.",
];

pub static EDUCATION: [EducationItem; 3] = [
    EducationItem {
        period: "2023 - Present",
        degree: "B.Tech in Computer Science (AI/ML)",
        institution: "Your University",
        description: "Specializing in Artificial Intelligence and Machine Learning with focus on deep learning models and neural networks.",
    },
    EducationItem {
        period: "2020 - 2023",
        degree: "Diploma in Computer Science",
        institution: "Your College",
        description: "Gained strong fundamentals in programming, data structures, algorithms and web development.",
    },
    EducationItem {
        period: "2019 - 2020",
        degree: "10th Standard",
        institution: "Your School",
        description: "Completed secondary education with distinction and developed interest in computer science.",
    },
];

pub static SKILLS: [SkillCategory; 4] = [
    SkillCategory {
        category: "Frontend",
        skills: &[
            Skill { name: "HTML5", level: 5 },
            Skill { name: "CSS3", level: 4 },
            Skill { name: "JavaScript", level: 5 },
            Skill { name: "TypeScript", level: 4 },
            Skill { name: "React", level: 5 },
            Skill { name: "Next.js", level: 4 },
            Skill { name: "Tailwind CSS", level: 5 },
            Skill { name: "SASS", level: 3 },
        ],
    },
    SkillCategory {
        category: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 4 },
            Skill { name: "Express", level: 4 },
            Skill { name: "MongoDB", level: 3 },
            Skill { name: "PostgreSQL", level: 3 },
            Skill { name: "Firebase", level: 4 },
            Skill { name: "GraphQL", level: 3 },
        ],
    },
    SkillCategory {
        category: "AI/ML",
        skills: &[
            Skill { name: "Python", level: 4 },
            Skill { name: "TensorFlow", level: 3 },
            Skill { name: "PyTorch", level: 2 },
            Skill { name: "NLP", level: 3 },
            Skill { name: "Computer Vision", level: 2 },
        ],
    },
    SkillCategory {
        category: "Tools",
        skills: &[
            Skill { name: "Git", level: 5 },
            Skill { name: "Docker", level: 3 },
            Skill { name: "AWS", level: 3 },
            Skill { name: "Figma", level: 4 },
            Skill { name: "Jira", level: 3 },
        ],
    },
];

pub static TECHNOLOGIES: [&str; 11] = [
    "Next.js",
    "React",
    "TypeScript",
    "Node.js",
    "Tailwind CSS",
    "MongoDB",
    "GraphQL",
    "Firebase",
    "AWS",
    "Python",
    "TensorFlow",
];

pub static PROJECTS: [Project; 4] = [
    Project {
        id: "ecommerce",
        title: "E-Commerce Platform",
        description: "A full-featured online shopping platform with modern payment integration",
        image: "https://images.unsplash.com/photo-1593642532842-98d0fd5ebc1a",
        tech: &["Next.js", "TypeScript", "Tailwind CSS", "Stripe", "MongoDB"],
        demo_url: Some("https://example.com/demo1"),
        details: ProjectDetails {
            description: "Built a comprehensive e-commerce solution with secure payment processing, \
                          inventory management, and user authentication. Implemented responsive design \
                          principles and optimized for performance.",
            requirements: Some(&[
                "User authentication and authorization system",
                "Product catalog with categories and search",
                "Shopping cart and checkout process",
                "Payment gateway integration",
                "Order management and tracking",
            ]),
        },
    },
    Project {
        id: "ai-assistant",
        title: "AI Research Assistant",
        description: "An AI-powered research tool that helps summarize academic papers",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485",
        tech: &["React", "Python", "TensorFlow", "Natural Language Processing", "FastAPI"],
        demo_url: None,
        details: ProjectDetails {
            description: "Developed an intelligent assistant that uses NLP to analyze and summarize \
                          research papers. The system extracts key insights, generates summaries, and \
                          provides related research recommendations.",
            requirements: Some(&[
                "Document upload and processing system",
                "AI-powered text summarization",
                "Keyword extraction and analysis",
                "Related research recommendation engine",
                "User history and preferences tracking",
            ]),
        },
    },
    Project {
        id: "portfolio",
        title: "Portfolio Website",
        description: "A personal portfolio website with glassmorphism design and parallax scrolling",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d",
        tech: &["Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"],
        demo_url: Some("https://example.com/demo3"),
        details: ProjectDetails {
            description: "Designed and developed a modern portfolio website using glassmorphism \
                          principles and smooth scrolling effects. The site showcases projects and \
                          skills with an engaging user interface.",
            requirements: Some(&[
                "Responsive design for all devices",
                "Horizontal scrolling project gallery",
                "Glassmorphism UI components",
                "Animated transitions between sections",
                "Contact form with email integration",
            ]),
        },
    },
    Project {
        id: "social-media",
        title: "Social Media Dashboard",
        description: "An analytics dashboard for managing multiple social media accounts",
        image: "https://images.unsplash.com/photo-1611162617474-5b21e879e113",
        tech: &["React", "Redux", "D3.js", "Firebase", "OAuth"],
        demo_url: None,
        details: ProjectDetails {
            description: "Created a comprehensive dashboard that integrates with various social media \
                          APIs to provide analytics, scheduling, and content management capabilities \
                          in one platform.",
            requirements: Some(&[
                "Multi-platform social media integration",
                "Analytics and reporting dashboard",
                "Content scheduling and calendar",
                "Performance metrics visualization",
                "Team collaboration features",
            ]),
        },
    },
];

pub fn project_by_id(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}
