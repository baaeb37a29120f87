//! Static page content. Everything here is `'static` and read-only; the UI
//! only ever borrows it.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Price {
    Free,
    Usd(u32),
}

impl Price {
    pub fn is_free(self) -> bool {
        matches!(self, Price::Free)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => write!(f, "Free"),
            Price::Usd(amount) => write!(f, "${}", amount),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseTheme {
    Ocean,
    Forest,
    Sunset,
    Dusk,
}

impl CourseTheme {
    pub fn class(self) -> &'static str {
        match self {
            CourseTheme::Ocean => "theme-ocean",
            CourseTheme::Forest => "theme-forest",
            CourseTheme::Sunset => "theme-sunset",
            CourseTheme::Dusk => "theme-dusk",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            CourseTheme::Ocean => "💻",
            CourseTheme::Forest => "🗄️",
            CourseTheme::Sunset => "📱",
            CourseTheme::Dusk => "🌐",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Advanced,
    Expert,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Difficulty::Beginner => "badge-green",
            Difficulty::Advanced => "badge-orange",
            Difficulty::Expert => "badge-red",
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Course {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub students: u32,
    pub rating: f32,
    pub price: Price,
    pub skills: &'static [&'static str],
    pub theme: CourseTheme,
}

impl Course {
    /// Chips shown on the card and how many skills were left out.
    pub fn skill_preview(&self, limit: usize) -> (&'static [&'static str], usize) {
        let skills = self.skills;
        let shown = &skills[..limit.min(skills.len())];
        (shown, skills.len() - shown.len())
    }
}

#[derive(Debug, PartialEq)]
pub struct TestSeries {
    pub id: u32,
    pub title: &'static str,
    pub questions: u32,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub topics: &'static [&'static str],
    pub price: Price,
    pub attempted: u32,
}

#[derive(Debug, PartialEq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq)]
pub struct LinkColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

static COURSES: [Course; 4] = [
    Course {
        id: 1,
        title: "Full Stack Web Development",
        description: "Master modern web development with React, Node.js, and MongoDB",
        duration: "12 weeks",
        level: "Beginner to Advanced",
        students: 2847,
        rating: 4.9,
        price: Price::Usd(199),
        skills: &["React", "Node.js", "MongoDB", "JavaScript", "CSS"],
        theme: CourseTheme::Ocean,
    },
    Course {
        id: 2,
        title: "Data Science & Analytics",
        description: "Learn Python, machine learning, and data visualization techniques",
        duration: "16 weeks",
        level: "Intermediate",
        students: 1923,
        rating: 4.8,
        price: Price::Usd(249),
        skills: &["Python", "Pandas", "TensorFlow", "SQL", "Tableau"],
        theme: CourseTheme::Forest,
    },
    Course {
        id: 3,
        title: "Mobile App Development",
        description: "Build native and cross-platform mobile apps with React Native",
        duration: "10 weeks",
        level: "Intermediate",
        students: 1456,
        rating: 4.7,
        price: Price::Usd(179),
        skills: &["React Native", "Flutter", "iOS", "Android", "Firebase"],
        theme: CourseTheme::Sunset,
    },
    Course {
        id: 4,
        title: "Cloud Computing & DevOps",
        description: "Master AWS, Docker, Kubernetes and modern deployment practices",
        duration: "14 weeks",
        level: "Advanced",
        students: 982,
        rating: 4.9,
        price: Price::Usd(299),
        skills: &["AWS", "Docker", "Kubernetes", "Jenkins", "Terraform"],
        theme: CourseTheme::Dusk,
    },
];

static TEST_SERIES: [TestSeries; 3] = [
    TestSeries {
        id: 1,
        title: "Programming Fundamentals",
        questions: 150,
        duration: "3 hours",
        difficulty: Difficulty::Beginner,
        topics: &["Data Structures", "Algorithms", "OOP", "Problem Solving"],
        price: Price::Free,
        attempted: 15420,
    },
    TestSeries {
        id: 2,
        title: "Advanced JavaScript",
        questions: 200,
        duration: "4 hours",
        difficulty: Difficulty::Advanced,
        topics: &["ES6+", "Async/Await", "Closures", "Prototypes"],
        price: Price::Usd(29),
        attempted: 8730,
    },
    TestSeries {
        id: 3,
        title: "System Design Interview",
        questions: 75,
        duration: "2.5 hours",
        difficulty: Difficulty::Expert,
        topics: &["Scalability", "Databases", "Caching", "Microservices"],
        price: Price::Usd(49),
        attempted: 3210,
    },
];

static STATS: [Stat; 3] = [
    Stat {
        value: "50,000+",
        label: "Active Students",
        accent: "accent-blue",
    },
    Stat {
        value: "200+",
        label: "Expert Instructors",
        accent: "accent-purple",
    },
    Stat {
        value: "95%",
        label: "Job Placement Rate",
        accent: "accent-green",
    },
];

static HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: "🏅",
        title: "Industry-Recognized Certificates",
        description: "Get certificates that employers value and trust",
    },
    Highlight {
        icon: "👥",
        title: "Expert Instructors",
        description: "Learn from professionals working at top tech companies",
    },
    Highlight {
        icon: "⚡",
        title: "Hands-on Projects",
        description: "Build real-world projects that showcase your skills",
    },
];

static FOOTER_COLUMNS: [LinkColumn; 3] = [
    LinkColumn {
        heading: "Courses",
        links: &["Web Development", "Data Science", "Mobile Development", "Cloud Computing"],
    },
    LinkColumn {
        heading: "Company",
        links: &["About Us", "Careers", "Contact", "Blog"],
    },
    LinkColumn {
        heading: "Support",
        links: &["Help Center", "Community", "Privacy Policy", "Terms of Service"],
    },
];

pub fn courses() -> &'static [Course] {
    &COURSES
}

pub fn test_series() -> &'static [TestSeries] {
    &TEST_SERIES
}

pub fn stats() -> &'static [Stat] {
    &STATS
}

pub fn highlights() -> &'static [Highlight] {
    &HIGHLIGHTS
}

pub fn footer_columns() -> &'static [LinkColumn] {
    &FOOTER_COLUMNS
}

/// Formats a count with comma thousands separators, e.g. `15420` -> `15,420`.
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
