//! Compiled-in portfolio content

/// A portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub github: &'static str,
    pub demo: &'static str,
}

/// A blog post teaser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogPost {
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date
    pub date: &'static str,
    pub read_time: &'static str,
    pub category: &'static str,
    pub tags: &'static [&'static str],
}

/// A skill tile on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    /// Short glyph shown above the name
    pub badge: &'static str,
    pub name: &'static str,
}

/// Owner details shown in the hero and the footer
pub mod profile {
    pub const NAME: &str = "Your Name";
    pub const ROLE: &str = "Web Developer";
    pub const TAGLINE: &str =
        "I create beautiful and functional web experiences using modern technologies.";
    pub const BLURB: &str = "Building amazing web experiences with modern technologies.";
    pub const EMAIL: &str = "your.email@example.com";
    pub const LOCATION: &str = "Your Location";
    pub const GITHUB: &str = "https://github.com/yourusername";
    pub const LINKEDIN: &str = "https://linkedin.com/in/yourusername";
    pub const TWITTER: &str = "https://twitter.com/yourusername";
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack e-commerce solution built with React, Node.js, and MongoDB.",
        tags: &["React", "Node.js", "MongoDB", "Express"],
        github: "https://github.com/yourusername/project1",
        demo: "https://project1-demo.com",
    },
    Project {
        title: "Social Media Dashboard",
        description: "Real-time social media analytics dashboard with data visualization.",
        tags: &["React", "D3.js", "Firebase", "Material-UI"],
        github: "https://github.com/yourusername/project2",
        demo: "https://project2-demo.com",
    },
    Project {
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates.",
        tags: &["React", "Redux", "Socket.io", "PostgreSQL"],
        github: "https://github.com/yourusername/project3",
        demo: "https://project3-demo.com",
    },
    Project {
        title: "Weather Application",
        description: "Weather forecast application with interactive maps and charts.",
        tags: &["React", "OpenWeather API", "Leaflet", "Chart.js"],
        github: "https://github.com/yourusername/project4",
        demo: "https://project4-demo.com",
    },
    Project {
        title: "Blog Platform",
        description: "A modern blogging platform with markdown support and SEO optimization.",
        tags: &["Next.js", "GraphQL", "PostgreSQL", "Tailwind CSS"],
        github: "https://github.com/yourusername/project5",
        demo: "https://project5-demo.com",
    },
    Project {
        title: "Fitness Tracker",
        description: "Personal fitness tracking application with progress visualization.",
        tags: &["React Native", "Firebase", "Redux", "Victory Charts"],
        github: "https://github.com/yourusername/project6",
        demo: "https://project6-demo.com",
    },
];

/// Newest first; the first post is featured
pub const BLOG_POSTS: &[BlogPost] = &[
    BlogPost {
        title: "Getting Started with React Three Fiber",
        excerpt: "Learn how to create amazing 3D experiences on the web using React Three Fiber...",
        date: "2024-01-15",
        read_time: "5 min read",
        category: "Development",
        tags: &["React", "3D", "WebGL"],
    },
    BlogPost {
        title: "The Power of GSAP Animations",
        excerpt: "Explore the capabilities of GSAP for creating smooth and performant web animations...",
        date: "2024-01-10",
        read_time: "4 min read",
        category: "Animation",
        tags: &["GSAP", "Animation", "JavaScript"],
    },
    BlogPost {
        title: "Building Responsive Layouts with Tailwind CSS",
        excerpt: "A comprehensive guide to creating responsive and maintainable layouts using Tailwind CSS...",
        date: "2024-01-05",
        read_time: "6 min read",
        category: "CSS",
        tags: &["Tailwind", "CSS", "Responsive Design"],
    },
    BlogPost {
        title: "Modern State Management in React",
        excerpt: "Comparing different state management solutions in the React ecosystem...",
        date: "2023-12-28",
        read_time: "7 min read",
        category: "Development",
        tags: &["React", "State Management", "JavaScript"],
    },
];

pub const SKILLS: &[Skill] = &[
    Skill { badge: "⚛", name: "React" },
    Skill { badge: "JS", name: "JavaScript" },
    Skill { badge: "⬢", name: "Node.js" },
    Skill { badge: "5", name: "HTML5" },
    Skill { badge: "3", name: "CSS3" },
    Skill { badge: "⎇", name: "Git" },
    Skill { badge: "Py", name: "Python" },
    Skill { badge: "⛁", name: "SQL" },
];

/// Number of placeholder projects previewed on the home page
pub const FEATURED_PREVIEWS: usize = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_counts() {
        assert_eq!(PROJECTS.len(), 6);
        assert_eq!(BLOG_POSTS.len(), 4);
        assert_eq!(SKILLS.len(), 8);
        assert!(PROJECTS.iter().all(|p| !p.tags.is_empty()));
    }

    #[test]
    fn test_posts_are_newest_first() {
        assert!(BLOG_POSTS.windows(2).all(|pair| pair[0].date > pair[1].date));
    }
}
