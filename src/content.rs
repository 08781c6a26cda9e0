//! Site Content
//!
//! The fixed skills, projects and profile rendered by the page.

use crate::models::{Profile, ProfilePhoto, Project, SocialLink};

pub const SKILLS: [&str; 10] = [
    "Ruby on Rails",
    "JavaScript (ES6+)",
    "HTML & CSS",
    "SQL & PostgreSQL",
    "React",
    "Git & GitHub",
    "Python & Data Science",
    "Figma & UI Design",
    "Heroku Deployment",
    "CAD & Mechanical Design",
];

pub const PROJECTS: [Project; 3] = [
    Project {
        title: "Airbnb Replica",
        link: "https://github.com/ibby-ali2/airbnb-clone",
        description: "A clean clone of Airbnb homepage with card layouts using Ruby on Rails, CSS, Bootstrap, and SQLite.",
    },
    Project {
        title: "Deliveroo Clone",
        link: "https://github.com/ibby-ali2/deliveroo-clone",
        description: "Food delivery platform with full CRUD, MVC structure, and restaurant database built in Ruby on Rails.",
    },
    Project {
        title: "MedFly",
        link: "https://medfly-lewagon-4a2de7cc09aa.herokuapp.com/",
        description: "Full-stack app for drone delivery of medication with mobile-first design and Figma prototypes.",
    },
];

pub const SOCIALS: [SocialLink; 2] = [
    SocialLink {
        label: "GitHub",
        href: "https://github.com/ibby-ali2",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/ibby-ali/",
    },
];

pub const PROFILE: Profile = Profile {
    name: "Ibrahim Ali",
    intro: "Technically strong engineer turned full-stack developer, passionate about clean code, \
            team-driven problem solving, and continuous learning. Currently sharpening skills through \
            the Le Wagon bootcamp.",
    about: "I’m Ibrahim, a mechanical engineer turned developer combining technical design with modern \
            web technologies. I thrive in team environments, enjoy problem-solving, and am passionate \
            about building impactful software that blends user experience with robust backend logic.",
    photo: ProfilePhoto {
        src: "images/profile.jpeg",
        alt: "Photo of Ibrahim Ali",
    },
    socials: &SOCIALS,
    copyright_year: 2025,
};
