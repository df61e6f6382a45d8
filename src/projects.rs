use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub image: &'static str,
    pub live_url: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "RentFlow",
        category: "Full-Stack Development",
        description: "A comprehensive property management system for landlords to track rentals, tenants, and payments.",
        tags: &["React", "TypeScript", "Supabase"],
        image: "https://images.unsplash.com/photo-1560518883-ce09059eeffa?w=800&q=80",
        live_url: Some("https://rentflow.work/"),
    },
    Project {
        id: 2,
        title: "E-Commerce Platform",
        category: "Front-End Development",
        description: "A fully responsive e-commerce website with modern UI/UX, optimized for conversions and mobile users.",
        tags: &["HTML5", "CSS3", "JavaScript"],
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?w=800&q=80",
        live_url: None,
    },
    Project {
        id: 3,
        title: "SaaS Dashboard",
        category: "Web Application",
        description: "Interactive analytics dashboard featuring real-time data visualization and intuitive navigation.",
        tags: &["JavaScript", "Responsive Design", "API Integration"],
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800&q=80",
        live_url: None,
    },
    Project {
        id: 4,
        title: "Corporate Website",
        category: "Business Website",
        description: "Professional corporate website with emphasis on brand identity, accessibility, and performance.",
        tags: &["HTML5", "CSS Grid", "SEO"],
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&q=80",
        live_url: None,
    },
];

/// Projects shown on the home page grid, in display order.
pub fn featured() -> &'static [Project] {
    PROJECTS
}

/// Distinct categories in first-seen order, used by the projects page filter.
pub fn categories() -> Vec<&'static str> {
    let mut seen = HashSet::new();
    PROJECTS
        .iter()
        .map(|p| p.category)
        .filter(|c| seen.insert(*c))
        .collect()
}

pub fn by_category(category: Option<&str>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

pub fn ids_are_unique(projects: &[Project]) -> bool {
    let mut seen = HashSet::new();
    projects.iter().all(|p| seen.insert(p.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_ids_are_unique() {
        assert!(ids_are_unique(PROJECTS));
    }

    #[test]
    fn duplicate_ids_are_detected() {
        let dup = vec![PROJECTS[0].clone(), PROJECTS[0].clone()];
        assert!(!ids_are_unique(&dup));
    }

    #[test]
    fn only_rentflow_has_a_live_site() {
        let live: Vec<_> = PROJECTS.iter().filter(|p| p.live_url.is_some()).map(|p| p.title).collect();
        assert_eq!(live, vec!["RentFlow"]);
    }

    #[test]
    fn categories_keep_first_seen_order() {
        assert_eq!(
            categories(),
            vec![
                "Full-Stack Development",
                "Front-End Development",
                "Web Application",
                "Business Website",
            ]
        );
    }

    #[test]
    fn filtering_by_category() {
        assert_eq!(by_category(None).len(), PROJECTS.len());
        let web_apps = by_category(Some("Web Application"));
        assert_eq!(web_apps.len(), 1);
        assert_eq!(web_apps[0].id, 3);
        assert!(by_category(Some("Mobile")).is_empty());
    }
}
