/// The page's content sections, in their fixed vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Education,
    Projects,
    Skills,
    Experience,
    OnlinePresence,
    Contact,
}

impl Section {
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::OnlinePresence,
        Section::Contact,
    ];

    /// Sections linked from the navbar. Online presence is reachable by
    /// scrolling but has no nav entry.
    pub const NAV: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Experience,
        Section::Contact,
    ];

    /// In-page anchor id used for smooth scrolling.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Experience => "experience",
            Section::OnlinePresence => "online-presence",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Experience => "Experience",
            Section::OnlinePresence => "Online Presence",
            Section::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_order_is_fixed() {
        let anchors = Section::ALL.map(|s| s.anchor());
        assert_eq!(
            anchors,
            [
                "home",
                "about",
                "education",
                "projects",
                "skills",
                "experience",
                "online-presence",
                "contact",
            ]
        );
    }

    #[test]
    fn anchors_are_unique() {
        let anchors = Section::ALL.map(|s| s.anchor());
        for (i, a) in anchors.iter().enumerate() {
            for b in &anchors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn nav_skips_online_presence() {
        assert!(!Section::NAV.contains(&Section::OnlinePresence));
        assert_eq!(Section::NAV.len(), Section::ALL.len() - 1);
    }
}
