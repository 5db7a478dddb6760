/// One full-viewport block of the page, in scroll order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Projects,
    Skills,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Contact,
    ];

    pub const LAST_INDEX: usize = Self::ALL.len() - 1;

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<SectionId> {
        Self::ALL.get(index).copied()
    }

    /// Index moved by `step` and clamped into the section range.
    pub fn offset_clamped(self, step: i32) -> SectionId {
        let target = (self.index() as i64 + step as i64).clamp(0, Self::LAST_INDEX as i64);
        Self::ALL[target as usize]
    }

    /// The element id used in the document.
    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<SectionId> {
        Self::ALL.iter().copied().find(|s| s.dom_id() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Contact => "Contact",
        }
    }
}
