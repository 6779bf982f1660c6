use std::fmt;

/// The named regions of the landing page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Hero,
    HowItWorks,
    Benefits,
    Retailers,
    Download,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::HowItWorks,
        SectionId::Benefits,
        SectionId::Retailers,
        SectionId::Download,
    ];

    /// The `id` attribute of the element rendering this section.
    pub fn element_id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::HowItWorks => "how-it-works",
            SectionId::Benefits => "benefits",
            SectionId::Retailers => "retailers",
            SectionId::Download => "download",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.element_id() == id)
    }

    /// Parses a location hash such as `#benefits`. The leading `#` is optional.
    pub fn from_fragment(hash: &str) -> Option<Self> {
        Self::from_element_id(hash.strip_prefix('#').unwrap_or(hash))
    }

    pub fn fragment(self) -> String {
        format!("#{}", self.element_id())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn element_ids_follow_document_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|s| s.element_id()).collect();
        assert_eq!(
            ids,
            vec!["hero", "how-it-works", "benefits", "retailers", "download"]
        );
    }

    #[test]
    fn fragments_parse_with_or_without_hash() {
        assert_eq!(SectionId::from_fragment("#retailers"), Some(SectionId::Retailers));
        assert_eq!(SectionId::from_fragment("download"), Some(SectionId::Download));
        assert_eq!(SectionId::from_fragment(""), None);
        assert_eq!(SectionId::from_fragment("#pricing"), None);
    }

    #[test]
    fn fragment_is_prefixed() {
        assert_eq!(SectionId::HowItWorks.fragment(), "#how-it-works");
        assert_eq!(SectionId::Benefits.to_string(), "benefits");
    }

    #[test]
    fn defaults_to_hero() {
        assert_eq!(SectionId::default(), SectionId::Hero);
    }
}
