//! Hard-coded page content. Everything here is `'static` and has no identity
//! beyond its position in the list.

use crate::components::icons::Icon;

pub const NAV_LINKS: [&str; 5] = ["Home", "Services", "Projects", "Process", "Contact"];

/// In-page anchor for a navigation label, e.g. `"Services"` -> `"#services"`.
pub fn anchor_for(label: &str) -> String {
    format!("#{}", label.to_lowercase())
}

pub const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1621905251189-08b45d6a269e?q=80&w=2669&auto=format&fit=crop";
pub const BEFORE_IMAGE: &str = "https://images.unsplash.com/photo-1531403009284-440f080d1e12?q=80&w=2574&auto=format&fit=crop";
pub const AFTER_IMAGE: &str = "https://images.unsplash.com/photo-1600607686527-6fb886090705?q=80&w=2700&auto=format&fit=crop";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Service {
    pub title: &'static str,
    pub icon: Icon,
    pub items: &'static [&'static str],
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Construction & Structure",
        icon: Icon::HardHat,
        items: &[
            "Building Construction & Design",
            "Road Maintenance & Construction",
            "Steel Portal Frames",
            "Demolition",
        ],
    },
    Service {
        title: "Interiors & Finishing",
        icon: Icon::Ruler,
        items: &[
            "Drywall installation",
            "Aluminium & Ceiling Works",
            "Tile work installation",
            "Floor fitting",
        ],
    },
    Service {
        title: "Systems & Installations",
        icon: Icon::Zap,
        items: &[
            "Electrical Installations",
            "Plumbing",
            "Fan installation",
            "Furniture assembly",
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        num: "01",
        title: "Consultation",
        desc: "We meet to discuss your vision, budget, and site requirements.",
    },
    ProcessStep {
        num: "02",
        title: "Planning & Design",
        desc: "Our engineers create detailed blueprints and structural plans.",
    },
    ProcessStep {
        num: "03",
        title: "Procurement",
        desc: "Sourcing premium materials (aluminum, glass, concrete) from our trusted suppliers.",
    },
    ProcessStep {
        num: "04",
        title: "Construction",
        desc: "Precision execution by our skilled team with regular safety checks.",
    },
    ProcessStep {
        num: "05",
        title: "Handover",
        desc: "Final inspection and key handover for your new reality.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stat {
    pub value: u32,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { value: 150, label: "Projects Completed" },
    Stat { value: 12, label: "Years Experience" },
    Stat { value: 3500, label: "Sq. Meters Built" },
    Stat { value: 100, label: "Happy Clients" },
];

pub const TRUST_ITEMS: [&str; 5] = [
    "Authorized Supplier",
    "Safety First",
    "Premium Materials",
    "Grade A Contractors",
    "ISO Certified",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

pub const GALLERY: [GalleryItem; 3] = [
    GalleryItem {
        image: "https://images.unsplash.com/photo-1504307651254-35680f356dfd?q=80&w=2670&auto=format&fit=crop",
        alt: "Partitions",
        caption: "Office Partitions",
    },
    GalleryItem {
        image: "https://images.unsplash.com/photo-1595846519845-68e298c2edd8?q=80&w=2574&auto=format&fit=crop",
        alt: "Windows",
        caption: "Aluminium Windows",
    },
    GalleryItem {
        image: "https://images.unsplash.com/photo-1628744876497-eb30460be9f6?q=80&w=2670&auto=format&fit=crop",
        alt: "Materials",
        caption: "Modern Materials",
    },
];

pub const SERVICE_OPTIONS: [&str; 4] = [
    "Construction",
    "Aluminium & Glass",
    "Renovation",
    "Materials Supply",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: Icon,
    pub heading: &'static str,
    pub value: &'static str,
}

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail { icon: Icon::Phone, heading: "Call Us", value: "0211278100" },
    ContactDetail {
        icon: Icon::Mail,
        heading: "Email",
        value: "straightedgeconstructiona@gmail.com",
    },
    ContactDetail {
        icon: Icon::MapPin,
        heading: "Location",
        value: "Mass Media, 38767 Alick Nkata Rd, Lusaka",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nav_links_map_to_section_anchors() {
        let anchors: Vec<String> = NAV_LINKS.iter().map(|l| anchor_for(l)).collect();
        assert_eq!(
            anchors,
            vec!["#home", "#services", "#projects", "#process", "#contact"]
        );
    }

    #[test]
    fn every_service_has_items() {
        for service in SERVICES.iter() {
            assert!(!service.items.is_empty(), "{} has no items", service.title);
        }
    }

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.num, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn contact_form_offers_four_services() {
        assert_eq!(SERVICE_OPTIONS.len(), 4);
        assert_eq!(SERVICE_OPTIONS[0], "Construction");
    }
}
