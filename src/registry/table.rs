use super::types::{PageDescriptor, PageRegistry};

// (id, title, icon, short label)
const BUILTIN_PAGES: &[(&str, &str, &str, &str)] = &[
    ("index.html", "หน้าแรก", "fa-home", "หน้าแรก"),
    ("2.html", "ปัญหา", "fa-exclamation-triangle", "ปัญหา"),
    ("3.html", "โอกาส", "fa-chart-line", "โอกาส"),
    ("4.html", "โซลูชัน", "fa-lightbulb", "โซลูชัน"),
    ("5.html", "ลูกค้า", "fa-users", "ลูกค้า"),
    ("6.html", "แบรนด์", "fa-building", "แบรนด์"),
    ("7.html", "ฟีเจอร์", "fa-star", "ฟีเจอร์"),
    ("8.html", "Phase 2", "fa-rocket", "Phase 2"),
    ("9.html", "ตลาด", "fa-bullseye", "ตลาด"),
    ("10.html", "รายได้", "fa-dollar-sign", "รายได้"),
    ("11.html", "คู่แข่ง", "fa-chess", "คู่แข่ง"),
    ("12.html", "Roadmap", "fa-road", "Roadmap"),
    ("13.html", "ทีม", "fa-people-group", "ทีม"),
    ("14.html", "เงินทุน", "fa-wallet", "เงินทุน"),
    ("15.html", "CTA", "fa-phone", "ติดต่อ"),
];

/// The deck this crate ships with.
pub fn builtin_registry() -> PageRegistry {
    PageRegistry::from_validated(
        BUILTIN_PAGES
            .iter()
            .map(|&(id, title, icon, short)| PageDescriptor::new(id, title, icon, short))
            .collect(),
    )
}
